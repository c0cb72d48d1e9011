//! Point Use Case
//!
//! Balances are overwritten, never accumulated: the last upsert wins.

use std::sync::Arc;

use crate::domain::entity::point::Point;
use crate::domain::repository::PointRepository;
use crate::domain::value_object::ids::ClientId;
use crate::error::LoyaltyResult;

pub struct PointUseCase<R>
where
    R: PointRepository,
{
    repo: Arc<R>,
}

impl<R> PointUseCase<R>
where
    R: PointRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Unknown clients fail with `ConstraintViolation`.
    pub async fn upsert(&self, client_id: ClientId, total_points: i32) -> LoyaltyResult<Point> {
        let point = self.repo.upsert(&Point::new(client_id, total_points)).await?;
        tracing::info!(
            client_id = %point.client_id,
            total_points = point.total_points,
            "Points balance set"
        );
        Ok(point)
    }

    pub async fn get(&self, client_id: &ClientId) -> LoyaltyResult<Option<Point>> {
        self.repo.find_by_client_id(client_id).await
    }
}
