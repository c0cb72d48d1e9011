//! Analytic Use Case

use std::sync::Arc;

use crate::domain::entity::analytic::{Analytic, AnalyticBucket};
use crate::domain::repository::AnalyticRepository;
use crate::domain::value_object::ids::{ClientId, StandId};
use crate::error::LoyaltyResult;

pub struct AnalyticUseCase<R>
where
    R: AnalyticRepository,
{
    repo: Arc<R>,
}

impl<R> AnalyticUseCase<R>
where
    R: AnalyticRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Record a visit timestamped now. References are stored unchecked.
    pub async fn record(
        &self,
        client_id: Option<ClientId>,
        stand_id: Option<StandId>,
    ) -> LoyaltyResult<Analytic> {
        let analytic = self.repo.create(&Analytic::record(client_id, stand_id)).await?;
        tracing::debug!(analytic_id = %analytic.analytic_id, "Visit recorded");
        Ok(analytic)
    }

    pub async fn grouped(&self) -> LoyaltyResult<Vec<AnalyticBucket>> {
        self.repo.grouped().await
    }
}
