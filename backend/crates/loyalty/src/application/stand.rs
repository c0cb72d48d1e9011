//! Stand Use Case

use std::sync::Arc;

use crate::domain::entity::stand::{NewStand, Stand, StandPatch};
use crate::domain::repository::StandRepository;
use crate::domain::value_object::ids::StandId;
use crate::error::LoyaltyResult;

pub struct StandUseCase<R>
where
    R: StandRepository,
{
    repo: Arc<R>,
}

impl<R> StandUseCase<R>
where
    R: StandRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: NewStand) -> LoyaltyResult<Stand> {
        let stand = self.repo.create(&Stand::new(input)).await?;
        tracing::info!(stand_id = %stand.stand_id, name = %stand.name, "Stand created");
        Ok(stand)
    }

    pub async fn get(&self, stand_id: &StandId) -> LoyaltyResult<Option<Stand>> {
        self.repo.find_by_id(stand_id).await
    }

    pub async fn list(&self) -> LoyaltyResult<Vec<Stand>> {
        self.repo.list().await
    }

    pub async fn update(
        &self,
        stand_id: &StandId,
        patch: StandPatch,
    ) -> LoyaltyResult<Option<Stand>> {
        self.repo.update(stand_id, patch).await
    }

    pub async fn delete(&self, stand_id: &StandId) -> LoyaltyResult<bool> {
        let deleted = self.repo.delete(stand_id).await?;
        if deleted {
            tracing::info!(stand_id = %stand_id, "Stand deleted");
        }
        Ok(deleted)
    }
}
