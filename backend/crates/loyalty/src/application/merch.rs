//! Merch Use Case

use std::sync::Arc;

use crate::domain::entity::merch::{Merch, MerchPatch, NewMerch};
use crate::domain::repository::MerchRepository;
use crate::domain::value_object::ids::MerchId;
use crate::error::LoyaltyResult;

pub struct MerchUseCase<R>
where
    R: MerchRepository,
{
    repo: Arc<R>,
}

impl<R> MerchUseCase<R>
where
    R: MerchRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: NewMerch) -> LoyaltyResult<Merch> {
        let merch = self.repo.create(&Merch::new(input)).await?;
        tracing::info!(
            merch_id = %merch.merch_id,
            points_needed = merch.points_needed,
            "Merch created"
        );
        Ok(merch)
    }

    pub async fn get(&self, merch_id: &MerchId) -> LoyaltyResult<Option<Merch>> {
        self.repo.find_by_id(merch_id).await
    }

    pub async fn list(&self) -> LoyaltyResult<Vec<Merch>> {
        self.repo.list().await
    }

    pub async fn update(
        &self,
        merch_id: &MerchId,
        patch: MerchPatch,
    ) -> LoyaltyResult<Option<Merch>> {
        self.repo.update(merch_id, patch).await
    }

    pub async fn delete(&self, merch_id: &MerchId) -> LoyaltyResult<bool> {
        let deleted = self.repo.delete(merch_id).await?;
        if deleted {
            tracing::info!(merch_id = %merch_id, "Merch deleted");
        }
        Ok(deleted)
    }
}
