//! Client Profile Use Case
//!
//! Read, partial update and removal of one client.

use std::sync::Arc;

use crate::domain::entity::client::{Client, ClientPatch};
use crate::domain::repository::ClientRepository;
use crate::domain::value_object::ids::ClientId;
use crate::error::LoyaltyResult;

pub struct ClientProfileUseCase<R>
where
    R: ClientRepository,
{
    repo: Arc<R>,
}

impl<R> ClientProfileUseCase<R>
where
    R: ClientRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, client_id: &ClientId) -> LoyaltyResult<Option<Client>> {
        self.repo.find_by_id(client_id).await
    }

    pub async fn update(
        &self,
        client_id: &ClientId,
        patch: ClientPatch,
    ) -> LoyaltyResult<Option<Client>> {
        self.repo.update(client_id, patch).await
    }

    pub async fn delete(&self, client_id: &ClientId) -> LoyaltyResult<bool> {
        let deleted = self.repo.delete(client_id).await?;
        if deleted {
            tracing::info!(client_id = %client_id, "Client deleted");
        }
        Ok(deleted)
    }
}
