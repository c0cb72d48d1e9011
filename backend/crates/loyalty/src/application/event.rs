//! Event Use Case

use std::sync::Arc;

use crate::domain::entity::event::{Event, EventPatch, NewEvent};
use crate::domain::repository::EventRepository;
use crate::domain::value_object::ids::EventId;
use crate::error::LoyaltyResult;

pub struct EventUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> EventUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: NewEvent) -> LoyaltyResult<Event> {
        let event = self.repo.create(&Event::new(input)).await?;
        tracing::info!(
            event_id = %event.event_id,
            points = event.points,
            "Event created"
        );
        Ok(event)
    }

    pub async fn get(&self, event_id: &EventId) -> LoyaltyResult<Option<Event>> {
        self.repo.find_by_id(event_id).await
    }

    pub async fn list(&self) -> LoyaltyResult<Vec<Event>> {
        self.repo.list().await
    }

    pub async fn update(
        &self,
        event_id: &EventId,
        patch: EventPatch,
    ) -> LoyaltyResult<Option<Event>> {
        self.repo.update(event_id, patch).await
    }

    pub async fn delete(&self, event_id: &EventId) -> LoyaltyResult<bool> {
        let deleted = self.repo.delete(event_id).await?;
        if deleted {
            tracing::info!(event_id = %event_id, "Event deleted");
        }
        Ok(deleted)
    }
}
