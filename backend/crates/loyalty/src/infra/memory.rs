//! In-memory repository for tests
//!
//! Mirrors the storage rules of the PostgreSQL schema: unique client email,
//! `events.stand_id` and `points.user_id` foreign keys with their delete
//! actions, and non-negative points.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::domain::entity::{
    analytic::{Analytic, AnalyticBucket},
    client::{Client, ClientPatch},
    event::{Event, EventPatch},
    merch::{Merch, MerchPatch},
    point::Point,
    stand::{Stand, StandPatch},
};
use crate::domain::repository::{
    AnalyticRepository, ClientRepository, EventRepository, MerchRepository, PointRepository,
    StandRepository,
};
use crate::domain::value_object::{
    email::Email,
    ids::{ClientId, EventId, MerchId, StandId},
};
use crate::error::{LoyaltyError, LoyaltyResult};

#[derive(Default)]
struct MemoryState {
    clients: HashMap<ClientId, Client>,
    stands: HashMap<StandId, Stand>,
    events: HashMap<EventId, Event>,
    merch: HashMap<MerchId, Merch>,
    points: HashMap<ClientId, Point>,
    analytics: Vec<Analytic>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

fn violation(constraint: &str) -> LoyaltyError {
    LoyaltyError::ConstraintViolation {
        constraint: Some(constraint.to_string()),
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> LoyaltyResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| LoyaltyError::Internal("memory store poisoned".into()))
    }

    pub fn analytics_len(&self) -> usize {
        self.lock().map(|s| s.analytics.len()).unwrap_or_default()
    }

    /// Insert a visit with a chosen timestamp.
    pub fn push_analytic(&self, analytic: Analytic) {
        if let Ok(mut state) = self.lock() {
            state.analytics.push(analytic);
        }
    }
}

/// `ORDER BY name, id`: ties on name fall back to the uuid bytes.
fn sorted_by_name<T>(
    items: impl Iterator<Item = T>,
    key: impl Fn(&T) -> (&str, &Uuid),
) -> Vec<T> {
    let mut items: Vec<T> = items.collect();
    items.sort_by(|a, b| key(a).cmp(&key(b)));
    items
}

impl ClientRepository for MemoryStore {
    async fn create(&self, client: &Client) -> LoyaltyResult<Client> {
        let mut state = self.lock()?;
        if state.clients.values().any(|c| c.email == client.email) {
            return Err(violation("clients_email_key"));
        }
        state.clients.insert(client.client_id, client.clone());
        Ok(client.clone())
    }

    async fn find_by_id(&self, client_id: &ClientId) -> LoyaltyResult<Option<Client>> {
        Ok(self.lock()?.clients.get(client_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> LoyaltyResult<Option<Client>> {
        Ok(self
            .lock()?
            .clients
            .values()
            .find(|c| &c.email == email)
            .cloned())
    }

    async fn update(
        &self,
        client_id: &ClientId,
        patch: ClientPatch,
    ) -> LoyaltyResult<Option<Client>> {
        let mut state = self.lock()?;
        Ok(state.clients.get_mut(client_id).map(|client| {
            client.apply(patch);
            client.clone()
        }))
    }

    async fn delete(&self, client_id: &ClientId) -> LoyaltyResult<bool> {
        let mut state = self.lock()?;
        let removed = state.clients.remove(client_id).is_some();
        if removed {
            state.points.remove(client_id);
        }
        Ok(removed)
    }
}

impl StandRepository for MemoryStore {
    async fn create(&self, stand: &Stand) -> LoyaltyResult<Stand> {
        self.lock()?.stands.insert(stand.stand_id, stand.clone());
        Ok(stand.clone())
    }

    async fn find_by_id(&self, stand_id: &StandId) -> LoyaltyResult<Option<Stand>> {
        Ok(self.lock()?.stands.get(stand_id).cloned())
    }

    async fn list(&self) -> LoyaltyResult<Vec<Stand>> {
        let state = self.lock()?;
        Ok(sorted_by_name(state.stands.values().cloned(), |s| (s.name.as_str(), s.stand_id.as_uuid())))
    }

    async fn update(&self, stand_id: &StandId, patch: StandPatch) -> LoyaltyResult<Option<Stand>> {
        let mut state = self.lock()?;
        Ok(state.stands.get_mut(stand_id).map(|stand| {
            stand.apply(patch);
            stand.clone()
        }))
    }

    async fn delete(&self, stand_id: &StandId) -> LoyaltyResult<bool> {
        let mut state = self.lock()?;
        let removed = state.stands.remove(stand_id).is_some();
        if removed {
            for event in state.events.values_mut() {
                if event.stand_id.as_ref() == Some(stand_id) {
                    event.stand_id = None;
                }
            }
        }
        Ok(removed)
    }
}

impl EventRepository for MemoryStore {
    async fn create(&self, event: &Event) -> LoyaltyResult<Event> {
        let mut state = self.lock()?;
        if let Some(stand_id) = &event.stand_id {
            if !state.stands.contains_key(stand_id) {
                return Err(violation("events_stand_id_fkey"));
            }
        }
        if event.points < 0 {
            return Err(violation("events_points_check"));
        }
        state.events.insert(event.event_id, event.clone());
        Ok(event.clone())
    }

    async fn find_by_id(&self, event_id: &EventId) -> LoyaltyResult<Option<Event>> {
        Ok(self.lock()?.events.get(event_id).cloned())
    }

    async fn list(&self) -> LoyaltyResult<Vec<Event>> {
        let state = self.lock()?;
        Ok(sorted_by_name(state.events.values().cloned(), |e| (e.name.as_str(), e.event_id.as_uuid())))
    }

    async fn update(&self, event_id: &EventId, patch: EventPatch) -> LoyaltyResult<Option<Event>> {
        let mut state = self.lock()?;
        if let Some(stand_id) = &patch.stand_id {
            if !state.stands.contains_key(stand_id) {
                return Err(violation("events_stand_id_fkey"));
            }
        }
        Ok(state.events.get_mut(event_id).map(|event| {
            event.apply(patch);
            event.clone()
        }))
    }

    async fn delete(&self, event_id: &EventId) -> LoyaltyResult<bool> {
        Ok(self.lock()?.events.remove(event_id).is_some())
    }
}

impl MerchRepository for MemoryStore {
    async fn create(&self, merch: &Merch) -> LoyaltyResult<Merch> {
        if merch.points_needed < 0 {
            return Err(violation("merch_points_needed_check"));
        }
        self.lock()?.merch.insert(merch.merch_id, merch.clone());
        Ok(merch.clone())
    }

    async fn find_by_id(&self, merch_id: &MerchId) -> LoyaltyResult<Option<Merch>> {
        Ok(self.lock()?.merch.get(merch_id).cloned())
    }

    async fn list(&self) -> LoyaltyResult<Vec<Merch>> {
        let state = self.lock()?;
        Ok(sorted_by_name(state.merch.values().cloned(), |m| (m.name.as_str(), m.merch_id.as_uuid())))
    }

    async fn update(&self, merch_id: &MerchId, patch: MerchPatch) -> LoyaltyResult<Option<Merch>> {
        let mut state = self.lock()?;
        Ok(state.merch.get_mut(merch_id).map(|merch| {
            merch.apply(patch);
            merch.clone()
        }))
    }

    async fn delete(&self, merch_id: &MerchId) -> LoyaltyResult<bool> {
        Ok(self.lock()?.merch.remove(merch_id).is_some())
    }
}

impl PointRepository for MemoryStore {
    async fn upsert(&self, point: &Point) -> LoyaltyResult<Point> {
        let mut state = self.lock()?;
        if !state.clients.contains_key(&point.client_id) {
            return Err(violation("points_user_id_fkey"));
        }
        if point.total_points < 0 {
            return Err(violation("points_total_points_check"));
        }
        state.points.insert(point.client_id, *point);
        Ok(*point)
    }

    async fn find_by_client_id(&self, client_id: &ClientId) -> LoyaltyResult<Option<Point>> {
        Ok(self.lock()?.points.get(client_id).copied())
    }
}

impl AnalyticRepository for MemoryStore {
    async fn create(&self, analytic: &Analytic) -> LoyaltyResult<Analytic> {
        self.lock()?.analytics.push(analytic.clone());
        Ok(analytic.clone())
    }

    async fn grouped(&self) -> LoyaltyResult<Vec<AnalyticBucket>> {
        Ok(AnalyticBucket::group(&self.lock()?.analytics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stand(id: u128, name: &str) -> Stand {
        Stand {
            stand_id: StandId::from_uuid(Uuid::from_u128(id)),
            name: name.to_string(),
            info: String::new(),
            location: String::new(),
            image_url: String::new(),
        }
    }

    #[tokio::test]
    async fn test_list_breaks_name_ties_by_id() {
        let store = MemoryStore::new();
        let stands = [
            stand(3, "Robots"),
            stand(1, "Robots"),
            stand(2, "Quiz"),
            stand(2_000, "Robots"),
        ];
        for stand in stands {
            StandRepository::create(&store, &stand).await.unwrap();
        }

        let listed: Vec<(String, u128)> = StandRepository::list(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|s| (s.name, s.stand_id.as_uuid().as_u128()))
            .collect();

        assert_eq!(
            listed,
            vec![
                ("Quiz".to_string(), 2),
                ("Robots".to_string(), 1),
                ("Robots".to_string(), 3),
                ("Robots".to_string(), 2_000),
            ]
        );
    }
}
