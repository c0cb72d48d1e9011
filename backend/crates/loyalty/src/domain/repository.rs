//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer; each call is its own transaction.

use crate::domain::entity::{
    analytic::{Analytic, AnalyticBucket},
    client::{Client, ClientPatch},
    event::{Event, EventPatch},
    merch::{Merch, MerchPatch},
    point::Point,
    stand::{Stand, StandPatch},
};
use crate::domain::value_object::{
    email::Email,
    ids::{ClientId, EventId, MerchId, StandId},
};
use crate::error::LoyaltyResult;

#[trait_variant::make(ClientRepository: Send)]
pub trait LocalClientRepository {
    /// Insert and return the stored row. A taken email is a
    /// `ConstraintViolation`.
    async fn create(&self, client: &Client) -> LoyaltyResult<Client>;

    async fn find_by_id(&self, client_id: &ClientId) -> LoyaltyResult<Option<Client>>;

    async fn find_by_email(&self, email: &Email) -> LoyaltyResult<Option<Client>>;

    /// Apply `patch` to the current row; `None` when the id does not exist.
    async fn update(&self, client_id: &ClientId, patch: ClientPatch)
    -> LoyaltyResult<Option<Client>>;

    /// `true` only if a row was removed.
    async fn delete(&self, client_id: &ClientId) -> LoyaltyResult<bool>;
}

#[trait_variant::make(StandRepository: Send)]
pub trait LocalStandRepository {
    async fn create(&self, stand: &Stand) -> LoyaltyResult<Stand>;

    async fn find_by_id(&self, stand_id: &StandId) -> LoyaltyResult<Option<Stand>>;

    async fn list(&self) -> LoyaltyResult<Vec<Stand>>;

    async fn update(&self, stand_id: &StandId, patch: StandPatch) -> LoyaltyResult<Option<Stand>>;

    async fn delete(&self, stand_id: &StandId) -> LoyaltyResult<bool>;
}

#[trait_variant::make(EventRepository: Send)]
pub trait LocalEventRepository {
    /// An unknown `stand_id` is a `ConstraintViolation`.
    async fn create(&self, event: &Event) -> LoyaltyResult<Event>;

    async fn find_by_id(&self, event_id: &EventId) -> LoyaltyResult<Option<Event>>;

    async fn list(&self) -> LoyaltyResult<Vec<Event>>;

    async fn update(&self, event_id: &EventId, patch: EventPatch) -> LoyaltyResult<Option<Event>>;

    async fn delete(&self, event_id: &EventId) -> LoyaltyResult<bool>;
}

#[trait_variant::make(MerchRepository: Send)]
pub trait LocalMerchRepository {
    async fn create(&self, merch: &Merch) -> LoyaltyResult<Merch>;

    async fn find_by_id(&self, merch_id: &MerchId) -> LoyaltyResult<Option<Merch>>;

    async fn list(&self) -> LoyaltyResult<Vec<Merch>>;

    async fn update(&self, merch_id: &MerchId, patch: MerchPatch) -> LoyaltyResult<Option<Merch>>;

    async fn delete(&self, merch_id: &MerchId) -> LoyaltyResult<bool>;
}

#[trait_variant::make(PointRepository: Send)]
pub trait LocalPointRepository {
    /// Insert the first balance for a client or overwrite the existing one.
    async fn upsert(&self, point: &Point) -> LoyaltyResult<Point>;

    async fn find_by_client_id(&self, client_id: &ClientId) -> LoyaltyResult<Option<Point>>;
}

#[trait_variant::make(AnalyticRepository: Send)]
pub trait LocalAnalyticRepository {
    async fn create(&self, analytic: &Analytic) -> LoyaltyResult<Analytic>;

    /// Visit counts per UTC date and hour, ordered by date then hour.
    async fn grouped(&self) -> LoyaltyResult<Vec<AnalyticBucket>>;
}

/// Everything the HTTP layer needs from one storage backend.
pub trait LoyaltyStore:
    ClientRepository
    + StandRepository
    + EventRepository
    + MerchRepository
    + PointRepository
    + AnalyticRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> LoyaltyStore for T where
    T: ClientRepository
        + StandRepository
        + EventRepository
        + MerchRepository
        + PointRepository
        + AnalyticRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
