//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::{
    analytic::{Analytic, AnalyticBucket},
    client::Client,
    event::Event,
    merch::Merch,
    point::Point,
    stand::Stand,
};
pub use repository::{
    AnalyticRepository, ClientRepository, EventRepository, LoyaltyStore, MerchRepository,
    PointRepository, StandRepository,
};
