//! Loyalty Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Client sign-up/sign-in issuing HS256 bearer tokens
//! - Client profile read/update/delete, restricted to the token's own subject
//! - CRUD for stands, events and merch
//! - Points balance per client (overwrite-on-upsert)
//! - Append-only visit analytics with a per-date, per-hour report
//!
//! ## Consistency Model
//! - Every repository call runs in its own transaction
//! - Storage constraints (unique email, foreign keys, non-negative points)
//!   surface as `LoyaltyError::ConstraintViolation`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::LoyaltyConfig;
pub use domain::repository::LoyaltyStore;
pub use error::{LoyaltyError, LoyaltyResult};
pub use infra::postgres::PgLoyaltyRepository;
pub use presentation::router::{loyalty_router, loyalty_router_generic};

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
