//! Presentation Layer
//!
//! HTTP handlers, DTOs, extractors, router, and middleware.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use extract::{ApiJson, ApiPath};
pub use handlers::LoyaltyAppState;
pub use middleware::{AuthenticatedClient, TokenGuardState, require_client_token};
pub use router::{loyalty_router, loyalty_router_generic};
