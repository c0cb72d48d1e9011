//! Application Layer
//!
//! Use cases composing repository calls with hashing, tokens and validation.

pub mod analytic;
pub mod check_token;
pub mod client_profile;
pub mod config;
pub mod event;
pub mod merch;
pub mod point;
pub mod sign_in;
pub mod sign_up;
pub mod stand;

pub use analytic::AnalyticUseCase;
pub use check_token::CheckTokenUseCase;
pub use client_profile::ClientProfileUseCase;
pub use config::LoyaltyConfig;
pub use event::EventUseCase;
pub use merch::MerchUseCase;
pub use point::PointUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use stand::StandUseCase;
