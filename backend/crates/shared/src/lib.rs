//! Shared Kernel
//!
//! The small core every bounded context agrees on:
//! - Unified error type ([`error::app_error::AppError`]) and its classification
//! - Typed identifiers ([`id::Id`])
//!
//! The axum response glue is feature-gated so domain crates can depend on
//! the kernel without pulling a web stack.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
