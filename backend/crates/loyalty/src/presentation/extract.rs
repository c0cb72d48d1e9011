//! Request extractors whose rejections render like every other error body.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};

use crate::error::LoyaltyError;

/// `axum::Json` with a [`LoyaltyError`] rejection
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(LoyaltyError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with a [`LoyaltyError`] rejection
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(LoyaltyError))]
pub struct ApiPath<T>(pub T);

impl From<JsonRejection> for LoyaltyError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Syntactically valid JSON that does not fit the request shape
            JsonRejection::JsonDataError(e) => LoyaltyError::Validation(e.body_text()),
            other => LoyaltyError::MalformedRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for LoyaltyError {
    fn from(rejection: PathRejection) -> Self {
        LoyaltyError::MalformedRequest(rejection.body_text())
    }
}
