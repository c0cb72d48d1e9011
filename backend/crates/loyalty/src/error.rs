//! Loyalty Error Types
//!
//! Context-specific failures, rendered through the unified
//! `kernel::error::AppError` body at the HTTP edge.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

pub type LoyaltyResult<T> = Result<T, LoyaltyError>;

#[derive(Debug, Error)]
pub enum LoyaltyError {
    /// Body or path could not be decoded into the expected shape
    #[error("{0}")]
    MalformedRequest(String),

    /// Well-formed request whose field values are not acceptable
    #[error("{0}")]
    Validation(String),

    /// Write rejected by a storage rule (unique, foreign key, check)
    #[error("Request violates a data constraint")]
    ConstraintViolation { constraint: Option<String> },

    #[error("{0} already exists")]
    AlreadyExists(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    /// Unknown email and wrong password share this variant
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing bearer token")]
    MissingToken,

    /// Carries the rejection reason for the log only
    #[error("Invalid or expired token")]
    InvalidToken(String),

    #[error("Token does not grant access to this resource")]
    Forbidden,

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LoyaltyError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LoyaltyError::MalformedRequest(_)
            | LoyaltyError::ConstraintViolation { .. }
            | LoyaltyError::AlreadyExists(_) => ErrorKind::BadRequest,
            LoyaltyError::Validation(_) => ErrorKind::UnprocessableEntity,
            LoyaltyError::NotFound(_) => ErrorKind::NotFound,
            LoyaltyError::InvalidCredentials
            | LoyaltyError::MissingToken
            | LoyaltyError::InvalidToken(_) => ErrorKind::Unauthorized,
            LoyaltyError::Forbidden => ErrorKind::Forbidden,
            LoyaltyError::Database(_) | LoyaltyError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Client-facing form. Server-side detail stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            AppError::internal("Internal server error")
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    fn log(&self) {
        match self {
            LoyaltyError::Database(e) => {
                tracing::error!(error = %e, "Loyalty database error");
            }
            LoyaltyError::Internal(msg) => {
                tracing::error!(message = %msg, "Loyalty internal error");
            }
            LoyaltyError::InvalidCredentials => {
                tracing::warn!("Invalid sign-in attempt");
            }
            LoyaltyError::InvalidToken(reason) => {
                tracing::warn!(reason = %reason, "Rejected bearer token");
            }
            LoyaltyError::Forbidden => {
                tracing::warn!("Token subject does not own the requested client");
            }
            LoyaltyError::ConstraintViolation { constraint } => {
                tracing::debug!(constraint = ?constraint, "Constraint violation");
            }
            _ => {
                tracing::debug!(error = %self, "Loyalty error");
            }
        }
    }
}

impl IntoResponse for LoyaltyError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Integrity violations become `ConstraintViolation`; anything else is a
/// plain database failure.
impl From<sqlx::Error> for LoyaltyError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            use sqlx::error::ErrorKind as DbErrorKind;
            match db_err.kind() {
                DbErrorKind::UniqueViolation
                | DbErrorKind::ForeignKeyViolation
                | DbErrorKind::NotNullViolation
                | DbErrorKind::CheckViolation => {
                    return LoyaltyError::ConstraintViolation {
                        constraint: db_err.constraint().map(str::to_owned),
                    };
                }
                _ => {}
            }
        }
        LoyaltyError::Database(err)
    }
}

impl From<TokenError> for LoyaltyError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(e) => LoyaltyError::Internal(format!("token signing: {e}")),
            other => LoyaltyError::InvalidToken(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for LoyaltyError {
    fn from(err: tokio::task::JoinError) -> Self {
        LoyaltyError::Internal(format!("blocking task failed: {err}"))
    }
}
