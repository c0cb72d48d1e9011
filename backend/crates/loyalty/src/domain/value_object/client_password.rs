//! Client Password Value Objects
//!
//! Domain wrappers over `platform::password` with user-facing messages.

use std::fmt;

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};

use crate::error::{LoyaltyError, LoyaltyResult};

/// Password as typed by the client. Zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> LoyaltyResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| {
            let message = match e {
                PasswordPolicyError::TooLong { max, .. } => {
                    format!("Password must be at most {max} characters")
                }
                PasswordPolicyError::EmptyOrWhitespace => "Password cannot be empty".to_string(),
                PasswordPolicyError::InvalidCharacter => {
                    "Password contains invalid characters".to_string()
                }
            };
            LoyaltyError::Validation(message)
        })?;

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Argon2id digest as stored in `clients.password_hash`
#[derive(Clone, PartialEq, Eq)]
pub struct ClientPassword(HashedPassword);

impl ClientPassword {
    /// CPU-heavy; callers on the async runtime go through `spawn_blocking`.
    pub fn from_raw(raw: &RawPassword) -> LoyaltyResult<Self> {
        let hashed = raw.inner().hash().map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                LoyaltyError::Internal(format!("Password hashing failed: {msg}"))
            }
        })?;

        Ok(Self(hashed))
    }

    pub fn from_db(phc_string: impl Into<String>) -> Self {
        Self(HashedPassword::from_db(phc_string))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// `false` on mismatch and on a corrupt digest alike.
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for ClientPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
