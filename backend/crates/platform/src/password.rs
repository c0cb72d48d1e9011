//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard), PHC string output carrying algorithm,
//!   parameters and salt, so verification needs nothing but the stored string
//! - Fresh random salt per call: two hashes of the same password differ
//! - Zeroization of the clear text on drop

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

/// Clear text password, erased from memory when dropped.
///
/// Not `Clone`, and `Debug` is redacted.
///
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse".to_string()).unwrap();
/// let hashed = password.hash().unwrap();
/// assert!(hashed.verify(&password));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Normalizes with NFKC, then validates.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let mut raw = raw;
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with Argon2id default parameters (m=19456 KiB, t=2, p=1).
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// Hashed password in PHC string format, safe to store.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a stored digest as-is. A malformed digest simply never verifies.
    pub fn from_db(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Never fails: a mismatch and an unparsable digest both yield `false`.
    /// The final comparison inside `argon2` is constant-time.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(raw: &str) -> ClearTextPassword {
        ClearTextPassword::new(raw.to_string()).unwrap()
    }

    #[test]
    fn test_password_too_long() {
        let result = ClearTextPassword::new("a".repeat(MAX_PASSWORD_LENGTH + 1));
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_empty_or_whitespace() {
        for raw in ["", "        "] {
            let result = ClearTextPassword::new(raw.to_string());
            assert_eq!(result.unwrap_err(), PasswordPolicyError::EmptyOrWhitespace);
        }
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("abc\u{0007}def".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::InvalidCharacter);
    }

    #[test]
    fn test_unicode_password_is_accepted() {
        assert!(ClearTextPassword::new("пароль-надёжный".to_string()).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let secret = password("TestPassword123!");
        let hashed = secret.hash().unwrap();

        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
        assert!(hashed.verify(&secret));
        assert!(!hashed.verify(&password("WrongPassword123!")));
    }

    #[test]
    fn test_hash_is_salted_per_call() {
        let secret = password("same-input");
        let first = secret.hash().unwrap();
        let second = secret.hash().unwrap();

        assert_ne!(first, second);
        assert!(first.verify(&secret));
        assert!(second.verify(&secret));
    }

    #[test]
    fn test_digest_never_contains_plaintext() {
        let secret = password("visible-plaintext");
        let hashed = secret.hash().unwrap();
        assert!(!hashed.as_phc_string().contains("visible-plaintext"));
    }

    #[test]
    fn test_malformed_digest_verifies_false() {
        let secret = password("anything");
        for digest in ["", "not_a_valid_hash", "$argon2id$v=19$garbage"] {
            assert!(!HashedPassword::from_db(digest).verify(&secret));
        }
    }

    #[test]
    fn test_stored_digest_roundtrip() {
        let secret = password("TestPassword123!");
        let stored = secret.hash().unwrap().as_phc_string().to_string();
        assert!(HashedPassword::from_db(stored).verify(&secret));
    }

    #[test]
    fn test_debug_redaction() {
        let secret = password("secret-value");
        let debug_output = format!("{secret:?}");
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret-value"));

        let hashed = secret.hash().unwrap();
        assert!(!format!("{hashed:?}").contains("argon2"));
    }
}
