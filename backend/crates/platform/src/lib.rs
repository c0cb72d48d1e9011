//! Platform Crate - Technical Infrastructure
//!
//! Leaf building blocks with no knowledge of the loyalty domain:
//! - Password hashing (Argon2id)
//! - Signed, time-bound identity tokens (HS256 JWT)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod password;
pub mod token;
