//! Value Object Module

pub mod client_password;
pub mod email;
pub mod ids;
