//! Entity Module

pub mod analytic;
pub mod client;
pub mod event;
pub mod merch;
pub mod point;
pub mod stand;
