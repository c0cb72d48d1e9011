//! Point Entity
//!
//! Current balance of one client. A snapshot, not a ledger: an upsert
//! replaces `total_points` and keeps no history.

use crate::domain::value_object::ids::ClientId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub client_id: ClientId,
    pub total_points: i32,
}

impl Point {
    pub fn new(client_id: ClientId, total_points: i32) -> Self {
        Self {
            client_id,
            total_points,
        }
    }
}
