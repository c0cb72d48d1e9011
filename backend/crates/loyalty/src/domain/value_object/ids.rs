//! Typed identifiers, one marker per entity so ids cannot be mixed up.

use kernel::id::Id;

pub struct ClientMarker;
pub type ClientId = Id<ClientMarker>;

pub struct StandMarker;
pub type StandId = Id<StandMarker>;

pub struct EventMarker;
pub type EventId = Id<EventMarker>;

pub struct MerchMarker;
pub type MerchId = Id<MerchMarker>;

pub struct AnalyticMarker;
pub type AnalyticId = Id<AnalyticMarker>;
