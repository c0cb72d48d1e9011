//! Event Entity
//!
//! Something a client attends to earn `points`, optionally hosted at a stand.

use crate::domain::value_object::ids::{EventId, StandId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_id: EventId,
    pub name: String,
    pub info: String,
    pub image_url: String,
    /// Reward for attending
    pub points: i32,
    pub stand_id: Option<StandId>,
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub info: String,
    pub image_url: String,
    pub points: i32,
    pub stand_id: Option<StandId>,
}

#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub name: Option<String>,
    pub info: Option<String>,
    pub image_url: Option<String>,
    pub points: Option<i32>,
    pub stand_id: Option<StandId>,
}

impl Event {
    pub fn new(input: NewEvent) -> Self {
        Self {
            event_id: EventId::new(),
            name: input.name,
            info: input.info,
            image_url: input.image_url,
            points: input.points,
            stand_id: input.stand_id,
        }
    }

    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(info) = patch.info {
            self.info = info;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(points) = patch.points {
            self.points = points;
        }
        if let Some(stand_id) = patch.stand_id {
            self.stand_id = Some(stand_id);
        }
    }
}
