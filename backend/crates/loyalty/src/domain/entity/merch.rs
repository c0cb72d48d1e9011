//! Merch Entity

use crate::domain::value_object::ids::MerchId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merch {
    pub merch_id: MerchId,
    pub name: String,
    pub info: String,
    pub image_url: String,
    /// Price in points
    pub points_needed: i32,
}

#[derive(Debug, Clone)]
pub struct NewMerch {
    pub name: String,
    pub info: String,
    pub image_url: String,
    pub points_needed: i32,
}

#[derive(Debug, Clone, Default)]
pub struct MerchPatch {
    pub name: Option<String>,
    pub info: Option<String>,
    pub image_url: Option<String>,
    pub points_needed: Option<i32>,
}

impl Merch {
    pub fn new(input: NewMerch) -> Self {
        Self {
            merch_id: MerchId::new(),
            name: input.name,
            info: input.info,
            image_url: input.image_url,
            points_needed: input.points_needed,
        }
    }

    pub fn apply(&mut self, patch: MerchPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(info) = patch.info {
            self.info = info;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(points_needed) = patch.points_needed {
            self.points_needed = points_needed;
        }
    }
}
