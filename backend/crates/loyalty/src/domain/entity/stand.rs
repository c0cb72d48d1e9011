//! Stand Entity

use crate::domain::value_object::ids::StandId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stand {
    pub stand_id: StandId,
    pub name: String,
    pub info: String,
    pub location: String,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct NewStand {
    pub name: String,
    pub info: String,
    pub location: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default)]
pub struct StandPatch {
    pub name: Option<String>,
    pub info: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
}

impl Stand {
    pub fn new(input: NewStand) -> Self {
        Self {
            stand_id: StandId::new(),
            name: input.name,
            info: input.info,
            location: input.location,
            image_url: input.image_url,
        }
    }

    pub fn apply(&mut self, patch: StandPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(info) = patch.info {
            self.info = info;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_each_field_in_isolation() {
        let original = Stand::new(NewStand {
            name: "Robotics".into(),
            info: "Line followers".into(),
            location: "Hall A".into(),
            image_url: "a.png".into(),
        });

        let patches = [
            StandPatch { name: Some("X".into()), ..Default::default() },
            StandPatch { info: Some("X".into()), ..Default::default() },
            StandPatch { location: Some("X".into()), ..Default::default() },
            StandPatch { image_url: Some("X".into()), ..Default::default() },
        ];

        for patch in patches {
            let mut stand = original.clone();
            stand.apply(patch);

            let changed = [
                stand.name != original.name,
                stand.info != original.info,
                stand.location != original.location,
                stand.image_url != original.image_url,
            ];
            assert_eq!(changed.iter().filter(|c| **c).count(), 1);
            assert_eq!(stand.stand_id, original.stand_id);
        }
    }
}
