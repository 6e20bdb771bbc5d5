use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::inventory::queue::Inventory;
use crate::profile::model::DietaryProfile;

/// A household member: their food inventory and their dietary bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub profile: DietaryProfile,
    pub inventory: Inventory,
}

impl User {
    pub fn new(profile: DietaryProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            profile,
            inventory: Inventory::new(),
        }
    }
}
