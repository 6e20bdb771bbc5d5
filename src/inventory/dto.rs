use serde::{Deserialize, Serialize};

use super::model::FoodItem;

#[derive(Debug, Deserialize)]
pub struct ExpiringParams {
    pub days: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub removed: bool,
}

#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub items: Vec<FoodItem>,
}
