use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ShoppingListRequest {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ShoppingListResponse {
    pub items: Vec<String>,
}
