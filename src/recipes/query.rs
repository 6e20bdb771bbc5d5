use std::collections::BTreeMap;

use serde::Serialize;

use crate::inventory::model::FoodItem;
use crate::profile::model::DietaryProfile;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Search request handed to a recipe catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeQuery {
    pub include_ingredients: Vec<String>,
    /// Nutrient bounds keyed by restriction name (`minCarbs`, `maxCalories`, ...).
    pub bounds: BTreeMap<String, f64>,
    pub number: usize,
    pub offset: usize,
}

impl RecipeQuery {
    pub fn with_page(mut self, number: usize, offset: usize) -> Self {
        self.number = number;
        self.offset = offset;
        self
    }
}

/// Turns expiring items and dietary bounds into a catalog query.
///
/// With nothing expiring the query still carries every bound.
pub fn build_query(expiring: &[FoodItem], profile: &DietaryProfile) -> RecipeQuery {
    let mut include_ingredients: Vec<String> = Vec::with_capacity(expiring.len());
    for item in expiring {
        if !include_ingredients.iter().any(|n| n == item.name()) {
            include_ingredients.push(item.name().to_string());
        }
    }
    let bounds = profile
        .iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    RecipeQuery {
        include_ingredients,
        bounds,
        number: DEFAULT_PAGE_SIZE,
        offset: 0,
    }
}
