use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Recipe ingredient. Catalog quantities are nominal and may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl Ingredient {
    #[cfg(test)]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Macro values keyed by nutrient, e.g. `Carbs`, `Protein`, `Calories`, `SaturatedFat`.
    #[serde(default)]
    pub macros: BTreeMap<String, f64>,
}

impl Recipe {
    #[cfg(test)]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            instructions: Vec::new(),
            ingredients: Vec::new(),
            macros: BTreeMap::new(),
        }
    }

    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.ingredients.iter().map(|i| i.name.as_str())
    }
}
