use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

const MIN_PREFIX: &str = "min";
const MAX_PREFIX: &str = "max";

/// Bounds seeded for a first-run user.
pub const DEFAULT_RESTRICTIONS: [(&str, f64); 8] = [
    ("minCarbs", 10.0),
    ("maxCarbs", 100.0),
    ("minProtein", 10.0),
    ("maxProtein", 100.0),
    ("minCalories", 50.0),
    ("maxCalories", 800.0),
    ("minSaturatedFat", 0.0),
    ("maxSaturatedFat", 100.0),
];

/// Named nutritional bounds, e.g. `minCarbs -> 10`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DietaryProfile {
    restrictions: BTreeMap<String, f64>,
}

/// Direction of a bound, parsed from the restriction name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Min,
    Max,
}

impl DietaryProfile {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        DEFAULT_RESTRICTIONS
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    pub fn set_restriction(&mut self, name: impl Into<String>, value: f64) {
        self.restrictions.insert(name.into(), value);
    }

    pub fn remove_restriction(&mut self, name: &str) -> Option<f64> {
        self.restrictions.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.restrictions.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.restrictions.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Checks every `min*`/`max*` pair present; unpaired bounds always pass.
    pub fn validate(&self) -> Result<(), PlannerError> {
        for (name, min) in self.iter() {
            let Some((BoundKind::Min, nutrient)) = split_restriction(name) else {
                continue;
            };
            let Some(max) = self.get(&format!("{MAX_PREFIX}{nutrient}")) else {
                continue;
            };
            if min > max {
                return Err(PlannerError::InvalidProfile {
                    nutrient: nutrient.to_string(),
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, f64)> for DietaryProfile {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            restrictions: iter.into_iter().collect(),
        }
    }
}

/// Splits `minCarbs` into `(Min, "Carbs")`. Names without a bound prefix yield `None`.
pub fn split_restriction(name: &str) -> Option<(BoundKind, &str)> {
    if let Some(nutrient) = name.strip_prefix(MIN_PREFIX) {
        (!nutrient.is_empty()).then_some((BoundKind::Min, nutrient))
    } else if let Some(nutrient) = name.strip_prefix(MAX_PREFIX) {
        (!nutrient.is_empty()).then_some((BoundKind::Max, nutrient))
    } else {
        None
    }
}
