use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A perishable item owned by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    name: String,
    #[serde(with = "iso_date")]
    expiration: Date,
    quantity: u32,
}

impl FoodItem {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, expiration: Date, quantity: u32) -> Self {
        Self {
            name: name.into(),
            expiration,
            quantity,
        }
    }

    /// Builds an item from calendar components, e.g. `("banana", 2023, 12, 5, 1)`.
    #[cfg(test)]
    pub fn from_ymd(
        name: impl Into<String>,
        year: i32,
        month: u8,
        day: u8,
        quantity: u32,
    ) -> Result<Self, time::error::ComponentRange> {
        let month = time::Month::try_from(month)?;
        let expiration = Date::from_calendar_date(year, month, day)?;
        Ok(Self::new(name, expiration, quantity))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expiration(&self) -> Date {
        self.expiration
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}
