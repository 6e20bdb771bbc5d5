use time::{Date, Duration};

use super::model::FoodItem;
use super::queue::Inventory;

/// Items expiring in `[reference, reference + window_days]`, in snapshot order.
///
/// Already-expired items are left out.
pub fn select_expiring_within(
    inventory: &Inventory,
    reference: Date,
    window_days: u32,
) -> Vec<FoodItem> {
    // saturate instead of overflowing past Date::MAX
    let end = reference
        .checked_add(Duration::days(i64::from(window_days)))
        .unwrap_or(Date::MAX);
    inventory
        .snapshot()
        .filter(|item| (reference..=end).contains(&item.expiration()))
        .cloned()
        .collect()
}
