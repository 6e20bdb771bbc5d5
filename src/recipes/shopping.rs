use serde::Serialize;

use super::model::Recipe;
use crate::inventory::queue::Inventory;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListEntry {
    pub name: String,
    pub quantity: Option<u32>,
}

/// Ingredient names with no same-named item in `inventory`, in recipe order.
///
/// Presence only: any quantity on hand satisfies the ingredient.
pub fn build_shopping_list<S: AsRef<str>>(ingredients: &[S], inventory: &Inventory) -> Vec<String> {
    ingredients
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|name| !inventory.contains_name(name))
        .map(str::to_string)
        .collect()
}

pub fn shopping_list_for_recipe(recipe: &Recipe, inventory: &Inventory) -> Vec<ShoppingListEntry> {
    recipe
        .ingredients
        .iter()
        .filter(|ingredient| !inventory.contains_name(&ingredient.name))
        .map(|ingredient| ShoppingListEntry {
            name: ingredient.name.clone(),
            quantity: ingredient.quantity,
        })
        .collect()
}
