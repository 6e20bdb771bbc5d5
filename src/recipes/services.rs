use serde::Serialize;
use time::Date;
use tracing::{debug, info, warn};

use super::catalog::RecipeCatalog;
use super::model::Recipe;
use super::query::{build_query, DEFAULT_PAGE_SIZE};
use crate::config::DEFAULT_EXPIRY_WINDOW_DAYS;
use crate::error::PlannerError;
use crate::inventory::scanner::select_expiring_within;
use crate::users::model::User;

/// Result of a recipe search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecipeOutcome {
    Success { recipes: Vec<Recipe>, has_more: bool },
    Failure { message: String },
}

impl RecipeOutcome {
    fn failure(err: PlannerError) -> Self {
        RecipeOutcome::Failure {
            message: err.to_string(),
        }
    }
}

/// Finds recipes that use up a user's soon-to-expire food within their dietary bounds.
///
/// Reads the user; never mutates inventory or profile.
pub struct RecipeSelector<'a> {
    user: &'a User,
    catalog: &'a dyn RecipeCatalog,
    today: Date,
    window_days: u32,
    page_size: usize,
}

impl<'a> RecipeSelector<'a> {
    pub fn new(user: &'a User, catalog: &'a dyn RecipeCatalog, today: Date) -> Self {
        Self {
            user,
            catalog,
            today,
            window_days: DEFAULT_EXPIRY_WINDOW_DAYS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    pub async fn execute(&self) -> RecipeOutcome {
        let user_id = self.user.id;
        if let Err(e) = self.user.profile.validate() {
            warn!(%user_id, error = %e, "refusing recipe search");
            return RecipeOutcome::failure(e);
        }

        let expiring = select_expiring_within(&self.user.inventory, self.today, self.window_days);
        let query = build_query(&expiring, &self.user.profile).with_page(self.page_size, 0);
        debug!(
            %user_id,
            expiring = expiring.len(),
            bounds = query.bounds.len(),
            "recipe query built"
        );

        let page = match self.catalog.lookup(&query).await {
            Ok(page) => page,
            Err(e) => {
                let reason = format!("{e:#}");
                warn!(%user_id, error = %reason, "recipe catalog lookup failed");
                return RecipeOutcome::failure(PlannerError::Catalog(reason));
            }
        };

        if page.recipes.is_empty() {
            info!(%user_id, "no recipe matched");
            return RecipeOutcome::failure(PlannerError::NoMatchingRecipe);
        }
        info!(%user_id, count = page.recipes.len(), has_more = page.has_more, "recipes found");
        RecipeOutcome::Success {
            recipes: page.recipes,
            has_more: page.has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::model::FoodItem;
    use crate::profile::model::DietaryProfile;
    use crate::recipes::catalog::{CatalogPage, LocalCatalog};
    use crate::recipes::query::RecipeQuery;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use time::macros::date;

    /// Returns a canned page and remembers the queries it saw.
    struct ScriptedCatalog {
        page: Option<CatalogPage>,
        seen: Mutex<Vec<RecipeQuery>>,
    }

    impl ScriptedCatalog {
        fn returning(recipes: Vec<Recipe>, has_more: bool) -> Self {
            Self {
                page: Some(CatalogPage { recipes, has_more }),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                page: None,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RecipeCatalog for ScriptedCatalog {
        async fn lookup(&self, query: &RecipeQuery) -> anyhow::Result<CatalogPage> {
            self.seen.lock().unwrap().push(query.clone());
            match &self.page {
                Some(page) => Ok(page.clone()),
                None => Err(anyhow::anyhow!("connection reset").context("GET /recipes/complexSearch")),
            }
        }
    }

    fn default_user() -> User {
        User::new(DietaryProfile::with_defaults())
    }

    #[tokio::test]
    async fn banana_and_lobster_find_nothing() {
        let mut user = default_user();
        user.inventory.add_item(FoodItem::from_ymd("banana", 2023, 12, 5, 1).unwrap());
        user.inventory.add_item(FoodItem::from_ymd("lobster", 2023, 12, 5, 1).unwrap());
        let catalog = ScriptedCatalog::returning(Vec::new(), false);

        let outcome = RecipeSelector::new(&user, &catalog, date!(2023 - 12 - 01))
            .execute()
            .await;

        assert_eq!(
            outcome,
            RecipeOutcome::Failure {
                message: "no available recipes".into()
            }
        );
        let seen = catalog.seen.lock().unwrap();
        assert_eq!(seen[0].include_ingredients, vec!["banana", "lobster"]);
    }

    #[tokio::test]
    async fn empty_inventory_returns_the_single_recipe() {
        let user = default_user();
        let salad = Recipe::titled("Cannellini Bean and Asparagus Salad with Mushrooms");
        let catalog = ScriptedCatalog::returning(vec![salad.clone()], false);

        let outcome = RecipeSelector::new(&user, &catalog, date!(2023 - 12 - 01))
            .execute()
            .await;

        assert_eq!(
            outcome,
            RecipeOutcome::Success {
                recipes: vec![salad],
                has_more: false
            }
        );
        let seen = catalog.seen.lock().unwrap();
        assert!(seen[0].include_ingredients.is_empty());
        assert_eq!(seen[0].bounds.len(), 8);
    }

    #[tokio::test]
    async fn has_more_flag_is_passed_through() {
        let user = default_user();
        let catalog = ScriptedCatalog::returning(vec![Recipe::titled("Soup")], true);
        let outcome = RecipeSelector::new(&user, &catalog, date!(2023 - 12 - 01))
            .page_size(1)
            .execute()
            .await;
        assert!(matches!(outcome, RecipeOutcome::Success { has_more: true, .. }));
        assert_eq!(catalog.seen.lock().unwrap()[0].number, 1);
    }

    #[tokio::test]
    async fn only_items_inside_the_window_are_queried() {
        let mut user = default_user();
        user.inventory.add_item(FoodItem::from_ymd("old milk", 2023, 11, 20, 1).unwrap());
        user.inventory.add_item(FoodItem::from_ymd("spinach", 2023, 12, 3, 1).unwrap());
        user.inventory.add_item(FoodItem::from_ymd("rice", 2024, 6, 1, 1).unwrap());
        let catalog = ScriptedCatalog::returning(Vec::new(), false);

        RecipeSelector::new(&user, &catalog, date!(2023 - 12 - 01))
            .window_days(3)
            .execute()
            .await;

        assert_eq!(catalog.seen.lock().unwrap()[0].include_ingredients, vec!["spinach"]);
        assert_eq!(user.inventory.len(), 3);
    }

    #[tokio::test]
    async fn catalog_error_becomes_failure_without_retry() {
        let user = default_user();
        let catalog = ScriptedCatalog::failing();
        let outcome = RecipeSelector::new(&user, &catalog, date!(2023 - 12 - 01))
            .execute()
            .await;

        match outcome {
            RecipeOutcome::Failure { message } => {
                assert!(message.contains("connection reset"), "{message}");
                assert!(message.contains("complexSearch"), "{message}");
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(catalog.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn inverted_bounds_skip_the_catalog() {
        let mut user = default_user();
        user.profile.set_restriction("minCalories", 900.0);
        let catalog = ScriptedCatalog::returning(vec![Recipe::titled("Soup")], false);
        let outcome = RecipeSelector::new(&user, &catalog, date!(2023 - 12 - 01))
            .execute()
            .await;
        assert!(matches!(outcome, RecipeOutcome::Failure { .. }));
        assert!(catalog.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn works_against_local_catalog() {
        let user = default_user();
        let mut salad = Recipe::titled("Cannellini Bean and Asparagus Salad with Mushrooms");
        for (k, v) in [("Carbs", 30.0), ("Protein", 15.0), ("Calories", 320.0), ("SaturatedFat", 2.0)] {
            salad.macros.insert(k.into(), v);
        }
        let catalog = LocalCatalog::new(vec![salad]);
        let outcome = RecipeSelector::new(&user, &catalog, date!(2023 - 12 - 01))
            .execute()
            .await;
        assert!(matches!(outcome, RecipeOutcome::Success { ref recipes, .. } if recipes.len() == 1));
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(RecipeOutcome::failure(PlannerError::NoMatchingRecipe)).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["message"], "no available recipes");
    }
}
