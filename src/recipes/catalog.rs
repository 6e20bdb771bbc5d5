use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use super::model::Recipe;
use super::query::RecipeQuery;
use crate::profile::model::{split_restriction, BoundKind};

/// One page of catalog results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPage {
    pub recipes: Vec<Recipe>,
    pub has_more: bool,
}

/// External source of candidate recipes.
///
/// Implementations must fail the whole lookup rather than return a
/// partially parsed recipe.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    async fn lookup(&self, query: &RecipeQuery) -> anyhow::Result<CatalogPage>;
}

/// In-process catalog over a fixed recipe list.
#[derive(Debug, Clone, Default)]
pub struct LocalCatalog {
    recipes: Vec<Recipe>,
}

impl LocalCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Loads a JSON array of recipes.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read catalog {}", path.display()))?;
        let recipes: Vec<Recipe> = serde_json::from_str(&raw)
            .with_context(|| format!("parse catalog {}", path.display()))?;
        Ok(Self::new(recipes))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }
}

fn satisfies_bounds(recipe: &Recipe, query: &RecipeQuery) -> bool {
    query.bounds.iter().all(|(name, bound)| {
        let Some((kind, nutrient)) = split_restriction(name) else {
            // not a numeric min/max restriction
            return true;
        };
        match (kind, recipe.macros.get(nutrient)) {
            (BoundKind::Min, Some(value)) => value >= bound,
            (BoundKind::Max, Some(value)) => value <= bound,
            (_, None) => false,
        }
    })
}

fn uses_all_ingredients(recipe: &Recipe, query: &RecipeQuery) -> bool {
    query
        .include_ingredients
        .iter()
        .all(|wanted| recipe.ingredient_names().any(|name| name == wanted))
}

#[async_trait]
impl RecipeCatalog for LocalCatalog {
    async fn lookup(&self, query: &RecipeQuery) -> anyhow::Result<CatalogPage> {
        let matches: Vec<&Recipe> = self
            .recipes
            .iter()
            .filter(|r| satisfies_bounds(r, query) && uses_all_ingredients(r, query))
            .collect();
        let recipes: Vec<Recipe> = matches
            .iter()
            .skip(query.offset)
            .take(query.number)
            .map(|r| (*r).clone())
            .collect();
        let has_more = matches.len() > query.offset.saturating_add(query.number);
        debug!(
            matched = matches.len(),
            returned = recipes.len(),
            has_more,
            "local catalog lookup"
        );
        Ok(CatalogPage { recipes, has_more })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::model::DietaryProfile;
    use crate::recipes::model::Ingredient;
    use crate::recipes::query::build_query;

    fn recipe(title: &str, ingredients: &[&str], carbs: f64, calories: f64) -> Recipe {
        let mut r = Recipe::titled(title);
        r.ingredients = ingredients.iter().map(|n| Ingredient::named(*n)).collect();
        r.macros.insert("Carbs".into(), carbs);
        r.macros.insert("Protein".into(), 20.0);
        r.macros.insert("Calories".into(), calories);
        r.macros.insert("SaturatedFat".into(), 3.0);
        r
    }

    fn catalog() -> LocalCatalog {
        LocalCatalog::new(vec![
            recipe("Banana Bread", &["banana", "flour", "eggs"], 60.0, 450.0),
            recipe("Lobster Roll", &["lobster", "bread"], 40.0, 600.0),
            recipe("Sugar Bomb", &["sugar"], 300.0, 1500.0),
        ])
    }

    #[tokio::test]
    async fn filters_by_bounds() {
        let query = build_query(&[], &DietaryProfile::with_defaults());
        let page = catalog().lookup(&query).await.unwrap();
        let titles: Vec<&str> = page.recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Banana Bread", "Lobster Roll"]);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn requires_every_included_ingredient() {
        let mut query = build_query(&[], &DietaryProfile::with_defaults());
        query.include_ingredients = vec!["banana".into(), "lobster".into()];
        let page = catalog().lookup(&query).await.unwrap();
        assert!(page.recipes.is_empty());

        query.include_ingredients = vec!["lobster".into()];
        let page = catalog().lookup(&query).await.unwrap();
        assert_eq!(page.recipes.len(), 1);
        assert_eq!(page.recipes[0].title, "Lobster Roll");
    }

    #[tokio::test]
    async fn missing_macro_fails_its_bound() {
        let catalog = LocalCatalog::new(vec![Recipe::titled("Mystery Stew")]);
        let mut profile = DietaryProfile::new();
        profile.set_restriction("maxCarbs", 100.0);
        let page = catalog.lookup(&build_query(&[], &profile)).await.unwrap();
        assert!(page.recipes.is_empty());

        let page = catalog
            .lookup(&build_query(&[], &DietaryProfile::new()))
            .await
            .unwrap();
        assert_eq!(page.recipes.len(), 1);
    }

    #[tokio::test]
    async fn pages_report_has_more() {
        let query = build_query(&[], &DietaryProfile::new()).with_page(2, 0);
        let page = catalog().lookup(&query).await.unwrap();
        assert_eq!(page.recipes.len(), 2);
        assert!(page.has_more);

        let page = catalog().lookup(&query.with_page(2, 2)).await.unwrap();
        assert_eq!(page.recipes.len(), 1);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn load_reads_json_fixture() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"[{"title":"Cannellini Bean and Asparagus Salad with Mushrooms",
                 "ingredients":[{"name":"asparagus","quantity":1}],
                 "macros":{"Calories":300.0}}]"#,
        )
        .unwrap();
        let catalog = LocalCatalog::load(&path).await.unwrap();
        assert_eq!(catalog.len(), 1);
        std::fs::remove_file(&path).ok();

        assert!(LocalCatalog::load(&path).await.is_err());
    }

    #[tokio::test]
    async fn bundled_fixture_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/catalog.json");
        let catalog = LocalCatalog::load(&path).await.unwrap();
        assert_eq!(catalog.len(), 2);
    }
}
