use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::dto::{ShoppingListRequest, ShoppingListResponse};
use super::services::{RecipeOutcome, RecipeSelector};
use super::model::Recipe;
use super::shopping::{build_shopping_list, shopping_list_for_recipe, ShoppingListEntry};
use crate::state::AppState;
use crate::users::handlers::load_user;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/:id/recipes", get(find_recipes))
        .route("/users/:id/shopping-list", post(shopping_list))
        .route("/users/:id/shopping-list/recipe", post(recipe_shopping_list))
}

/// Always 200: "no available recipes" is a normal outcome, reported in the body.
#[instrument(skip(state))]
pub async fn find_recipes(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<RecipeOutcome>, (StatusCode, String)> {
    let user = load_user(&state, user_id).await?;
    // held across the catalog call so the user's requests stay serialized
    let user = user.lock().await;
    let outcome = RecipeSelector::new(&user, state.catalog.as_ref(), OffsetDateTime::now_utc().date())
        .window_days(state.config.expiry_window_days)
        .page_size(state.config.catalog.page_size)
        .execute()
        .await;
    Ok(Json(outcome))
}

#[instrument(skip(state))]
pub async fn shopping_list(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<ShoppingListRequest>,
) -> Result<Json<ShoppingListResponse>, (StatusCode, String)> {
    let user = load_user(&state, user_id).await?;
    let user = user.lock().await;
    let items = build_shopping_list(&body.ingredients, &user.inventory);
    debug!(%user_id, needed = items.len(), "shopping list built");
    Ok(Json(ShoppingListResponse { items }))
}

/// Same diff as `shopping_list`, but keeps the recipe's nominal quantities.
#[instrument(skip(state, recipe))]
pub async fn recipe_shopping_list(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(recipe): Json<Recipe>,
) -> Result<Json<Vec<ShoppingListEntry>>, (StatusCode, String)> {
    let user = load_user(&state, user_id).await?;
    let user = user.lock().await;
    Ok(Json(shopping_list_for_recipe(&recipe, &user.inventory)))
}
