use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{ExpiringParams, InventoryResponse, RemoveResponse};
use super::model::FoodItem;
use super::scanner::select_expiring_within;
use crate::state::AppState;
use crate::users::handlers::load_user;

// --- public routers ---

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/:id/inventory", get(list_inventory).post(add_item))
        .route("/users/:id/inventory/expiring", get(list_expiring))
        .route("/users/:id/inventory/earliest", delete(remove_earliest))
        .route("/users/:id/inventory/remove", post(remove_specific))
}

// --- handlers ---

/// Items in heap order; only the first is guaranteed to expire earliest.
#[instrument(skip(state))]
pub async fn list_inventory(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<InventoryResponse>, (StatusCode, String)> {
    let user = load_user(&state, user_id).await?;
    let user = user.lock().await;
    let items = user.inventory.snapshot().cloned().collect();
    Ok(Json(InventoryResponse { items }))
}

#[instrument(skip(state))]
pub async fn list_expiring(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(p): Query<ExpiringParams>,
) -> Result<Json<InventoryResponse>, (StatusCode, String)> {
    let days = p.days.unwrap_or(state.config.expiry_window_days);
    let today = OffsetDateTime::now_utc().date();
    let user = load_user(&state, user_id).await?;
    let user = user.lock().await;
    let items = select_expiring_within(&user.inventory, today, days);
    Ok(Json(InventoryResponse { items }))
}

#[instrument(skip(state))]
pub async fn add_item(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(item): Json<FoodItem>,
) -> Result<(StatusCode, Json<FoodItem>), (StatusCode, String)> {
    let user = load_user(&state, user_id).await?;
    let mut user = user.lock().await;
    user.inventory.add_item(item.clone());
    info!(
        %user_id,
        name = item.name(),
        quantity = item.quantity(),
        size = user.inventory.len(),
        next_to_expire = ?user.inventory.peek_earliest().map(FoodItem::name),
        "item added"
    );
    Ok((StatusCode::CREATED, Json(item)))
}

#[instrument(skip(state))]
pub async fn remove_earliest(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<FoodItem>, (StatusCode, String)> {
    let user = load_user(&state, user_id).await?;
    let mut user = user.lock().await;
    let item = user.inventory.remove_earliest()?;
    info!(%user_id, name = item.name(), "earliest item removed");
    Ok(Json(item))
}

#[instrument(skip(state))]
pub async fn remove_specific(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(item): Json<FoodItem>,
) -> Result<Json<RemoveResponse>, (StatusCode, String)> {
    let user = load_user(&state, user_id).await?;
    let mut user = user.lock().await;
    let removed = user.inventory.remove_specific(&item);
    info!(%user_id, name = item.name(), removed, "remove specific item");
    Ok(Json(RemoveResponse { removed }))
}
