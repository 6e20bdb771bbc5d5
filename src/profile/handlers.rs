use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::SetRestrictionRequest;
use super::model::DietaryProfile;
use crate::state::AppState;
use crate::users::handlers::load_user;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/:id/restrictions", get(get_restrictions))
        .route(
            "/users/:id/restrictions/:name",
            put(set_restriction).delete(remove_restriction),
        )
}

#[instrument(skip(state))]
pub async fn get_restrictions(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<DietaryProfile>, (StatusCode, String)> {
    let user = load_user(&state, user_id).await?;
    let profile = user.lock().await.profile.clone();
    Ok(Json(profile))
}

/// Applies the bound only if the resulting profile keeps every min/max pair ordered.
#[instrument(skip(state))]
pub async fn set_restriction(
    State(state): State<AppState>,
    Path((user_id, name)): Path<(Uuid, String)>,
    Json(body): Json<SetRestrictionRequest>,
) -> Result<Json<DietaryProfile>, (StatusCode, String)> {
    let user = load_user(&state, user_id).await?;
    let mut user = user.lock().await;

    let mut updated = user.profile.clone();
    updated.set_restriction(name.clone(), body.value);
    if let Err(e) = updated.validate() {
        warn!(%user_id, %name, error = %e, "restriction rejected");
        return Err(e.into());
    }
    user.profile = updated;
    info!(%user_id, %name, value = body.value, "restriction set");
    Ok(Json(user.profile.clone()))
}

#[instrument(skip(state))]
pub async fn remove_restriction(
    State(state): State<AppState>,
    Path((user_id, name)): Path<(Uuid, String)>,
) -> Result<Json<DietaryProfile>, (StatusCode, String)> {
    let user = load_user(&state, user_id).await?;
    let mut user = user.lock().await;
    if user.profile.remove_restriction(&name).is_none() {
        return Err((StatusCode::NOT_FOUND, format!("restriction {name} not set")));
    }
    info!(%user_id, %name, "restriction removed");
    Ok(Json(user.profile.clone()))
}
