use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{error, instrument};
use uuid::Uuid;

use super::model::User;
use super::repo::SharedUser;
use crate::error::PlannerError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    let users = state.users.get_all_users().await.map_err(internal)?;
    Ok(Json(users))
}

/// Resolves the user a request is scoped to.
pub(crate) async fn load_user(
    state: &AppState,
    user_id: Uuid,
) -> Result<SharedUser, (StatusCode, String)> {
    state
        .users
        .get(user_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| PlannerError::UserNotFound(user_id).into())
}

pub(crate) fn internal(e: anyhow::Error) -> (StatusCode, String) {
    error!(error = %e, "user store failure");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
