pub mod catalog;
mod dto;
pub mod handlers;
pub mod model;
pub mod query;
pub mod services;
pub mod shopping;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
