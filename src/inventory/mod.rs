mod dto;
pub mod handlers;
pub mod model;
pub mod queue;
pub mod scanner;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
