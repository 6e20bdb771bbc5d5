use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

/// Failures produced by the planning core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlannerError {
    #[error("inventory is empty")]
    EmptyInventory,

    #[error("no available recipes")]
    NoMatchingRecipe,

    #[error("recipe catalog error: {0}")]
    Catalog(String),

    #[error("invalid dietary profile: min{nutrient} ({min}) is greater than max{nutrient} ({max})")]
    InvalidProfile { nutrient: String, min: f64, max: f64 },

    #[error("user {0} not found")]
    UserNotFound(Uuid),
}

impl PlannerError {
    /// Total over every variant. Recipe search never takes this path: its
    /// `NoMatchingRecipe` and `Catalog` failures travel in a 200 outcome body.
    pub fn status(&self) -> StatusCode {
        match self {
            PlannerError::EmptyInventory
            | PlannerError::NoMatchingRecipe
            | PlannerError::UserNotFound(_) => StatusCode::NOT_FOUND,
            PlannerError::Catalog(_) => StatusCode::BAD_GATEWAY,
            PlannerError::InvalidProfile { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<PlannerError> for (StatusCode, String) {
    fn from(e: PlannerError) -> Self {
        (e.status(), e.to_string())
    }
}
