pub mod models;
pub mod review;

// Re-exports
pub use models::*;

use crate::health::ServingStatus;
use axum::{extract::State, http::StatusCode, Json};

pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<models::HealthResponse>) {
    let status = state.health.status();
    let code = match status {
        ServingStatus::Serving => StatusCode::OK,
        ServingStatus::NotServing => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        code,
        Json(models::HealthResponse {
            status: status.as_str().to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
