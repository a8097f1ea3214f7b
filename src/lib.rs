pub mod api;
pub mod client;
pub mod config;
pub mod health;
pub mod service;
pub mod storage;
pub mod telemetry;

use crate::api::{health_handler, AppState};
use crate::config::AppConfig;
use crate::health::HealthStatus;
use crate::service::ReviewService;
use crate::storage::ReviewIndex;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the shared state over the compiled-in review index
pub fn build_state(config: &AppConfig) -> AppState {
    let index = Arc::new(ReviewIndex::builtin());
    AppState {
        review_service: Arc::new(ReviewService::new(
            index,
            config.reviews.max_reviews_to_serve,
        )),
        health: HealthStatus::new(),
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::review::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
