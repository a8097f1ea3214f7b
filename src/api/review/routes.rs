use crate::api::models::AppState;
use crate::api::review::handlers::get_reviews_handler;
use axum::{routing::post, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", post(get_reviews_handler))
}
