use crate::api::models::*;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};

pub async fn get_reviews_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<ReviewResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected review request");
        AppError::from(rejection)
    })?;

    let reviews = state.review_service.get_reviews(&request.context_keys);

    info!(served = reviews.len(), "Reviews served");

    Ok(Json(ReviewResponse { reviews }))
}
