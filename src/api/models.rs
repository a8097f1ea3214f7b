use crate::health::HealthStatus;
use crate::service::ReviewService;
use crate::storage::Review;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub review_service: Arc<ReviewService>,
    pub health: HealthStatus,
}

/// Request for reviews matching a set of context keys
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub context_keys: Vec<String>,
}

/// Reviews served for a request
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub reviews: Vec<Review>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse {
            error: status.to_string(),
            message,
        }))
        .into_response()
    }
}
