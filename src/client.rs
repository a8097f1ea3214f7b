use crate::api::models::{ReviewRequest, ReviewResponse};
use crate::storage::Review;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Plain HTTP client for the review endpoint
pub struct ReviewClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReviewClient {
    pub fn new(host: &str, port: u16) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            http,
            base_url: format!("http://{}:{}", host, port),
        })
    }

    /// Fetch reviews for a single context key
    pub async fn get_reviews(&self, context_key: &str) -> Result<Vec<Review>, ClientError> {
        info!("Get reviews with context {} ...", context_key);

        let request = ReviewRequest {
            context_keys: vec![context_key.to_string()],
        };

        let response = self
            .http
            .post(format!("{}/reviews", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| e.to_string());
            return Err(ClientError::Status { status, body });
        }

        let body: ReviewResponse = response.json().await?;
        Ok(body.reviews)
    }
}
