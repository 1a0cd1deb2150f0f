//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flashcard_core::ExportError;
use serde::Serialize;
use thiserror::Error;

use crate::services::ai::ProviderError;
use crate::store::StoreError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("AI provider rate limit or quota exceeded, try again later")]
    RateLimited,

    #[error("Failed to generate AI content")]
    GenerationFailed,

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            StoreError::Unavailable => ApiError::Store(err.to_string()),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        if err.is_rate_limited() {
            ApiError::RateLimited
        } else {
            ApiError::GenerationFailed
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "rate_limited"),
            ApiError::GenerationFailed => (StatusCode::BAD_GATEWAY, "generation_failed"),
            ApiError::Export(_) => (StatusCode::INTERNAL_SERVER_ERROR, "export_error"),
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_error"),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
