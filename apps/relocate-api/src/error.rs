//! Error types for the Relocate Me API

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Timeline step not found: {0}")]
    StepNotFound(String),

    #[error("Progress item not found: {0}")]
    ItemNotFound(String),

    #[error("Visa type not found: {0}")]
    VisaNotFound(String),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("No comparison for route: {0}")]
    ComparisonNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::StepNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Timeline step not found: {}", id),
            ),
            ApiError::ItemNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Progress item not found: {}", id),
            ),
            ApiError::VisaNotFound(slug) => (
                StatusCode::NOT_FOUND,
                format!("Visa type not found: {}", slug),
            ),
            ApiError::LocationNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Location not found: {}", id),
            ),
            ApiError::ComparisonNotFound(route) => (
                StatusCode::NOT_FOUND,
                format!("No comparison for route: {}", route),
            ),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
