//! HTTP handlers for the Relocate Me API

pub mod dashboard;
pub mod directory;
pub mod jobs;
pub mod progress;
pub mod timeline;
pub mod visa;

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "relocate-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}
