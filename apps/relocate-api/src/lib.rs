//! Relocate Me API
//!
//! REST backend for the relocation tracker. Provides endpoints for:
//!
//! - The relocation timeline and step completion
//! - Progress items with status, notes, priority and subtasks
//! - Visa requirements and the merged document checklist
//! - The job board and sector outlook
//! - Location profiles, housing markets and the Phoenix to Peak District
//!   comparison
//! - Resource links and logistics providers
//!
//! Reference data is compiled in (see [`catalog`]); user progress lives in
//! SQLite (see [`db`]).

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod state;

use std::future::Future;
use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use handlers::{dashboard, directory, jobs, progress, timeline, visa};
pub use state::AppState;

/// Build the full router over shared state
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/dashboard/overview", get(dashboard::overview))
        .route("/timeline/full", get(timeline::full))
        .route("/timeline/by-category", get(timeline::by_category))
        .route("/timeline/update-progress", post(timeline::update_progress))
        .route("/progress/items", get(progress::list_items))
        .route("/progress/items/:id", put(progress::update_item))
        .route("/progress/items/:id/subtask", post(progress::toggle_subtask))
        .route("/progress/dashboard", get(progress::dashboard))
        .route("/visa/requirements", get(visa::requirements))
        .route("/visa/requirements/:slug", get(visa::requirement_details))
        .route("/visa/checklist", get(visa::checklist))
        .route("/jobs/listings", get(jobs::listings))
        .route("/jobs/featured", get(jobs::featured))
        .route("/jobs/categories", get(jobs::categories))
        .route("/jobs/opportunities", get(jobs::opportunities))
        .route("/locations/:id", get(directory::location))
        .route("/housing/:id", get(directory::housing))
        .route("/comparison/:route", get(directory::comparison))
        .route("/resources/all", get(directory::resources))
        .route("/logistics/providers", get(directory::logistics_providers));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Serve the API on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
