use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use relocate_types::{
    Completion, TimelineResponse, TimelineStep, TimelineUpdateRequest, UpdateResponse,
};

use crate::catalog::group_by_category;
use crate::db;
use crate::error::ApiError;
use crate::state::AppState;

/// Handler: GET /api/timeline/full
pub async fn full(State(state): State<Arc<AppState>>) -> Result<Json<TimelineResponse>, ApiError> {
    let steps = db::timeline(&state.db, &state.catalog).await?;
    let completion = Completion::of(&steps);

    Ok(Json(TimelineResponse {
        steps,
        total: completion.total,
        completed: completion.completed,
    }))
}

/// Handler: GET /api/timeline/by-category
pub async fn by_category(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<String, Vec<TimelineStep>>>, ApiError> {
    let steps = db::timeline(&state.db, &state.catalog).await?;
    Ok(Json(group_by_category(&steps, |s| &s.category)))
}

/// Handler: POST /api/timeline/update-progress
pub async fn update_progress(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TimelineUpdateRequest>, JsonRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let Json(req) = payload?;

    if state.catalog.step(&req.step_id).is_none() {
        return Err(ApiError::StepNotFound(req.step_id));
    }

    db::set_step_completed(&state.db, &req.step_id, req.completed, req.notes.as_deref()).await?;

    let label = if req.completed { "completed" } else { "not completed" };
    tracing::info!("Timeline step {} marked {}", req.step_id, label);

    Ok(Json(UpdateResponse {
        success: true,
        message: format!("Step {} marked {}", req.step_id, label),
    }))
}
