use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use relocate_types::{
    is_wildcard, ProgressDashboard, ProgressItem, ProgressItemsResponse, ProgressStatus,
    SubtaskToggleRequest, UpdateProgressItemRequest,
};
use serde::Deserialize;

use crate::db;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ProgressQuery {
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Handler: GET /api/progress/items
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<ProgressItemsResponse>, ApiError> {
    let status = match query.status.as_deref() {
        Some(s) if !is_wildcard(s) => Some(
            s.parse::<ProgressStatus>()
                .map_err(ApiError::InvalidRequest)?,
        ),
        _ => None,
    };
    let category = query.category.filter(|c| !is_wildcard(c));

    let items = db::progress_items(&state.db)
        .await?
        .into_iter()
        .filter(|item| category.as_ref().map_or(true, |c| &item.category == c))
        .filter(|item| status.map_or(true, |s| item.status == s))
        .collect();

    Ok(Json(ProgressItemsResponse { items }))
}

/// Handler: PUT /api/progress/items/:id
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProgressItemRequest>, JsonRejection>,
) -> Result<Json<ProgressItem>, ApiError> {
    let Json(req) = payload?;

    if req.is_empty() {
        return Err(ApiError::InvalidRequest(
            "Nothing to update: provide status, notes, or priority".to_string(),
        ));
    }

    let item = db::update_progress_item(&state.db, &id, &req).await?;
    tracing::info!(
        "Updated progress item {}: status={}, priority={}",
        item.id,
        item.status,
        item.priority
    );

    Ok(Json(item))
}

/// Handler: POST /api/progress/items/:id/subtask
pub async fn toggle_subtask(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<SubtaskToggleRequest>, JsonRejection>,
) -> Result<Json<ProgressItem>, ApiError> {
    let Json(req) = payload?;

    let item = db::toggle_subtask(&state.db, &id, req.subtask_index).await?;
    let completion = item.subtask_completion();
    tracing::info!(
        "Toggled subtask {} of {} ({}/{} done)",
        req.subtask_index,
        item.id,
        completion.completed,
        completion.total
    );

    Ok(Json(item))
}

/// Handler: GET /api/progress/dashboard
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProgressDashboard>, ApiError> {
    let items = db::progress_items(&state.db).await?;
    Ok(Json(ProgressDashboard::from_items(&items)))
}
