use std::sync::Arc;

use axum::{extract::State, Json};
use relocate_types::{Completion, DashboardOverview, Priority, ProgressStatus};

use crate::db;
use crate::error::ApiError;
use crate::state::AppState;

/// Handler: GET /api/dashboard/overview
///
/// Every count is recomputed from the store on each request.
pub async fn overview(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardOverview>, ApiError> {
    let steps = db::timeline(&state.db, &state.catalog).await?;
    let completion = Completion::of(&steps);

    let urgent_tasks = steps
        .iter()
        .filter(|s| !s.is_completed && s.priority == Priority::High)
        .count();
    let in_progress = db::count_items_with_status(&state.db, ProgressStatus::InProgress).await?;

    Ok(Json(DashboardOverview {
        total_steps: completion.total,
        completed_steps: completion.completed,
        in_progress,
        urgent_tasks,
    }))
}
