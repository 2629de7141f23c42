use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use relocate_types::{VisaChecklistResponse, VisaRequirementsResponse, VisaType};

use crate::error::ApiError;
use crate::state::AppState;

/// Handler: GET /api/visa/requirements
pub async fn requirements(State(state): State<Arc<AppState>>) -> Json<VisaRequirementsResponse> {
    Json(VisaRequirementsResponse {
        visa_types: state.catalog.visa_types.clone(),
    })
}

/// Handler: GET /api/visa/requirements/:slug
pub async fn requirement_details(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<VisaType>, ApiError> {
    state
        .catalog
        .visa_by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or(ApiError::VisaNotFound(slug))
}

/// Handler: GET /api/visa/checklist
pub async fn checklist(State(state): State<Arc<AppState>>) -> Json<VisaChecklistResponse> {
    Json(VisaChecklistResponse {
        categories: state.catalog.document_checklist(),
    })
}
