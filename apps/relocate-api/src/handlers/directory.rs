use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use relocate_types::{
    HousingMarket, LocationProfile, LogisticsProvider, RelocationComparison, ResourceLink,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Handler: GET /api/resources/all
pub async fn resources(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, Vec<ResourceLink>>> {
    Json(state.catalog.resources_by_category())
}

/// Handler: GET /api/logistics/providers
pub async fn logistics_providers(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, Vec<LogisticsProvider>>> {
    Json(state.catalog.logistics_by_category())
}

/// Handler: GET /api/locations/:id
pub async fn location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<LocationProfile>, ApiError> {
    state
        .catalog
        .location(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::LocationNotFound(id))
}

/// Handler: GET /api/housing/:id
pub async fn housing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<HousingMarket>, ApiError> {
    state
        .catalog
        .housing_market(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::LocationNotFound(id))
}

/// Handler: GET /api/comparison/:route
///
/// `route` is "origin-to-destination", e.g. "phoenix-to-peak-district".
pub async fn comparison(
    State(state): State<Arc<AppState>>,
    Path(route): Path<String>,
) -> Result<Json<RelocationComparison>, ApiError> {
    state
        .catalog
        .comparison(&route)
        .cloned()
        .map(Json)
        .ok_or(ApiError::ComparisonNotFound(route))
}
