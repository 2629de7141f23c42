use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use relocate_types::{
    distinct, FeaturedJobsResponse, JobCategoriesResponse, JobFilter, JobListing,
    JobListingsResponse, JobOpportunitiesResponse,
};
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct JobQuery {
    pub category: Option<String>,
    pub job_type: Option<String>,
}

impl From<JobQuery> for JobFilter {
    fn from(query: JobQuery) -> Self {
        let mut filter = JobFilter::new();
        if let Some(category) = query.category {
            filter = filter.with_category(category);
        }
        if let Some(job_type) = query.job_type {
            filter = filter.with_job_type(job_type);
        }
        filter
    }
}

/// Handler: GET /api/jobs/listings
///
/// `categories` and `job_types` always describe the whole board so a client
/// can build its filter choices from any response.
pub async fn listings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<JobQuery>,
) -> Json<JobListingsResponse> {
    let all = &state.catalog.jobs;
    let filter = JobFilter::from(query);
    let jobs: Vec<JobListing> = filter.apply(all).into_iter().cloned().collect();

    tracing::debug!("Job listings: {} of {} match {:?}", jobs.len(), all.len(), filter);

    Json(JobListingsResponse {
        total: jobs.len(),
        jobs,
        categories: distinct(all, |j| j.category.as_str()),
        job_types: distinct(all, |j| j.job_type.as_str()),
    })
}

/// Handler: GET /api/jobs/featured
pub async fn featured(State(state): State<Arc<AppState>>) -> Json<FeaturedJobsResponse> {
    let jobs: Vec<JobListing> = state
        .catalog
        .jobs
        .iter()
        .filter(|j| j.featured)
        .cloned()
        .collect();

    Json(FeaturedJobsResponse {
        total: jobs.len(),
        jobs,
    })
}

/// Handler: GET /api/jobs/categories
pub async fn categories(State(state): State<Arc<AppState>>) -> Json<JobCategoriesResponse> {
    Json(JobCategoriesResponse {
        categories: distinct(&state.catalog.jobs, |j| j.category.as_str()),
    })
}

/// Handler: GET /api/jobs/opportunities
pub async fn opportunities(State(state): State<Arc<AppState>>) -> Json<JobOpportunitiesResponse> {
    Json(JobOpportunitiesResponse {
        opportunities: state.catalog.job_sectors.clone(),
        total_listings: state.catalog.jobs.len(),
    })
}
