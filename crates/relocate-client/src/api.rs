//! The API surface the page views are written against
//!
//! [`HttpApi`](crate::HttpApi) is the real implementation; tests swap in an
//! in-memory one.

use std::collections::BTreeMap;

use async_trait::async_trait;
use relocate_types::{
    DashboardOverview, HousingMarket, JobListing, JobListingsResponse, JobOpportunitiesResponse,
    LocationProfile, LogisticsProvider, ProgressDashboard, ProgressItem, ProgressStatus,
    RelocationComparison, ResourceLink, TimelineResponse, TimelineStep, TimelineUpdateRequest,
    UpdateProgressItemRequest, UpdateResponse, VisaType,
};

use crate::error::Result;

/// One method per server endpoint
#[async_trait]
pub trait RelocateApi: Send + Sync {
    async fn overview(&self) -> Result<DashboardOverview>;

    async fn timeline(&self) -> Result<TimelineResponse>;

    async fn timeline_by_category(&self) -> Result<BTreeMap<String, Vec<TimelineStep>>>;

    async fn update_step(&self, update: &TimelineUpdateRequest) -> Result<UpdateResponse>;

    /// Progress items, optionally narrowed server-side
    async fn progress_items(
        &self,
        category: Option<&str>,
        status: Option<ProgressStatus>,
    ) -> Result<Vec<ProgressItem>>;

    async fn update_progress_item(
        &self,
        id: &str,
        update: &UpdateProgressItemRequest,
    ) -> Result<ProgressItem>;

    async fn toggle_subtask(&self, id: &str, subtask_index: usize) -> Result<ProgressItem>;

    async fn progress_dashboard(&self) -> Result<ProgressDashboard>;

    async fn visa_requirements(&self) -> Result<Vec<VisaType>>;

    async fn visa_details(&self, slug: &str) -> Result<VisaType>;

    async fn visa_checklist(&self) -> Result<BTreeMap<String, Vec<String>>>;

    async fn job_listings(&self) -> Result<JobListingsResponse>;

    async fn featured_jobs(&self) -> Result<Vec<JobListing>>;

    async fn job_categories(&self) -> Result<Vec<String>>;

    async fn job_opportunities(&self) -> Result<JobOpportunitiesResponse>;

    async fn location(&self, id: &str) -> Result<LocationProfile>;

    async fn housing(&self, location_id: &str) -> Result<HousingMarket>;

    async fn comparison(&self, origin: &str, destination: &str) -> Result<RelocationComparison>;

    async fn resources(&self) -> Result<BTreeMap<String, Vec<ResourceLink>>>;

    async fn logistics_providers(&self) -> Result<BTreeMap<String, Vec<LogisticsProvider>>>;
}
