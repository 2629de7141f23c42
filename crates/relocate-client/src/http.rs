//! reqwest-backed implementation of [`RelocateApi`]

use std::collections::BTreeMap;

use async_trait::async_trait;
use relocate_types::{
    comparison_route, DashboardOverview, FeaturedJobsResponse, HousingMarket,
    JobCategoriesResponse, JobListing, JobListingsResponse, JobOpportunitiesResponse,
    LocationProfile, LogisticsProvider, ProgressDashboard, ProgressItem, ProgressItemsResponse,
    ProgressStatus, RelocationComparison, ResourceLink, SubtaskToggleRequest, TimelineResponse,
    TimelineStep, TimelineUpdateRequest, UpdateProgressItemRequest, UpdateResponse,
    VisaChecklistResponse, VisaRequirementsResponse, VisaType,
};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::api::RelocateApi;
use crate::error::{ClientError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL from `RELOCATE_API_URL`, falling back to the local default
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("RELOCATE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint URL built from path segments. Each segment is
    /// percent-encoded, so ids containing `/`, `?` or `#` stay one segment.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.send(self.client.get(self.url(segments)?)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// The `error` field of an API error body, or the raw body
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}

#[async_trait]
impl RelocateApi for HttpApi {
    async fn overview(&self) -> Result<DashboardOverview> {
        self.get(&["api", "dashboard", "overview"]).await
    }

    async fn timeline(&self) -> Result<TimelineResponse> {
        self.get(&["api", "timeline", "full"]).await
    }

    async fn timeline_by_category(&self) -> Result<BTreeMap<String, Vec<TimelineStep>>> {
        self.get(&["api", "timeline", "by-category"]).await
    }

    async fn update_step(&self, update: &TimelineUpdateRequest) -> Result<UpdateResponse> {
        let request = self
            .client
            .post(self.url(&["api", "timeline", "update-progress"])?)
            .json(update);
        self.send(request).await
    }

    async fn progress_items(
        &self,
        category: Option<&str>,
        status: Option<ProgressStatus>,
    ) -> Result<Vec<ProgressItem>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(category) = category {
            query.push(("category", category.to_string()));
        }
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }

        let request = self
            .client
            .get(self.url(&["api", "progress", "items"])?)
            .query(&query);
        let response: ProgressItemsResponse = self.send(request).await?;
        Ok(response.items)
    }

    async fn update_progress_item(
        &self,
        id: &str,
        update: &UpdateProgressItemRequest,
    ) -> Result<ProgressItem> {
        let request = self
            .client
            .put(self.url(&["api", "progress", "items", id])?)
            .json(update);
        self.send(request).await
    }

    async fn toggle_subtask(&self, id: &str, subtask_index: usize) -> Result<ProgressItem> {
        let request = self
            .client
            .post(self.url(&["api", "progress", "items", id, "subtask"])?)
            .json(&SubtaskToggleRequest { subtask_index });
        self.send(request).await
    }

    async fn progress_dashboard(&self) -> Result<ProgressDashboard> {
        self.get(&["api", "progress", "dashboard"]).await
    }

    async fn visa_requirements(&self) -> Result<Vec<VisaType>> {
        let response: VisaRequirementsResponse = self.get(&["api", "visa", "requirements"]).await?;
        Ok(response.visa_types)
    }

    async fn visa_details(&self, slug: &str) -> Result<VisaType> {
        self.get(&["api", "visa", "requirements", slug]).await
    }

    async fn visa_checklist(&self) -> Result<BTreeMap<String, Vec<String>>> {
        let response: VisaChecklistResponse = self.get(&["api", "visa", "checklist"]).await?;
        Ok(response.categories)
    }

    async fn job_listings(&self) -> Result<JobListingsResponse> {
        self.get(&["api", "jobs", "listings"]).await
    }

    async fn featured_jobs(&self) -> Result<Vec<JobListing>> {
        let response: FeaturedJobsResponse = self.get(&["api", "jobs", "featured"]).await?;
        Ok(response.jobs)
    }

    async fn job_categories(&self) -> Result<Vec<String>> {
        let response: JobCategoriesResponse = self.get(&["api", "jobs", "categories"]).await?;
        Ok(response.categories)
    }

    async fn job_opportunities(&self) -> Result<JobOpportunitiesResponse> {
        self.get(&["api", "jobs", "opportunities"]).await
    }

    async fn location(&self, id: &str) -> Result<LocationProfile> {
        self.get(&["api", "locations", id]).await
    }

    async fn housing(&self, location_id: &str) -> Result<HousingMarket> {
        self.get(&["api", "housing", location_id]).await
    }

    async fn comparison(&self, origin: &str, destination: &str) -> Result<RelocationComparison> {
        let route = comparison_route(origin, destination);
        self.get(&["api", "comparison", route.as_str()]).await
    }

    async fn resources(&self) -> Result<BTreeMap<String, Vec<ResourceLink>>> {
        self.get(&["api", "resources", "all"]).await
    }

    async fn logistics_providers(&self) -> Result<BTreeMap<String, Vec<LogisticsProvider>>> {
        self.get(&["api", "logistics", "providers"]).await
    }
}
