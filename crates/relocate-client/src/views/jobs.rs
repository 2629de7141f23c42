use std::sync::Arc;

use relocate_types::{JobFilter, JobListing, JobSector};

use super::logged;
use crate::api::RelocateApi;

/// Job board page
///
/// The whole board is fetched once; category, job type and free-text search
/// are applied locally on every change.
pub struct JobsView {
    api: Arc<dyn RelocateApi>,
    jobs: Vec<JobListing>,
    categories: Vec<String>,
    job_types: Vec<String>,
    sectors: Vec<JobSector>,
    filter: JobFilter,
}

impl JobsView {
    pub fn new(api: Arc<dyn RelocateApi>) -> Self {
        Self {
            api,
            jobs: Vec::new(),
            categories: Vec::new(),
            job_types: Vec::new(),
            sectors: Vec::new(),
            filter: JobFilter::new(),
        }
    }

    pub async fn load(&mut self) -> bool {
        match logged("load job listings", self.api.job_listings().await) {
            Some(listings) => {
                tracing::debug!("Job listings refreshed: {} jobs", listings.total);
                self.jobs = listings.jobs;
                self.categories = listings.categories;
                self.job_types = listings.job_types;
                true
            }
            None => false,
        }
    }

    /// Sector outlook shown above the board
    pub async fn load_opportunities(&mut self) -> bool {
        match logged("load job opportunities", self.api.job_opportunities().await) {
            Some(response) => {
                self.sectors = response.opportunities;
                true
            }
            None => false,
        }
    }

    pub fn sectors(&self) -> &[JobSector] {
        &self.sectors
    }

    pub fn jobs(&self) -> &[JobListing] {
        &self.jobs
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn job_types(&self) -> &[String] {
        &self.job_types
    }

    pub fn filter(&self) -> &JobFilter {
        &self.filter
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    pub fn set_job_type(&mut self, job_type: impl Into<String>) {
        self.filter.job_type = job_type.into();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn reset_filters(&mut self) {
        self.filter = JobFilter::new();
    }

    pub fn visible(&self) -> Vec<&JobListing> {
        self.filter.apply(&self.jobs)
    }

    pub fn featured(&self) -> impl Iterator<Item = &JobListing> {
        self.jobs.iter().filter(|j| j.featured)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fake::FakeApi;

    async fn loaded() -> JobsView {
        let mut view = JobsView::new(Arc::new(FakeApi::new()));
        assert!(view.load().await);
        view
    }

    fn ids(jobs: Vec<&JobListing>) -> Vec<&str> {
        jobs.into_iter().map(|j| j.id.as_str()).collect()
    }

    #[tokio::test]
    async fn filters_combine() {
        let mut view = loaded().await;
        assert_eq!(view.visible().len(), 3);
        assert_eq!(view.categories(), ["technology", "healthcare", "engineering"]);

        view.set_search("ENGINEER");
        assert_eq!(ids(view.visible()), vec!["job-1", "job-3"]);

        view.set_job_type("contract");
        assert_eq!(ids(view.visible()), vec!["job-3"]);

        view.reset_filters();
        assert_eq!(view.visible().len(), 3);
    }

    #[tokio::test]
    async fn absent_category_is_empty() {
        let mut view = loaded().await;
        view.set_category("aerospace");
        assert!(view.visible().is_empty());
    }

    #[tokio::test]
    async fn featured_subset() {
        let view = loaded().await;
        let featured: Vec<&str> = view.featured().map(|j| j.id.as_str()).collect();
        assert_eq!(featured, vec!["job-1"]);
    }

    #[tokio::test]
    async fn opportunities_load_separately() {
        let api = Arc::new(FakeApi::new());
        let mut view = JobsView::new(api.clone());

        assert!(view.load_opportunities().await);
        assert!(view.jobs().is_empty());
        assert_eq!(view.sectors()[0].sector, "healthcare");

        api.set_failing(true);
        assert!(!view.load_opportunities().await);
        assert_eq!(view.sectors().len(), 1);
    }
}
