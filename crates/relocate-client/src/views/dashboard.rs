use std::sync::Arc;

use relocate_types::{Completion, DashboardOverview};

use super::logged;
use crate::api::RelocateApi;

pub struct DashboardView {
    api: Arc<dyn RelocateApi>,
    overview: DashboardOverview,
}

impl DashboardView {
    pub fn new(api: Arc<dyn RelocateApi>) -> Self {
        Self {
            api,
            overview: DashboardOverview::default(),
        }
    }

    pub async fn load(&mut self) -> bool {
        match logged("load dashboard overview", self.api.overview().await) {
            Some(overview) => {
                tracing::debug!("Dashboard overview refreshed: {:?}", overview);
                self.overview = overview;
                true
            }
            None => false,
        }
    }

    pub fn overview(&self) -> &DashboardOverview {
        &self.overview
    }

    pub fn completion(&self) -> Completion {
        Completion {
            completed: self.overview.completed_steps,
            total: self.overview.total_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;

    #[tokio::test]
    async fn load_fills_overview() {
        let api = Arc::new(FakeApi::new());
        let mut view = DashboardView::new(api);

        assert_eq!(view.completion().percentage(), 0);
        assert!(view.load().await);
        assert_eq!(view.overview().total_steps, 3);
        assert_eq!(view.overview().urgent_tasks, 1);
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_state() {
        let api = Arc::new(FakeApi::new());
        let mut view = DashboardView::new(api.clone());
        view.load().await;

        api.set_failing(true);
        assert!(!view.load().await);
        assert_eq!(view.overview().total_steps, 3);
    }
}
