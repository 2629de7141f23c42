use std::collections::BTreeMap;
use std::sync::Arc;

use relocate_types::{is_wildcard, Completion, TimelineStep, TimelineUpdateRequest, WILDCARD};

use super::logged;
use crate::api::RelocateApi;

pub struct TimelineView {
    api: Arc<dyn RelocateApi>,
    steps: Vec<TimelineStep>,
    by_category: BTreeMap<String, Vec<TimelineStep>>,
    category: String,
}

impl TimelineView {
    pub fn new(api: Arc<dyn RelocateApi>) -> Self {
        Self {
            api,
            steps: Vec::new(),
            by_category: BTreeMap::new(),
            category: WILDCARD.to_string(),
        }
    }

    /// Refetch the full timeline and its category grouping together
    pub async fn load(&mut self) -> bool {
        let fetched = tokio::try_join!(self.api.timeline(), self.api.timeline_by_category());

        match logged("load timeline", fetched) {
            Some((timeline, by_category)) => {
                tracing::debug!(
                    "Timeline refreshed: {}/{} steps complete",
                    timeline.completed,
                    timeline.total
                );
                self.steps = timeline.steps;
                self.by_category = by_category;
                true
            }
            None => false,
        }
    }

    pub fn steps(&self) -> &[TimelineStep] {
        &self.steps
    }

    pub fn step(&self, id: &str) -> Option<&TimelineStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.by_category.keys().map(String::as_str)
    }

    pub fn selected_category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Steps in the selected category, or every step for the wildcard
    pub fn visible(&self) -> &[TimelineStep] {
        if is_wildcard(&self.category) {
            return &self.steps;
        }
        self.by_category
            .get(&self.category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn completion(&self) -> Completion {
        Completion::of(&self.steps)
    }

    pub fn category_completion(&self, category: &str) -> Completion {
        self.by_category
            .get(category)
            .map(Completion::of)
            .unwrap_or_default()
    }

    /// Flip a step's completion
    pub async fn toggle_step(&mut self, step_id: &str) -> bool {
        let Some(completed) = self.step(step_id).map(|s| !s.is_completed) else {
            tracing::warn!("Step {} is not in the loaded timeline", step_id);
            return false;
        };
        self.set_step(step_id, completed, None).await
    }

    /// Set a step's completion explicitly, optionally attaching notes
    pub async fn set_step(&mut self, step_id: &str, completed: bool, notes: Option<String>) -> bool {
        let update = TimelineUpdateRequest {
            step_id: step_id.to_string(),
            completed,
            notes,
        };

        if logged("update timeline step", self.api.update_step(&update).await).is_none() {
            return false;
        }
        self.load().await
    }
}
