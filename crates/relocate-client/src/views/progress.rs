use std::sync::Arc;

use relocate_types::{
    Completion, Priority, ProgressItem, ProgressStatus, StatusCounts, UpdateProgressItemRequest,
};

use super::logged;
use crate::api::RelocateApi;

pub struct ProgressView {
    api: Arc<dyn RelocateApi>,
    items: Vec<ProgressItem>,
}

impl ProgressView {
    pub fn new(api: Arc<dyn RelocateApi>) -> Self {
        Self {
            api,
            items: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> bool {
        match logged("load progress items", self.api.progress_items(None, None).await) {
            Some(items) => {
                tracing::debug!("Progress items refreshed: {} items", items.len());
                self.items = items;
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[ProgressItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&ProgressItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn with_status(&self, status: ProgressStatus) -> impl Iterator<Item = &ProgressItem> {
        self.items.iter().filter(move |i| i.status == status)
    }

    /// Items whose status is `completed`
    pub fn completion(&self) -> Completion {
        Completion::of(&self.items)
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::from_items(&self.items)
    }

    /// Subtasks ticked across every item
    pub fn subtask_completion(&self) -> Completion {
        self.items
            .iter()
            .map(ProgressItem::subtask_completion)
            .fold(Completion::default(), |acc, c| acc + c)
    }

    pub async fn set_status(&mut self, id: &str, status: ProgressStatus) -> bool {
        self.update(id, UpdateProgressItemRequest::status(status)).await
    }

    pub async fn save_notes(&mut self, id: &str, notes: impl Into<String>) -> bool {
        self.update(id, UpdateProgressItemRequest::notes(notes)).await
    }

    pub async fn set_priority(&mut self, id: &str, priority: Priority) -> bool {
        self.update(id, UpdateProgressItemRequest::priority(priority)).await
    }

    pub async fn toggle_subtask(&mut self, id: &str, subtask_index: usize) -> bool {
        let sent = self.api.toggle_subtask(id, subtask_index).await;
        if logged("toggle subtask", sent).is_none() {
            return false;
        }
        self.load().await
    }

    async fn update(&mut self, id: &str, update: UpdateProgressItemRequest) -> bool {
        let sent = self.api.update_progress_item(id, &update).await;
        if logged("update progress item", sent).is_none() {
            return false;
        }
        self.load().await
    }
}
