use std::sync::Arc;

use relocate_types::{Completion, VisaType};

use super::logged;
use crate::api::RelocateApi;
use crate::checklist::{ChecklistOverlay, DocumentKey};

/// Visa requirements page
///
/// The document checklist is an overlay owned by this view. Switching the
/// selected visa type keeps every checkbox; dropping the view forgets them.
pub struct VisaView {
    api: Arc<dyn RelocateApi>,
    visa_types: Vec<VisaType>,
    selected: Option<String>,
    checklist: ChecklistOverlay,
}

impl VisaView {
    pub fn new(api: Arc<dyn RelocateApi>) -> Self {
        Self {
            api,
            visa_types: Vec::new(),
            selected: None,
            checklist: ChecklistOverlay::new(),
        }
    }

    /// Fetch visa types, selecting the first one if nothing is selected yet
    pub async fn load(&mut self) -> bool {
        let Some(visa_types) = logged("load visa requirements", self.api.visa_requirements().await)
        else {
            return false;
        };

        tracing::debug!("Visa requirements refreshed: {} types", visa_types.len());
        self.visa_types = visa_types;
        if self.selected().is_none() {
            self.selected = self.visa_types.first().map(|v| v.id.clone());
        }
        true
    }

    pub fn visa_types(&self) -> &[VisaType] {
        &self.visa_types
    }

    /// Select by id or slug
    pub fn select(&mut self, visa: &str) -> bool {
        match self
            .visa_types
            .iter()
            .find(|v| v.id == visa || v.slug() == visa)
        {
            Some(found) => {
                self.selected = Some(found.id.clone());
                true
            }
            None => {
                tracing::warn!("Unknown visa type {}", visa);
                false
            }
        }
    }

    pub fn selected(&self) -> Option<&VisaType> {
        let id = self.selected.as_deref()?;
        self.visa_types.iter().find(|v| v.id == id)
    }

    /// Tick or untick a document of the selected visa; `None` if it does not exist
    pub fn toggle_document(&mut self, category: &str, index: usize) -> Option<bool> {
        let visa = self.selected()?;
        let in_range = visa
            .required_documents
            .get(category)
            .is_some_and(|docs| index < docs.len());
        if !in_range {
            return None;
        }

        let key = DocumentKey::new(&visa.id, category, index);
        Some(self.checklist.toggle(key))
    }

    pub fn is_checked(&self, category: &str, index: usize) -> bool {
        self.selected().is_some_and(|visa| {
            self.checklist
                .is_checked(&DocumentKey::new(&visa.id, category, index))
        })
    }

    pub fn document_completion(&self) -> Completion {
        self.selected()
            .map(|visa| self.checklist.completion(visa))
            .unwrap_or_default()
    }

    pub fn category_completion(&self, category: &str) -> Completion {
        self.selected()
            .map(|visa| self.checklist.category_completion(visa, category))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fake::FakeApi;

    async fn loaded() -> VisaView {
        let mut view = VisaView::new(Arc::new(FakeApi::new()));
        assert!(view.load().await);
        view
    }

    #[tokio::test]
    async fn fresh_view_has_no_checked_documents() {
        let view = loaded().await;
        assert_eq!(view.selected().map(|v| v.id.as_str()), Some("skilled-worker"));
        assert!(!view.is_checked("identity", 0));
        assert_eq!(view.document_completion(), Completion { completed: 0, total: 3 });
    }

    #[tokio::test]
    async fn checks_survive_switching_visa() {
        let mut view = loaded().await;

        assert_eq!(view.toggle_document("identity", 0), Some(true));
        assert!(view.select("family"));
        // same category name, different visa
        assert!(!view.is_checked("identity", 0));
        assert_eq!(view.document_completion(), Completion { completed: 0, total: 2 });

        assert!(view.select("skilled-worker"));
        assert!(view.is_checked("identity", 0));
        assert_eq!(view.category_completion("identity"), Completion { completed: 1, total: 2 });
    }

    #[tokio::test]
    async fn select_by_slug() {
        let mut view = loaded().await;
        assert!(view.select("family-visa"));
        assert_eq!(view.selected().map(|v| v.id.as_str()), Some("family"));
        assert!(!view.select("tourist"));
    }

    #[tokio::test]
    async fn out_of_range_document_is_ignored() {
        let mut view = loaded().await;
        assert_eq!(view.toggle_document("identity", 5), None);
        assert_eq!(view.toggle_document("medical", 0), None);
        assert_eq!(view.document_completion().completed, 0);
    }

    #[tokio::test]
    async fn reload_keeps_selection_and_checks() {
        let mut view = loaded().await;
        view.select("family");
        view.toggle_document("relationship", 0);

        assert!(view.load().await);
        assert_eq!(view.selected().map(|v| v.id.as_str()), Some("family"));
        assert!(view.is_checked("relationship", 0));
    }
}
