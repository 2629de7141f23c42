//! Visa document checklist overlay
//!
//! Which documents the user has ticked off is never sent to the server. The
//! overlay lives and dies with the view that owns it. Keys are scoped by visa
//! type, so two visa types that share a category name keep separate state.

use std::collections::HashSet;
use std::fmt;

use relocate_types::{Completion, VisaType};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    pub visa_id: String,
    pub category: String,
    pub index: usize,
}

impl DocumentKey {
    pub fn new(visa_id: impl Into<String>, category: impl Into<String>, index: usize) -> Self {
        Self {
            visa_id: visa_id.into(),
            category: category.into(),
            index,
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.visa_id, self.category, self.index)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChecklistOverlay {
    checked: HashSet<DocumentKey>,
}

impl ChecklistOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a document and return its new state
    pub fn toggle(&mut self, key: DocumentKey) -> bool {
        if self.checked.remove(&key) {
            false
        } else {
            self.checked.insert(key);
            true
        }
    }

    pub fn is_checked(&self, key: &DocumentKey) -> bool {
        self.checked.contains(key)
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Ticked documents of one category of `visa`
    pub fn category_completion(&self, visa: &VisaType, category: &str) -> Completion {
        let docs = visa
            .required_documents
            .get(category)
            .map(Vec::len)
            .unwrap_or(0);
        Completion::of(
            (0..docs).map(|index| self.is_checked(&DocumentKey::new(&visa.id, category, index))),
        )
    }

    /// Ticked documents across every category of `visa`
    pub fn completion(&self, visa: &VisaType) -> Completion {
        visa.required_documents
            .keys()
            .map(|category| self.category_completion(visa, category))
            .fold(Completion::default(), |acc, c| acc + c)
    }
}
