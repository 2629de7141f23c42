//! Job listing filters
//!
//! A filter is the AND of its active predicates. `"all"` (any case) and the
//! empty string are wildcards and never constrain the result.

use serde::{Deserialize, Serialize};

use crate::types::JobListing;

pub const WILDCARD: &str = "all";

pub fn is_wildcard(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(WILDCARD)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilter {
    #[serde(default = "wildcard")]
    pub category: String,
    #[serde(default = "wildcard")]
    pub job_type: String,
    #[serde(default)]
    pub search: String,
}

fn wildcard() -> String {
    WILDCARD.to_string()
}

impl Default for JobFilter {
    fn default() -> Self {
        Self {
            category: wildcard(),
            job_type: wildcard(),
            search: String::new(),
        }
    }
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        is_wildcard(&self.category) && is_wildcard(&self.job_type) && self.search.is_empty()
    }

    pub fn matches(&self, job: &JobListing) -> bool {
        if !is_wildcard(&self.category) && job.category != self.category {
            return false;
        }
        if !is_wildcard(&self.job_type) && job.job_type != self.job_type {
            return false;
        }

        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&job.title, &job.company, &job.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, jobs: &'a [JobListing]) -> Vec<&'a JobListing> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

/// Distinct values of a field, in first-seen order
pub fn distinct<'a, F>(jobs: &'a [JobListing], field: F) -> Vec<String>
where
    F: Fn(&'a JobListing) -> &'a str,
{
    let mut seen: Vec<String> = Vec::new();
    for job in jobs {
        let value = field(job);
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
