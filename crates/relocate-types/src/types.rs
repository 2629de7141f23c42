use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::progress::Completion;

/// Step / task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!(
                "Invalid priority '{}'. Must be 'low', 'medium', or 'high'",
                other
            )),
        }
    }
}

/// Status of a tracked progress item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

impl ProgressStatus {
    pub const ALL: [ProgressStatus; 4] = [
        ProgressStatus::NotStarted,
        ProgressStatus::InProgress,
        ProgressStatus::Completed,
        ProgressStatus::Blocked,
    ];
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressStatus::NotStarted => write!(f, "not_started"),
            ProgressStatus::InProgress => write!(f, "in_progress"),
            ProgressStatus::Completed => write!(f, "completed"),
            ProgressStatus::Blocked => write!(f, "blocked"),
        }
    }
}

impl FromStr for ProgressStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "not_started" => Ok(ProgressStatus::NotStarted),
            "in_progress" => Ok(ProgressStatus::InProgress),
            "completed" => Ok(ProgressStatus::Completed),
            "blocked" => Ok(ProgressStatus::Blocked),
            other => Err(format!(
                "Invalid status '{}'. Must be 'not_started', 'in_progress', 'completed', or 'blocked'",
                other
            )),
        }
    }
}

/// One step of the fixed relocation plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub is_completed: bool,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub required_documents: Vec<String>,
    #[serde(default)]
    pub estimated_cost: Option<String>,
    #[serde(default)]
    pub estimated_duration: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Atomic checklist entry inside a progress item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub task: String,
    pub completed: bool,
}

/// A tracked task with subtasks and free-text notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub status: ProgressStatus,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub notes: String,
    pub updated_at: DateTime<Utc>,
}

impl ProgressItem {
    pub fn subtask_completion(&self) -> Completion {
        Completion::of(&self.subtasks)
    }
}

/// Visa route with its requirements and document checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisaType {
    pub id: String,
    pub visa_type: String,
    pub fee: String,
    pub processing_time: String,
    pub requirements: Vec<String>,
    pub application_process: Vec<String>,
    /// Document category -> document names
    pub required_documents: BTreeMap<String, Vec<String>>,
}

impl VisaType {
    /// URL slug, e.g. "Skilled Worker Visa" -> "skilled-worker-visa"
    pub fn slug(&self) -> String {
        self.visa_type.to_lowercase().replace(' ', "-")
    }

    pub fn document_count(&self) -> usize {
        self.required_documents.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub category: String,
    pub remote_work: bool,
    pub requirements: Vec<String>,
    pub description: String,
    pub posted_date: NaiveDate,
    pub application_url: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogisticsProvider {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub website: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub estimated_cost: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub name: String,
    pub url: String,
    pub description: String,
    pub category: String,
}

// ============================================================
// Places: the two ends of the move
// ============================================================

/// Where the move starts
pub const ORIGIN: &str = "phoenix";

/// Where the move ends
pub const DESTINATION: &str = "peak-district";

/// Profile of one end of the move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationProfile {
    /// URL slug, e.g. "peak-district"
    pub id: String,
    pub name: String,
    pub region: String,
    pub country: String,
    pub population: String,
    pub climate: String,
    pub cost_of_living: String,
    pub highlights: Vec<String>,
    pub nearby_towns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingArea {
    pub name: String,
    pub description: String,
    pub average_rent: String,
    pub average_price: String,
    pub commute: String,
}

/// Housing market summary for one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingMarket {
    pub location_id: String,
    pub currency: String,
    pub average_rent: String,
    pub average_price: String,
    pub property_types: Vec<String>,
    pub areas: Vec<HousingArea>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub aspect: String,
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Side-by-side comparison of two locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationComparison {
    pub origin: String,
    pub destination: String,
    pub points: Vec<ComparisonPoint>,
}

impl RelocationComparison {
    /// Path form, e.g. "phoenix-to-peak-district"
    pub fn route(&self) -> String {
        comparison_route(&self.origin, &self.destination)
    }
}

pub fn comparison_route(origin: &str, destination: &str) -> String {
    format!("{}-to-{}", origin, destination)
}

/// Split "origin-to-destination" back into its two location ids
pub fn parse_comparison_route(route: &str) -> Option<(&str, &str)> {
    let (origin, destination) = route.split_once("-to-")?;
    if origin.is_empty() || destination.is_empty() {
        return None;
    }
    Some((origin, destination))
}

/// Demand outlook for one employment sector at the destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSector {
    pub sector: String,
    pub demand: String,
    pub salary_range: String,
    pub major_employers: Vec<String>,
    pub sponsorship: bool,
    pub notes: String,
}

// ============================================================
// Request / response payloads
// ============================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub total_steps: usize,
    pub completed_steps: usize,
    pub in_progress: usize,
    pub urgent_tasks: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineResponse {
    pub steps: Vec<TimelineStep>,
    pub total: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineUpdateRequest {
    pub step_id: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressItemsResponse {
    pub items: Vec<ProgressItem>,
}

/// Partial update of a progress item; absent fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProgressItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProgressStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl UpdateProgressItemRequest {
    pub fn status(status: ProgressStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn notes(notes: impl Into<String>) -> Self {
        Self {
            notes: Some(notes.into()),
            ..Self::default()
        }
    }

    pub fn priority(priority: Priority) -> Self {
        Self {
            priority: Some(priority),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none() && self.priority.is_none()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SubtaskToggleRequest {
    pub subtask_index: usize,
}

/// Number of progress items per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub blocked: usize,
}

impl StatusCounts {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a ProgressItem>) -> Self {
        items
            .into_iter()
            .fold(Self::default(), |mut counts, item| {
                match item.status {
                    ProgressStatus::NotStarted => counts.not_started += 1,
                    ProgressStatus::InProgress => counts.in_progress += 1,
                    ProgressStatus::Completed => counts.completed += 1,
                    ProgressStatus::Blocked => counts.blocked += 1,
                }
                counts
            })
    }

    pub fn get(&self, status: ProgressStatus) -> usize {
        match status {
            ProgressStatus::NotStarted => self.not_started,
            ProgressStatus::InProgress => self.in_progress,
            ProgressStatus::Completed => self.completed,
            ProgressStatus::Blocked => self.blocked,
        }
    }

    pub fn total(&self) -> usize {
        self.not_started + self.in_progress + self.completed + self.blocked
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressDashboard {
    pub total_items: usize,
    pub by_status: StatusCounts,
    pub total_subtasks: usize,
    pub completed_subtasks: usize,
    pub completion_percentage: u32,
}

impl ProgressDashboard {
    pub fn from_items(items: &[ProgressItem]) -> Self {
        let by_status = StatusCounts::from_items(items);
        let subtasks = items
            .iter()
            .map(ProgressItem::subtask_completion)
            .fold(Completion::default(), |acc, c| acc + c);

        Self {
            total_items: items.len(),
            by_status,
            total_subtasks: subtasks.total,
            completed_subtasks: subtasks.completed,
            completion_percentage: Completion::of(items).percentage(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisaRequirementsResponse {
    pub visa_types: Vec<VisaType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisaChecklistResponse {
    pub categories: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListingsResponse {
    pub jobs: Vec<JobListing>,
    pub total: usize,
    pub categories: Vec<String>,
    pub job_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedJobsResponse {
    pub jobs: Vec<JobListing>,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOpportunitiesResponse {
    pub opportunities: Vec<JobSector>,
    pub total_listings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(status: ProgressStatus, subtasks: &[bool]) -> ProgressItem {
        ProgressItem {
            id: "item".into(),
            title: "Item".into(),
            description: String::new(),
            category: "visa".into(),
            priority: Priority::Medium,
            status,
            subtasks: subtasks
                .iter()
                .enumerate()
                .map(|(i, done)| Subtask {
                    task: format!("task {}", i),
                    completed: *done,
                })
                .collect(),
            notes: String::new(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn status_round_trips_through_display() {
        for status in ProgressStatus::ALL {
            assert_eq!(status.to_string().parse::<ProgressStatus>(), Ok(status));
        }
        assert_eq!(
            "In-Progress".parse::<ProgressStatus>(),
            Ok(ProgressStatus::InProgress)
        );
        assert!("done".parse::<ProgressStatus>().is_err());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&ProgressStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not_started\"");
        let parsed: Priority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, Priority::High);
    }

    #[test]
    fn visa_slug_lowercases_and_hyphenates() {
        let visa = VisaType {
            id: "skilled".into(),
            visa_type: "Skilled Worker Visa".into(),
            fee: String::new(),
            processing_time: String::new(),
            requirements: vec![],
            application_process: vec![],
            required_documents: BTreeMap::from([
                ("Identity".to_string(), vec!["Passport".to_string()]),
                (
                    "Financial".to_string(),
                    vec!["Bank statements".to_string(), "Payslips".to_string()],
                ),
            ]),
        };
        assert_eq!(visa.slug(), "skilled-worker-visa");
        assert_eq!(visa.document_count(), 3);
    }

    #[test]
    fn empty_update_request_is_detected() {
        assert!(UpdateProgressItemRequest::default().is_empty());
        assert!(!UpdateProgressItemRequest::notes("").is_empty());

        let json = serde_json::to_value(UpdateProgressItemRequest::status(
            ProgressStatus::Blocked,
        ))
        .unwrap();
        assert_eq!(json, serde_json::json!({ "status": "blocked" }));
    }

    #[test]
    fn progress_dashboard_counts_live_items() {
        let items = vec![
            item(ProgressStatus::Completed, &[true, true]),
            item(ProgressStatus::InProgress, &[true, false, false]),
            item(ProgressStatus::Blocked, &[]),
        ];
        let dashboard = ProgressDashboard::from_items(&items);

        assert_eq!(dashboard.total_items, 3);
        assert_eq!(dashboard.by_status.completed, 1);
        assert_eq!(dashboard.by_status.in_progress, 1);
        assert_eq!(dashboard.by_status.blocked, 1);
        assert_eq!(dashboard.by_status.total(), 3);
        assert_eq!(dashboard.total_subtasks, 5);
        assert_eq!(dashboard.completed_subtasks, 3);
        assert_eq!(dashboard.completion_percentage, 33);
    }

    #[test]
    fn timeline_step_tolerates_missing_optionals() {
        let step: TimelineStep = serde_json::from_value(serde_json::json!({
            "id": "step-01",
            "title": "Check passport",
            "description": "",
            "category": "visa",
            "priority": "high",
            "is_completed": false
        }))
        .unwrap();
        assert!(step.required_documents.is_empty());
        assert_eq!(step.due_date, None);
    }

    #[test]
    fn comparison_route_round_trips_hyphenated_ids() {
        let route = comparison_route(ORIGIN, DESTINATION);
        assert_eq!(route, "phoenix-to-peak-district");
        assert_eq!(parse_comparison_route(&route), Some((ORIGIN, DESTINATION)));
        assert_eq!(
            parse_comparison_route("peak-district-to-phoenix"),
            Some(("peak-district", "phoenix"))
        );
        assert_eq!(parse_comparison_route("phoenix"), None);
        assert_eq!(parse_comparison_route("-to-phoenix"), None);
    }
}
