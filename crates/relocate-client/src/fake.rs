//! In-memory [`RelocateApi`] for view tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use relocate_types::{
    distinct, Completion, ComparisonPoint, DashboardOverview, HousingArea, HousingMarket,
    JobListing, JobListingsResponse, JobOpportunitiesResponse, JobSector, LocationProfile,
    LogisticsProvider, Priority, ProgressDashboard, ProgressItem, ProgressStatus,
    RelocationComparison, ResourceLink, Subtask, TimelineResponse, TimelineStep,
    TimelineUpdateRequest, UpdateProgressItemRequest, UpdateResponse, VisaType, DESTINATION,
    ORIGIN,
};

use crate::api::RelocateApi;
use crate::error::{ClientError, Result};

pub struct FakeApi {
    steps: Mutex<Vec<TimelineStep>>,
    items: Mutex<Vec<ProgressItem>>,
    visas: Vec<VisaType>,
    jobs: Vec<JobListing>,
    failing: AtomicBool,
    reads: AtomicUsize,
}

fn step(id: &str, category: &str, priority: Priority) -> TimelineStep {
    TimelineStep {
        id: id.to_string(),
        title: format!("Step {}", id),
        description: String::new(),
        category: category.to_string(),
        priority,
        is_completed: false,
        due_date: None,
        required_documents: vec![],
        estimated_cost: None,
        estimated_duration: None,
        notes: None,
        completed_at: None,
    }
}

fn item(id: &str, category: &str, subtasks: &[&str]) -> ProgressItem {
    ProgressItem {
        id: id.to_string(),
        title: format!("Item {}", id),
        description: String::new(),
        category: category.to_string(),
        priority: Priority::Medium,
        status: ProgressStatus::NotStarted,
        subtasks: subtasks
            .iter()
            .map(|task| Subtask {
                task: task.to_string(),
                completed: false,
            })
            .collect(),
        notes: String::new(),
        updated_at: Utc::now(),
    }
}

fn visa(id: &str, visa_type: &str, docs: Vec<(&str, Vec<&str>)>) -> VisaType {
    VisaType {
        id: id.to_string(),
        visa_type: visa_type.to_string(),
        fee: "£719".to_string(),
        processing_time: "3 weeks".to_string(),
        requirements: vec![],
        application_process: vec![],
        required_documents: docs
            .into_iter()
            .map(|(cat, list)| (cat.to_string(), list.into_iter().map(str::to_string).collect()))
            .collect(),
    }
}

fn job(id: &str, title: &str, company: &str, category: &str, job_type: &str) -> JobListing {
    JobListing {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: "Buxton, Derbyshire".to_string(),
        salary: "£35,000".to_string(),
        job_type: job_type.to_string(),
        category: category.to_string(),
        remote_work: false,
        requirements: vec![],
        description: String::new(),
        posted_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        application_url: "https://example.com/apply".to_string(),
        featured: id == "job-1",
    }
}

fn location(id: &str, name: &str, country: &str) -> LocationProfile {
    LocationProfile {
        id: id.to_string(),
        name: name.to_string(),
        region: String::new(),
        country: country.to_string(),
        population: String::new(),
        climate: String::new(),
        cost_of_living: String::new(),
        highlights: vec![],
        nearby_towns: vec![],
    }
}

fn market(location_id: &str, currency: &str, areas: &[&str]) -> HousingMarket {
    HousingMarket {
        location_id: location_id.to_string(),
        currency: currency.to_string(),
        average_rent: String::new(),
        average_price: String::new(),
        property_types: vec![],
        areas: areas
            .iter()
            .map(|name| HousingArea {
                name: name.to_string(),
                description: String::new(),
                average_rent: String::new(),
                average_price: String::new(),
                commute: String::new(),
            })
            .collect(),
        tips: vec![],
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            steps: Mutex::new(vec![
                step("step-01", "visa", Priority::High),
                step("step-02", "visa", Priority::Low),
                step("step-03", "housing", Priority::Medium),
            ]),
            items: Mutex::new(vec![
                item("visa-application", "visa", &["Gather documents", "Book biometrics"]),
                item("housing-search", "housing", &["Shortlist areas"]),
            ]),
            visas: vec![
                visa(
                    "skilled-worker",
                    "Skilled Worker Visa",
                    vec![
                        ("identity", vec!["Passport", "Photos"]),
                        ("financial", vec!["Bank statements"]),
                    ],
                ),
                visa(
                    "family",
                    "Family Visa",
                    vec![
                        ("identity", vec!["Passport"]),
                        ("relationship", vec!["Marriage certificate"]),
                    ],
                ),
            ],
            jobs: vec![
                job("job-1", "Software Engineer", "Peak Digital", "technology", "full-time"),
                job("job-2", "Staff Nurse", "NHS Derbyshire", "healthcare", "full-time"),
                job("job-3", "Civil Engineer", "Moorland Structures", "engineering", "contract"),
            ],
            failing: AtomicBool::new(false),
            reads: AtomicUsize::new(0),
        }
    }

    /// Make every subsequent call fail until switched back
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Status {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn read(&self) -> Result<()> {
        self.check()?;
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn not_found(what: &str) -> ClientError {
        ClientError::Status {
            status: 404,
            message: format!("not found: {}", what),
        }
    }
}

#[async_trait]
impl RelocateApi for FakeApi {
    async fn overview(&self) -> Result<DashboardOverview> {
        self.read()?;
        let steps = self.steps.lock().unwrap();
        let items = self.items.lock().unwrap();
        let completion = Completion::of(steps.iter());
        Ok(DashboardOverview {
            total_steps: completion.total,
            completed_steps: completion.completed,
            in_progress: items
                .iter()
                .filter(|i| i.status == ProgressStatus::InProgress)
                .count(),
            urgent_tasks: steps
                .iter()
                .filter(|s| !s.is_completed && s.priority == Priority::High)
                .count(),
        })
    }

    async fn timeline(&self) -> Result<TimelineResponse> {
        self.read()?;
        let steps = self.steps.lock().unwrap().clone();
        let completion = Completion::of(&steps);
        Ok(TimelineResponse {
            steps,
            total: completion.total,
            completed: completion.completed,
        })
    }

    async fn timeline_by_category(&self) -> Result<BTreeMap<String, Vec<TimelineStep>>> {
        self.read()?;
        let mut grouped: BTreeMap<String, Vec<TimelineStep>> = BTreeMap::new();
        for step in self.steps.lock().unwrap().iter() {
            grouped.entry(step.category.clone()).or_default().push(step.clone());
        }
        Ok(grouped)
    }

    async fn update_step(&self, update: &TimelineUpdateRequest) -> Result<UpdateResponse> {
        self.check()?;
        let mut steps = self.steps.lock().unwrap();
        let step = steps
            .iter_mut()
            .find(|s| s.id == update.step_id)
            .ok_or_else(|| Self::not_found(&update.step_id))?;
        step.is_completed = update.completed;
        step.completed_at = update.completed.then(Utc::now);
        if let Some(notes) = &update.notes {
            step.notes = Some(notes.clone());
        }
        Ok(UpdateResponse {
            success: true,
            message: format!("Step {} updated", update.step_id),
        })
    }

    async fn progress_items(
        &self,
        category: Option<&str>,
        status: Option<ProgressStatus>,
    ) -> Result<Vec<ProgressItem>> {
        self.read()?;
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| category.map_or(true, |c| i.category == c))
            .filter(|i| status.map_or(true, |s| i.status == s))
            .cloned()
            .collect())
    }

    async fn update_progress_item(
        &self,
        id: &str,
        update: &UpdateProgressItemRequest,
    ) -> Result<ProgressItem> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        if let Some(status) = update.status {
            item.status = status;
        }
        if let Some(notes) = &update.notes {
            item.notes = notes.clone();
        }
        if let Some(priority) = update.priority {
            item.priority = priority;
        }
        item.updated_at = Utc::now();
        Ok(item.clone())
    }

    async fn toggle_subtask(&self, id: &str, subtask_index: usize) -> Result<ProgressItem> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        let subtask = item.subtasks.get_mut(subtask_index).ok_or(ClientError::Status {
            status: 400,
            message: "subtask index out of range".to_string(),
        })?;
        subtask.completed = !subtask.completed;
        Ok(item.clone())
    }

    async fn progress_dashboard(&self) -> Result<ProgressDashboard> {
        self.read()?;
        Ok(ProgressDashboard::from_items(&self.items.lock().unwrap()))
    }

    async fn visa_requirements(&self) -> Result<Vec<VisaType>> {
        self.read()?;
        Ok(self.visas.clone())
    }

    async fn visa_details(&self, slug: &str) -> Result<VisaType> {
        self.read()?;
        self.visas
            .iter()
            .find(|v| v.slug() == slug || v.id == slug)
            .cloned()
            .ok_or_else(|| Self::not_found(slug))
    }

    async fn visa_checklist(&self) -> Result<BTreeMap<String, Vec<String>>> {
        self.read()?;
        let mut merged: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for visa in &self.visas {
            for (category, docs) in &visa.required_documents {
                let entry = merged.entry(category.clone()).or_default();
                for doc in docs {
                    if !entry.contains(doc) {
                        entry.push(doc.clone());
                    }
                }
            }
        }
        Ok(merged)
    }

    async fn job_listings(&self) -> Result<JobListingsResponse> {
        self.read()?;
        Ok(JobListingsResponse {
            jobs: self.jobs.clone(),
            total: self.jobs.len(),
            categories: distinct(&self.jobs, |j| j.category.as_str()),
            job_types: distinct(&self.jobs, |j| j.job_type.as_str()),
        })
    }

    async fn featured_jobs(&self) -> Result<Vec<JobListing>> {
        self.read()?;
        Ok(self.jobs.iter().filter(|j| j.featured).cloned().collect())
    }

    async fn job_categories(&self) -> Result<Vec<String>> {
        self.read()?;
        Ok(distinct(&self.jobs, |j| j.category.as_str()))
    }

    async fn job_opportunities(&self) -> Result<JobOpportunitiesResponse> {
        self.read()?;
        Ok(JobOpportunitiesResponse {
            opportunities: vec![JobSector {
                sector: "healthcare".to_string(),
                demand: "high".to_string(),
                salary_range: "£28,000 - £60,000".to_string(),
                major_employers: vec!["NHS Derbyshire".to_string()],
                sponsorship: true,
                notes: String::new(),
            }],
            total_listings: self.jobs.len(),
        })
    }

    async fn location(&self, id: &str) -> Result<LocationProfile> {
        self.read()?;
        match id {
            ORIGIN => Ok(location(ORIGIN, "Phoenix", "United States")),
            DESTINATION => Ok(location(DESTINATION, "Peak District", "United Kingdom")),
            other => Err(Self::not_found(other)),
        }
    }

    async fn housing(&self, location_id: &str) -> Result<HousingMarket> {
        self.read()?;
        match location_id {
            ORIGIN => Ok(market(ORIGIN, "USD", &["Tempe"])),
            DESTINATION => Ok(market(DESTINATION, "GBP", &["Bakewell", "Buxton"])),
            other => Err(Self::not_found(other)),
        }
    }

    async fn comparison(&self, origin: &str, destination: &str) -> Result<RelocationComparison> {
        self.read()?;
        if origin != ORIGIN || destination != DESTINATION {
            return Err(Self::not_found(destination));
        }
        Ok(RelocationComparison {
            origin: ORIGIN.to_string(),
            destination: DESTINATION.to_string(),
            points: vec![ComparisonPoint {
                aspect: "climate".to_string(),
                origin: "Hot and dry".to_string(),
                destination: "Mild and wet".to_string(),
                note: None,
            }],
        })
    }

    async fn resources(&self) -> Result<BTreeMap<String, Vec<ResourceLink>>> {
        self.read()?;
        let link = ResourceLink {
            name: "UK Visas and Immigration".to_string(),
            url: "https://www.gov.uk/browse/visas-immigration".to_string(),
            description: "Official visa guidance".to_string(),
            category: "government".to_string(),
        };
        Ok(BTreeMap::from([("government".to_string(), vec![link])]))
    }

    async fn logistics_providers(&self) -> Result<BTreeMap<String, Vec<LogisticsProvider>>> {
        self.read()?;
        let provider = LogisticsProvider {
            id: "movers-1".to_string(),
            name: "Atlantic Movers".to_string(),
            category: "international_movers".to_string(),
            description: "Door to door container shipping".to_string(),
            website: "https://example.com".to_string(),
            phone: None,
            estimated_cost: Some("$8,000-$12,000".to_string()),
        };
        Ok(BTreeMap::from([(
            "international_movers".to_string(),
            vec![provider],
        )]))
    }
}
