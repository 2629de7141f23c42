pub mod filter;
pub mod progress;
pub mod types;

pub use filter::{distinct, is_wildcard, JobFilter, WILDCARD};
pub use progress::{Completable, Completion};
pub use types::{
    comparison_route, parse_comparison_route, ComparisonPoint, DashboardOverview,
    FeaturedJobsResponse, HousingArea, HousingMarket, JobCategoriesResponse, JobListing,
    JobListingsResponse, JobOpportunitiesResponse, JobSector, LocationProfile, LogisticsProvider,
    Priority, ProgressDashboard, ProgressItem, ProgressItemsResponse, ProgressStatus,
    RelocationComparison, ResourceLink, StatusCounts, Subtask, SubtaskToggleRequest,
    TimelineResponse, TimelineStep, TimelineUpdateRequest, UpdateProgressItemRequest,
    UpdateResponse, VisaChecklistResponse, VisaRequirementsResponse, VisaType, DESTINATION,
    ORIGIN,
};
