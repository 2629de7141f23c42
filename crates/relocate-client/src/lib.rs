//! Client for the Relocate Me API
//!
//! - [`RelocateApi`]: one async method per endpoint, implemented over HTTP by
//!   [`HttpApi`]
//! - [`views`]: per-page view state following the refetch-after-write protocol
//! - [`ChecklistOverlay`]: visa document checkboxes that never leave the client
//! - [`Session`]: the local login gate

pub mod api;
pub mod checklist;
pub mod error;
pub mod http;
pub mod session;
pub mod views;

#[cfg(test)]
mod fake;

pub use api::RelocateApi;
pub use checklist::{ChecklistOverlay, DocumentKey};
pub use error::{ClientError, Result};
pub use http::{HttpApi, DEFAULT_API_URL};
pub use session::Session;
pub use views::{
    DashboardView, HousingView, JobsView, LocationsView, LogisticsView, ProgressView,
    ResourcesView, TimelineView, VisaView,
};
