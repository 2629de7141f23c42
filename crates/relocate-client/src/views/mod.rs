//! Per-page view state
//!
//! Each view owns a local copy of the collections its page shows and is
//! rehydrated from the read endpoints. Mutations follow one protocol:
//!
//! 1. send the single-field change
//! 2. on success, refetch the whole owning collection
//! 3. derive every count from the fresh collection
//!
//! Nothing is patched locally ahead of the server. Any failure is logged and
//! the view keeps showing what it had. Methods return whether the view now
//! reflects the server, which callers are free to ignore.

pub mod dashboard;
pub mod directory;
pub mod jobs;
pub mod places;
pub mod progress;
pub mod timeline;
pub mod visa;

pub use dashboard::DashboardView;
pub use directory::{LogisticsView, ResourcesView};
pub use jobs::JobsView;
pub use places::{HousingView, LocationsView};
pub use progress::ProgressView;
pub use timeline::TimelineView;
pub use visa::VisaView;

use crate::error::ClientError;

/// Log a failed call and drop the error
pub(crate) fn logged<T>(action: &str, result: Result<T, ClientError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("Failed to {}: {}", action, e);
            None
        }
    }
}
