//! Read-only pages about the two ends of the move: housing markets and the
//! location comparison

use std::sync::Arc;

use relocate_types::{HousingMarket, LocationProfile, RelocationComparison, DESTINATION, ORIGIN};

use super::logged;
use crate::api::RelocateApi;

/// Housing page: the origin and destination markets side by side
pub struct HousingView {
    api: Arc<dyn RelocateApi>,
    origin: Option<HousingMarket>,
    destination: Option<HousingMarket>,
}

impl HousingView {
    pub fn new(api: Arc<dyn RelocateApi>) -> Self {
        Self {
            api,
            origin: None,
            destination: None,
        }
    }

    pub async fn load(&mut self) -> bool {
        let fetched = tokio::try_join!(self.api.housing(ORIGIN), self.api.housing(DESTINATION));

        match logged("load housing markets", fetched) {
            Some((origin, destination)) => {
                self.origin = Some(origin);
                self.destination = Some(destination);
                true
            }
            None => false,
        }
    }

    pub fn origin(&self) -> Option<&HousingMarket> {
        self.origin.as_ref()
    }

    pub fn destination(&self) -> Option<&HousingMarket> {
        self.destination.as_ref()
    }

    pub fn market(&self, location_id: &str) -> Option<&HousingMarket> {
        [&self.origin, &self.destination]
            .into_iter()
            .flatten()
            .find(|m| m.location_id == location_id)
    }
}

/// Location page: both profiles plus the point-by-point comparison
pub struct LocationsView {
    api: Arc<dyn RelocateApi>,
    origin: Option<LocationProfile>,
    destination: Option<LocationProfile>,
    comparison: Option<RelocationComparison>,
}

impl LocationsView {
    pub fn new(api: Arc<dyn RelocateApi>) -> Self {
        Self {
            api,
            origin: None,
            destination: None,
            comparison: None,
        }
    }

    pub async fn load(&mut self) -> bool {
        let fetched = tokio::try_join!(
            self.api.location(ORIGIN),
            self.api.location(DESTINATION),
            self.api.comparison(ORIGIN, DESTINATION),
        );

        match logged("load locations", fetched) {
            Some((origin, destination, comparison)) => {
                tracing::debug!(
                    "Locations refreshed: {} comparison points",
                    comparison.points.len()
                );
                self.origin = Some(origin);
                self.destination = Some(destination);
                self.comparison = Some(comparison);
                true
            }
            None => false,
        }
    }

    pub fn origin(&self) -> Option<&LocationProfile> {
        self.origin.as_ref()
    }

    pub fn destination(&self) -> Option<&LocationProfile> {
        self.destination.as_ref()
    }

    pub fn comparison(&self) -> Option<&RelocationComparison> {
        self.comparison.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fake::FakeApi;

    #[tokio::test]
    async fn housing_loads_both_markets() {
        let api = Arc::new(FakeApi::new());
        let mut view = HousingView::new(api);

        assert!(view.origin().is_none());
        assert!(view.load().await);
        assert_eq!(view.origin().unwrap().currency, "USD");
        assert_eq!(view.destination().unwrap().areas.len(), 2);
        assert_eq!(view.market(DESTINATION).unwrap().currency, "GBP");
        assert!(view.market("london").is_none());
    }

    #[tokio::test]
    async fn failed_housing_load_keeps_markets() {
        let api = Arc::new(FakeApi::new());
        let mut view = HousingView::new(api.clone());
        view.load().await;

        api.set_failing(true);
        assert!(!view.load().await);
        assert!(view.destination().is_some());
    }

    #[tokio::test]
    async fn locations_load_profiles_and_comparison() {
        let api = Arc::new(FakeApi::new());
        let mut view = LocationsView::new(api.clone());

        assert!(view.load().await);
        assert_eq!(view.origin().unwrap().name, "Phoenix");
        assert_eq!(view.destination().unwrap().country, "United Kingdom");
        assert_eq!(view.comparison().unwrap().points[0].aspect, "climate");
        assert_eq!(api.reads(), 3);
    }

    #[tokio::test]
    async fn failed_locations_load_leaves_view_empty() {
        let api = Arc::new(FakeApi::new());
        api.set_failing(true);
        let mut view = LocationsView::new(api);

        assert!(!view.load().await);
        assert!(view.origin().is_none());
        assert!(view.comparison().is_none());
    }
}
