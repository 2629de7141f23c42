//! Built-in reference data
//!
//! The relocation plan, visa routes, job board, places, resource links and
//! logistics providers are fixed for the Phoenix to Peak District move.
//! Only task progress is stored in the database (see `db`).

mod directory;
mod jobs;
mod places;
mod progress;
mod timeline;
mod visa;

use std::collections::BTreeMap;

use relocate_types::{
    parse_comparison_route, HousingMarket, JobListing, JobSector, LocationProfile,
    LogisticsProvider, Priority, RelocationComparison, ResourceLink, TimelineStep, VisaType,
};

/// Initial definition of a progress item, inserted once into the database
#[derive(Debug, Clone)]
pub struct ProgressSeed {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub priority: Priority,
    pub subtasks: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub timeline: Vec<TimelineStep>,
    pub progress_seeds: Vec<ProgressSeed>,
    pub visa_types: Vec<VisaType>,
    pub jobs: Vec<JobListing>,
    pub job_sectors: Vec<JobSector>,
    pub locations: Vec<LocationProfile>,
    pub housing: Vec<HousingMarket>,
    pub comparisons: Vec<RelocationComparison>,
    pub resources: Vec<ResourceLink>,
    pub logistics: Vec<LogisticsProvider>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            timeline: timeline::steps(),
            progress_seeds: progress::seeds(),
            visa_types: visa::visa_types(),
            jobs: jobs::listings(),
            job_sectors: jobs::sectors(),
            locations: places::locations(),
            housing: places::housing_markets(),
            comparisons: places::comparisons(),
            resources: directory::resources(),
            logistics: directory::logistics_providers(),
        }
    }

    pub fn step(&self, id: &str) -> Option<&TimelineStep> {
        self.timeline.iter().find(|s| s.id == id)
    }

    pub fn visa_by_slug(&self, slug: &str) -> Option<&VisaType> {
        let slug = slug.trim().to_lowercase();
        self.visa_types
            .iter()
            .find(|v| v.slug() == slug || v.id == slug)
    }

    pub fn location(&self, id: &str) -> Option<&LocationProfile> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn housing_market(&self, location_id: &str) -> Option<&HousingMarket> {
        self.housing.iter().find(|h| h.location_id == location_id)
    }

    /// Comparison for a route such as "phoenix-to-peak-district"
    pub fn comparison(&self, route: &str) -> Option<&RelocationComparison> {
        let (origin, destination) = parse_comparison_route(route)?;
        self.comparisons
            .iter()
            .find(|c| c.origin == origin && c.destination == destination)
    }

    /// Documents of every visa route merged per category, duplicates removed
    pub fn document_checklist(&self) -> BTreeMap<String, Vec<String>> {
        let mut merged: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for visa in &self.visa_types {
            for (category, documents) in &visa.required_documents {
                let entry = merged.entry(category.clone()).or_default();
                for doc in documents {
                    if !entry.contains(doc) {
                        entry.push(doc.clone());
                    }
                }
            }
        }
        merged
    }

    pub fn resources_by_category(&self) -> BTreeMap<String, Vec<ResourceLink>> {
        group_by_category(&self.resources, |r| &r.category)
    }

    pub fn logistics_by_category(&self) -> BTreeMap<String, Vec<LogisticsProvider>> {
        group_by_category(&self.logistics, |p| &p.category)
    }
}

pub fn group_by_category<T, F>(items: &[T], category: F) -> BTreeMap<String, Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> &String,
{
    let mut grouped: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for item in items {
        grouped
            .entry(category(item).clone())
            .or_default()
            .push(item.clone());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn timeline_has_thirty_four_unique_steps() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.timeline.len(), 34);

        let ids: HashSet<_> = catalog.timeline.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), 34);
        assert!(catalog.timeline.iter().all(|s| !s.is_completed));
    }

    #[test]
    fn timeline_covers_the_core_categories() {
        let catalog = Catalog::builtin();
        let categories: HashSet<_> = catalog
            .timeline
            .iter()
            .map(|s| s.category.as_str())
            .collect();
        for expected in ["visa", "housing", "employment", "logistics"] {
            assert!(categories.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn progress_seeds_have_subtasks() {
        let catalog = Catalog::builtin();
        assert!(!catalog.progress_seeds.is_empty());
        assert!(catalog.progress_seeds.iter().all(|s| !s.subtasks.is_empty()));
    }

    #[test]
    fn visa_lookup_by_slug_or_id() {
        let catalog = Catalog::builtin();
        let first = &catalog.visa_types[0];
        assert_eq!(catalog.visa_by_slug(&first.slug()), Some(first));
        assert_eq!(catalog.visa_by_slug(&first.id), Some(first));
        assert!(catalog.visa_by_slug("tourist-visa").is_none());
    }

    #[test]
    fn visa_routes_share_document_categories() {
        let catalog = Catalog::builtin();
        let shared = catalog
            .visa_types
            .iter()
            .filter(|v| v.required_documents.contains_key("identity"))
            .count();
        assert!(shared >= 2);
    }

    #[test]
    fn checklist_merges_without_duplicates() {
        let catalog = Catalog::builtin();
        let checklist = catalog.document_checklist();
        for docs in checklist.values() {
            let unique: HashSet<_> = docs.iter().collect();
            assert_eq!(unique.len(), docs.len());
        }
        let largest = catalog
            .visa_types
            .iter()
            .map(|v| v.required_documents["identity"].len())
            .max()
            .unwrap();
        assert!(checklist["identity"].len() >= largest);
    }

    #[test]
    fn jobs_have_unique_ids_and_featured_entries() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.jobs.len());
        assert!(catalog.jobs.iter().any(|j| j.featured));
    }

    #[test]
    fn places_are_looked_up_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.location("peak-district").unwrap().name, "Peak District");
        assert_eq!(catalog.housing_market("phoenix").unwrap().currency, "USD");
        assert!(catalog.location("london").is_none());
        assert!(catalog.housing_market("london").is_none());
    }

    #[test]
    fn comparison_only_in_the_direction_of_the_move() {
        let catalog = Catalog::builtin();
        let comparison = catalog.comparison("phoenix-to-peak-district").unwrap();
        assert_eq!(comparison.destination, "peak-district");
        assert!(catalog.comparison("peak-district-to-phoenix").is_none());
        assert!(catalog.comparison("phoenix").is_none());
    }

    #[test]
    fn job_sectors_cover_the_board() {
        let catalog = Catalog::builtin();
        let sectors: HashSet<_> = catalog.job_sectors.iter().map(|s| s.sector.as_str()).collect();
        for category in ["healthcare", "technology", "engineering"] {
            assert!(sectors.contains(category), "missing {}", category);
        }
    }

    #[test]
    fn grouping_preserves_every_entry() {
        let catalog = Catalog::builtin();
        let grouped = catalog.resources_by_category();
        let count: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(count, catalog.resources.len());

        let grouped = catalog.logistics_by_category();
        let count: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(count, catalog.logistics.len());
    }

    proptest! {
        #[test]
        fn grouping_keeps_order_within_a_category(raw in proptest::collection::vec((0u8..4, any::<u16>()), 0..50)) {
            let items: Vec<(String, u16)> = raw.into_iter().map(|(c, v)| (format!("cat-{}", c), v)).collect();
            let grouped = group_by_category(&items, |(cat, _)| cat);
            prop_assert_eq!(grouped.values().map(Vec::len).sum::<usize>(), items.len());
            for (cat, group) in &grouped {
                let expected: Vec<_> = items.iter().filter(|(c, _)| c == cat).cloned().collect();
                prop_assert_eq!(group, &expected);
            }
        }
    }
}
