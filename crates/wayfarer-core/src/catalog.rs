//! Destination catalog seam.
//!
//! The engine reads attraction and lodging records through the [`Catalog`]
//! trait and never mutates them. The shipped [`JsonCatalog`] loads an
//! immutable snapshot from a JSON file; deployments backed by a live
//! catalog service implement the same trait.

use std::path::Path;

use crate::error::{EngineError, Result};
use crate::models::Destination;

/// Category narrowing for catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Only lodging-category destinations
    Lodging,
    /// Everything except lodging
    Attractions,
}

/// Read-only query surface over destination records.
pub trait Catalog: Send + Sync {
    /// Returns the open destinations in a city matching the category filter
    /// and, when `personalities` is non-empty, at least one personality tag.
    fn open_destinations(
        &self,
        city: &str,
        filter: CategoryFilter,
        personalities: &[String],
    ) -> Result<Vec<Destination>>;

    /// Looks up a single destination by ID regardless of state.
    fn destination(&self, id: u64) -> Result<Option<Destination>>;
}

/// In-memory catalog backed by a JSON snapshot.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    destinations: Vec<Destination>,
}

impl JsonCatalog {
    /// Builds a catalog from already-loaded destination records.
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    /// Loads a catalog from a JSON file containing an array of destinations.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(&path).map_err(|e| EngineError::FileSystem {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        let destinations: Vec<Destination> = serde_json::from_str(&raw)?;
        Ok(Self { destinations })
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl Catalog for JsonCatalog {
    fn open_destinations(
        &self,
        city: &str,
        filter: CategoryFilter,
        personalities: &[String],
    ) -> Result<Vec<Destination>> {
        let matches = self
            .destinations
            .iter()
            .filter(|d| d.state == crate::models::DestinationState::Open)
            .filter(|d| d.city.eq_ignore_ascii_case(city))
            .filter(|d| match filter {
                CategoryFilter::Lodging => d.is_lodging(),
                CategoryFilter::Attractions => !d.is_lodging(),
            })
            .filter(|d| personalities.is_empty() || d.matches_personality(personalities))
            .cloned()
            .collect();
        Ok(matches)
    }

    fn destination(&self, id: u64) -> Result<Option<Destination>> {
        Ok(self.destinations.iter().find(|d| d.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use jiff::civil::time;
    use jiff::Timestamp;

    use super::*;
    use crate::models::{AffinityStat, DestinationState};

    fn destination(id: u64, city: &str, lodging: bool, tags: &[&str]) -> Destination {
        let mut affinities = BTreeMap::new();
        for tag in tags {
            affinities.insert(
                (*tag).to_string(),
                AffinityStat {
                    plan_count: 1,
                    visit_count: 0,
                },
            );
        }
        Destination {
            id,
            name: format!("Destination {id}"),
            city: city.to_string(),
            lowest_price: 10,
            highest_price: 20,
            opens_at: time(8, 0, 0, 0),
            closes_at: time(20, 0, 0, 0),
            visit_minutes: 60,
            rating: 4.0,
            view_count: 100,
            created_at: Timestamp::UNIX_EPOCH,
            categories: if lodging {
                vec!["lodging".to_string()]
            } else {
                vec!["museum".to_string()]
            },
            state: DestinationState::Open,
            latitude: 0.0,
            longitude: 0.0,
            affinities,
            recommended_windows: Vec::new(),
        }
    }

    #[test]
    fn test_category_filter_splits_lodging() {
        let catalog = JsonCatalog::new(vec![
            destination(1, "Hanoi", true, &[]),
            destination(2, "Hanoi", false, &["culture"]),
        ]);

        let lodging = catalog
            .open_destinations("Hanoi", CategoryFilter::Lodging, &[])
            .expect("query");
        assert_eq!(lodging.len(), 1);
        assert_eq!(lodging[0].id, 1);

        let attractions = catalog
            .open_destinations("Hanoi", CategoryFilter::Attractions, &[])
            .expect("query");
        assert_eq!(attractions.len(), 1);
        assert_eq!(attractions[0].id, 2);
    }

    #[test]
    fn test_personality_filter() {
        let catalog = JsonCatalog::new(vec![
            destination(1, "Hanoi", false, &["culture"]),
            destination(2, "Hanoi", false, &["food"]),
        ]);

        let tags = vec!["food".to_string()];
        let matches = catalog
            .open_destinations("Hanoi", CategoryFilter::Attractions, &tags)
            .expect("query");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 2);
    }

    #[test]
    fn test_non_open_destinations_are_hidden() {
        let mut closed = destination(1, "Hanoi", false, &[]);
        closed.state = DestinationState::Closed;
        let catalog = JsonCatalog::new(vec![closed.clone()]);

        let matches = catalog
            .open_destinations("Hanoi", CategoryFilter::Attractions, &[])
            .expect("query");
        assert!(matches.is_empty());

        // Direct lookup still finds it so callers can report why it failed.
        let found = catalog.destination(1).expect("lookup");
        assert_eq!(found, Some(closed));
    }

    #[test]
    fn test_city_match_is_case_insensitive() {
        let catalog = JsonCatalog::new(vec![destination(1, "Hanoi", false, &[])]);
        let matches = catalog
            .open_destinations("hanoi", CategoryFilter::Attractions, &[])
            .expect("query");
        assert_eq!(matches.len(), 1);
    }
}
