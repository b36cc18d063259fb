//! Faceted filtering engine for real-estate development catalogs.
//!
//! This crate takes an in-memory catalog of developments and a filter state
//! and produces the ordered, deduplicated result sections shown to the user:
//!
//! - [`facets`] - location facet values for the selector
//! - [`filter`] - filter state, per-facet predicates, type classifier
//! - [`sort`] - the four result orderings
//! - [`partition`] - the ready-now carve-out
//! - [`controller`] - committed/staged filter state for the filter bar and drawer
//! - [`engine`] - the full pipeline, with memoization
//! - [`store`] - catalog file loading
//!
//! Everything except catalog loading is synchronous and infallible.

use serde::{Deserialize, Serialize};

pub mod controller;
pub mod engine;
pub mod facets;
pub mod filter;
pub mod model;
pub mod partition;
pub mod regions;
pub mod sort;
pub mod store;

#[cfg(test)]
mod test_helpers;

pub use controller::{ControllerError, DrawerState, FilterController};
pub use engine::{evaluate, CatalogEngine, CatalogResults};
pub use facets::{extract_location_facets, suggest_facet};
pub use filter::{FilterState, SortOrder, TypeToken, NEUTRAL_FILTER_STATE};
pub use model::{Development, DevelopmentStatus};
pub use regions::Regions;
pub use store::{CatalogStore, CatalogStoreError};

/// An immutable list of developments.
///
/// Loaded once per session and never modified by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Developments in catalog order.
    #[serde(default)]
    pub developments: Vec<Development>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from developments, keeping their order.
    pub fn from_developments(developments: Vec<Development>) -> Self {
        Self { developments }
    }

    pub fn len(&self) -> usize {
        self.developments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.developments.is_empty()
    }

    /// Finds a development by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Development> {
        self.developments.iter().find(|d| d.id == id)
    }

    /// Finds a development by slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Development> {
        self.developments.iter().find(|d| d.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_development;

    #[test]
    fn test_catalog_new_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_catalog_lookups() {
        let catalog =
            Catalog::from_developments(vec![make_development("1", 0), make_development("2", 1)]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_by_id("2").map(|d| d.order), Some(1));
        assert_eq!(catalog.find_by_slug("dev-1").map(|d| d.id.as_str()), Some("1"));
        assert!(catalog.find_by_id("3").is_none());
        assert!(catalog.find_by_slug("missing").is_none());
    }

    #[test]
    fn test_catalog_deserialize_minimal() {
        let catalog: Catalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.is_empty());
    }
}
