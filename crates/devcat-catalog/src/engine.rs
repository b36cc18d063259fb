//! The filter → sort → partition pipeline.
//!
//! [`evaluate`] runs the pipeline once for a given filter state.
//! [`CatalogEngine`] owns a catalog and a [`FilterController`] and memoizes the
//! result for the current committed state.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::controller::FilterController;
use crate::facets::extract_location_facets;
use crate::filter::{FilterEvaluator, FilterState, TypeClassifier};
use crate::model::Development;
use crate::partition::partition;
use crate::regions::Regions;
use crate::sort::sort_developments;
use crate::Catalog;

/// What the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogResults<'a> {
    /// Sorted developments for the main grid, without ready-now entries.
    pub main_grid: Vec<&'a Development>,
    /// Promotional ready-now section. Empty when suppressed.
    pub ready_now: Vec<&'a Development>,
    /// Number of developments passing the filters.
    pub result_count: usize,
}

impl CatalogResults<'_> {
    /// Returns true if nothing is shown in either section.
    pub fn is_empty(&self) -> bool {
        self.main_grid.is_empty() && self.ready_now.is_empty()
    }
}

/// Runs filter, sort and partition over a catalog.
///
/// Both sections come out of a single pass, so a caller never observes one
/// updated without the other.
pub fn evaluate<'a>(
    catalog: &'a [Development],
    filters: &FilterState,
    regions: &Regions,
    classifier: &TypeClassifier,
) -> CatalogResults<'a> {
    let evaluator = FilterEvaluator::new(filters, classifier);
    let mut filtered = evaluator.filter_items(catalog);
    let result_count = filtered.len();

    sort_developments(&mut filtered, filters.sort);
    let sections = partition(catalog, filtered, filters, regions);

    tracing::debug!(
        catalog = catalog.len(),
        matched = result_count,
        main_grid = sections.main_grid.len(),
        ready_now = sections.ready_now.len(),
        sort = %filters.sort,
        "evaluated catalog filters"
    );

    CatalogResults {
        main_grid: sections.main_grid,
        ready_now: sections.ready_now,
        result_count,
    }
}

/// Cached pipeline output, as catalog positions.
#[derive(Debug, Clone)]
struct Memo {
    filters: FilterState,
    main_grid: Vec<usize>,
    ready_now: Vec<usize>,
    result_count: usize,
}

/// A catalog together with its filter controller.
///
/// The catalog is fixed for the engine's lifetime, so the committed filter
/// state alone keys the memo.
///
/// # Example
///
/// ```
/// use devcat_catalog::{Catalog, CatalogEngine};
///
/// let mut engine = CatalogEngine::new(Catalog::new());
/// engine.controller_mut().set_bedrooms(Some(2));
///
/// let results = engine.results();
/// assert_eq!(results.result_count, 0);
/// assert!(engine.facets().is_empty());
/// ```
#[derive(Debug)]
pub struct CatalogEngine {
    catalog: Catalog,
    regions: Regions,
    classifier: TypeClassifier,
    controller: FilterController,
    facets: Vec<String>,
    memo: Option<Memo>,
}

impl CatalogEngine {
    /// Creates an engine with the default regions and the standard type classifier.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_settings(catalog, Regions::default(), TypeClassifier::standard())
    }

    /// Creates an engine with explicit regions and type classifier.
    pub fn with_settings(catalog: Catalog, regions: Regions, classifier: TypeClassifier) -> Self {
        let facets = extract_location_facets(&catalog.developments, &regions);

        let mut seen = HashSet::with_capacity(catalog.developments.len());
        for dev in &catalog.developments {
            if !seen.insert(dev.id.as_str()) {
                tracing::warn!(id = %dev.id, "duplicate development id in catalog");
            }
        }

        Self {
            catalog,
            regions,
            classifier,
            controller: FilterController::new(),
            facets,
            memo: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Location facet values, extracted once at construction.
    pub fn facets(&self) -> &[String] {
        &self.facets
    }

    pub fn controller(&self) -> &FilterController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FilterController {
        &mut self.controller
    }

    /// Returns true if the memo matches the current committed state.
    pub fn is_memoized(&self) -> bool {
        self.memo
            .as_ref()
            .is_some_and(|memo| memo.filters == *self.controller.committed())
    }

    /// Results for the committed state. Recomputed only when it changed.
    pub fn results(&mut self) -> CatalogResults<'_> {
        if !self.is_memoized() {
            self.memo = Some(self.compute_memo());
        }

        let developments = &self.catalog.developments;
        let resolve = |indices: &[usize]| -> Vec<&Development> {
            indices.iter().filter_map(|&i| developments.get(i)).collect()
        };

        match &self.memo {
            Some(memo) => CatalogResults {
                main_grid: resolve(&memo.main_grid),
                ready_now: resolve(&memo.ready_now),
                result_count: memo.result_count,
            },
            None => evaluate(
                developments,
                self.controller.committed(),
                &self.regions,
                &self.classifier,
            ),
        }
    }

    /// Results for an arbitrary state, e.g. a drawer draft preview. Not memoized.
    pub fn preview(&self, filters: &FilterState) -> CatalogResults<'_> {
        evaluate(
            &self.catalog.developments,
            filters,
            &self.regions,
            &self.classifier,
        )
    }

    fn compute_memo(&self) -> Memo {
        let filters = self.controller.committed().clone();
        let results = self.preview(&filters);

        // Keyed by address, not id: ids are not guaranteed unique.
        let positions: HashMap<*const Development, usize> = self
            .catalog
            .developments
            .iter()
            .enumerate()
            .map(|(index, dev)| (dev as *const Development, index))
            .collect();
        let index_of = |devs: &[&Development]| -> Vec<usize> {
            devs.iter()
                .filter_map(|&dev| positions.get(&(dev as *const Development)).copied())
                .collect()
        };

        Memo {
            main_grid: index_of(&results.main_grid),
            ready_now: index_of(&results.ready_now),
            result_count: results.result_count,
            filters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{SortOrder, TypeToken};
    use crate::model::DevelopmentStatus;
    use crate::test_helpers::{ids, make_development};

    fn catalog() -> Catalog {
        let mut developments: Vec<Development> = (0..8)
            .map(|i| make_development(&format!("d{i}"), 7 - i))
            .collect();
        developments[5].status = DevelopmentStatus::Ready;
        developments[5].region = "region-a".to_string();
        developments[2].location.city = "Porto Belo".to_string();
        developments[2].price_range.min = 400_000;
        Catalog::from_developments(developments)
    }

    #[test]
    fn test_evaluate_neutral_returns_full_catalog_in_order() {
        let catalog = catalog();
        let results = evaluate(
            &catalog.developments,
            &FilterState::neutral(),
            &Regions::default(),
            &TypeClassifier::standard(),
        );

        assert_eq!(results.result_count, 8);
        assert_eq!(ids(&results.ready_now), ["d5"]);
        assert_eq!(
            ids(&results.main_grid),
            ["d7", "d6", "d4", "d3", "d2", "d1", "d0"]
        );
    }

    #[test]
    fn test_engine_results_follow_committed_state() {
        let mut engine = CatalogEngine::new(catalog());
        engine
            .controller_mut()
            .set_location(Some("Porto Belo".to_string()));

        let results = engine.results();
        assert_eq!(ids(&results.main_grid), ["d2"]);
        assert!(results.ready_now.is_empty());
        assert_eq!(results.result_count, 1);
    }

    #[test]
    fn test_engine_memoizes_until_committed_changes() {
        let mut engine = CatalogEngine::new(catalog());
        assert!(!engine.is_memoized());

        let first = ids(&engine.results().main_grid);
        assert!(engine.is_memoized());
        let second = ids(&engine.results().main_grid);
        assert_eq!(first, second);

        engine.controller_mut().set_sort(SortOrder::PriceAsc);
        assert!(!engine.is_memoized());
        assert_eq!(engine.results().main_grid[0].id, "d2");
    }

    #[test]
    fn test_staging_does_not_invalidate_memo() {
        let mut engine = CatalogEngine::new(catalog());
        let before = ids(&engine.results().main_grid);

        engine.controller_mut().open_drawer();
        engine
            .controller_mut()
            .stage_toggle_type(TypeToken::Casa)
            .unwrap();

        assert!(engine.is_memoized());
        assert_eq!(ids(&engine.results().main_grid), before);
    }

    #[test]
    fn test_preview_of_draft() {
        let mut engine = CatalogEngine::new(catalog());
        engine.controller_mut().open_drawer();
        engine
            .controller_mut()
            .stage(|draft| draft.price_range = (0, 500_000))
            .unwrap();

        let draft = engine.controller().staged().unwrap().clone();
        let preview = engine.preview(&draft);
        assert_eq!(ids(&preview.main_grid), ["d2"]);
        assert_eq!(ids(&preview.ready_now), ["d5"]);
        assert_eq!(preview.result_count, 1);
    }

    #[test]
    fn test_memoized_results_keep_duplicate_ids_apart() {
        let mut first = make_development("x", 0);
        first.name = "first".to_string();
        let mut second = make_development("x", 1);
        second.name = "second".to_string();
        let mut engine = CatalogEngine::new(Catalog::from_developments(vec![first, second]));

        fn names(results: &CatalogResults<'_>) -> Vec<String> {
            results.main_grid.iter().map(|d| d.name.clone()).collect()
        }

        let expected = names(&evaluate(
            &engine.catalog().developments,
            &FilterState::neutral(),
            &Regions::default(),
            &TypeClassifier::standard(),
        ));
        assert_eq!(expected, ["first", "second"]);

        assert_eq!(names(&engine.results()), expected);
        // second call is served from the memo
        assert!(engine.is_memoized());
        assert_eq!(names(&engine.results()), expected);
    }

    #[test]
    fn test_facets_extracted_once() {
        let engine = CatalogEngine::new(catalog());
        assert_eq!(engine.facets(), ["Itapema", "Porto Belo"]);
    }

    #[test]
    fn test_results_is_empty() {
        let mut engine = CatalogEngine::new(catalog());
        engine.controller_mut().set_location(Some("Miami".to_string()));
        let results = engine.results();
        assert!(results.is_empty());
        assert_eq!(results.result_count, 0);
    }
}
