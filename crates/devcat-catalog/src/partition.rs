//! Ready-now carve-out.
//!
//! When no location, bedrooms or type constraint is active, ready developments
//! in the primary region are shown in their own section and removed from the
//! main grid. The section is drawn from the full catalog so it does not move
//! with the price window or sort order.

use std::collections::HashSet;

use serde::Serialize;

use crate::filter::FilterState;
use crate::model::{Development, DevelopmentStatus};
use crate::regions::Regions;

/// The two result sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Partition<'a> {
    /// Filtered, sorted developments not shown in the ready-now section.
    pub main_grid: Vec<&'a Development>,
    /// Ready developments in the primary region, in catalog order.
    pub ready_now: Vec<&'a Development>,
}

/// Selects the ready-now developments from the full catalog.
pub fn ready_now<'a>(catalog: &'a [Development], regions: &Regions) -> Vec<&'a Development> {
    catalog
        .iter()
        .filter(|dev| dev.status == DevelopmentStatus::Ready && regions.is_primary(&dev.region))
        .collect()
}

/// Splits the sorted, filtered set into the main grid and the ready-now section.
///
/// If `filters` does not allow the ready-now section, it is empty and `sorted`
/// is returned unchanged as the main grid. Otherwise every development whose
/// id appears in the ready-now section is removed from the main grid.
pub fn partition<'a>(
    catalog: &'a [Development],
    sorted: Vec<&'a Development>,
    filters: &FilterState,
    regions: &Regions,
) -> Partition<'a> {
    if !filters.allows_ready_now() {
        return Partition {
            main_grid: sorted,
            ready_now: Vec::new(),
        };
    }

    let ready_now = ready_now(catalog, regions);
    let ready_ids: HashSet<&str> = ready_now.iter().map(|dev| dev.id.as_str()).collect();
    let main_grid = sorted
        .into_iter()
        .filter(|dev| !ready_ids.contains(dev.id.as_str()))
        .collect();

    Partition {
        main_grid,
        ready_now,
    }
}
