//! Output formatting utilities for the devcat CLI.
//!
//! This module provides functions for formatting data as tables or JSON:
//!
//! - [`developments`] - Result sections (ready-now and main grid)
//! - [`facets`] - Location facet values
//! - [`helpers`] - Common formatting utilities (truncation, prices, statuses)

mod developments;
mod facets;
pub mod helpers;

pub use developments::{format_results_json, format_results_table};
pub use facets::{format_facets_json, format_facets_table};
