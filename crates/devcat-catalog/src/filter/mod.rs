//! Faceted filtering for development catalogs.
//!
//! A [`FilterState`] holds one value per facet plus a sort order. The
//! [`FilterEvaluator`] decides, per development, whether every active facet
//! passes.
//!
//! # Facets
//!
//! ## Location
//! - City, country, or region slug equality with the chosen facet value
//!
//! ## Price
//! - The development's entry price must not exceed the window's upper bound
//!
//! ## Bedrooms
//! - The upper bound of the bedrooms range must reach the requested minimum
//!
//! ## Type
//! - `casa`, `flat`, `garden`, `cobertura`, `apto`, matched by a pluggable
//!   [`TypeClassifier`]; several tokens combine with OR
//!
//! # Example
//!
//! ```
//! use devcat_catalog::filter::{FilterEvaluator, FilterState, TypeClassifier, TypeToken};
//!
//! let filters = FilterState {
//!     types: vec![TypeToken::Casa, TypeToken::Garden],
//!     ..FilterState::neutral()
//! };
//! assert!(!filters.allows_ready_now());
//!
//! let classifier = TypeClassifier::standard();
//! let evaluator = FilterEvaluator::new(&filters, &classifier);
//! let developments = vec![];
//! let results = evaluator.filter_items(&developments);
//! assert!(results.is_empty());
//! ```

mod classifier;
mod error;
mod evaluator;
mod state;

pub use classifier::{TypeClassifier, TypeRule, FLAT_TAGS, HOUSE_TAG};
pub use error::{FilterError, FilterResult};
pub use evaluator::{parse_max_bedrooms, region_slug, FilterEvaluator};
pub use state::{price_window, FilterState, SortOrder, TypeToken, NEUTRAL_FILTER_STATE, PRICE_CEILING};
