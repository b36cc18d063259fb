//! Filter evaluation against catalog developments.
//!
//! This module provides the [`FilterEvaluator`] for deciding whether a
//! development passes a [`FilterState`].
//!
//! # Example
//!
//! ```
//! use devcat_catalog::filter::{FilterEvaluator, FilterState, TypeClassifier};
//!
//! let filters = FilterState {
//!     bedrooms: Some(3),
//!     ..FilterState::neutral()
//! };
//! let classifier = TypeClassifier::standard();
//! let evaluator = FilterEvaluator::new(&filters, &classifier);
//!
//! let developments = vec![];
//! assert!(evaluator.filter_items(&developments).is_empty());
//! ```

use super::classifier::TypeClassifier;
use super::state::{FilterState, PRICE_CEILING};
use crate::model::Development;

/// Evaluates a filter state against developments.
///
/// Each active facet must pass (AND). Evaluation is pure and never fails:
/// malformed data makes a development fail the facet instead.
#[derive(Debug)]
pub struct FilterEvaluator<'a> {
    filters: &'a FilterState,
    classifier: &'a TypeClassifier,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates a new filter evaluator.
    ///
    /// # Arguments
    ///
    /// * `filters` - The filter state to evaluate
    /// * `classifier` - Rules used for the type facet
    pub fn new(filters: &'a FilterState, classifier: &'a TypeClassifier) -> Self {
        Self {
            filters,
            classifier,
        }
    }

    /// Returns true if the development passes every active facet.
    pub fn matches(&self, dev: &Development) -> bool {
        self.matches_location(dev)
            && self.matches_price(dev)
            && self.matches_bedrooms(dev)
            && self.matches_type(dev)
    }

    /// Filters a slice of developments, preserving catalog order.
    pub fn filter_items<'b>(&self, developments: &'b [Development]) -> Vec<&'b Development> {
        developments.iter().filter(|dev| self.matches(dev)).collect()
    }

    /// Location facet: city, country, or region slug equality.
    fn matches_location(&self, dev: &Development) -> bool {
        let Some(location) = self.filters.location.as_deref() else {
            return true;
        };

        dev.location.city == location
            || dev.location.country.as_deref() == Some(location)
            || dev.region == region_slug(location)
    }

    /// Price facet: the entry price must fit under the window's upper bound.
    ///
    /// The lower bound of the window is not compared. An upper bound at the
    /// slider ceiling means "any price".
    fn matches_price(&self, dev: &Development) -> bool {
        let max = self.filters.price_range.1;
        max >= PRICE_CEILING || dev.price_range.min <= max
    }

    /// Bedrooms facet: the largest unit must have at least the requested count.
    fn matches_bedrooms(&self, dev: &Development) -> bool {
        let Some(requested) = self.filters.bedrooms else {
            return true;
        };

        match parse_max_bedrooms(&dev.specs.bedrooms_range) {
            Some(max) => max >= requested,
            None => {
                tracing::trace!(
                    id = %dev.id,
                    bedrooms_range = %dev.specs.bedrooms_range,
                    "unparsable bedrooms range, excluding"
                );
                false
            }
        }
    }

    fn matches_type(&self, dev: &Development) -> bool {
        self.filters.types.is_empty() || self.classifier.matches_any(dev, &self.filters.types)
    }
}

/// Extracts the upper bedroom bound from a bedrooms range.
///
/// `"3"` yields 3 and `"2-4"` yields 4. Only a range with exactly one `-`
/// is split; anything else is read whole, so `"1-2-3"` yields 1. Leading
/// whitespace is skipped and parsing stops at the first non-digit, so
/// `"4 quartos"` yields 4. A digit run too long for `u32` saturates. Returns
/// `None` when no digits are found.
pub fn parse_max_bedrooms(range: &str) -> Option<u32> {
    let parts: Vec<&str> = range.split('-').collect();
    let upper = match parts.as_slice() {
        [_, upper] => *upper,
        _ => range,
    };

    let digits: String = upper
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

/// Turns a facet value into a region identifier: lower-cased, spaces to hyphens.
pub fn region_slug(value: &str) -> String {
    value.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
