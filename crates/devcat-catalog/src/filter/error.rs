//! Error types for user-supplied filter values.

use thiserror::Error;

/// A specialized Result type for filter value parsing.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while turning user input into a [`FilterState`](super::FilterState).
///
/// Evaluating a filter never fails; these only arise at the input boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The sort order name is not one of the supported orders.
    #[error("invalid sort order: {value} (expected price-asc, price-desc, newest or relevant)")]
    InvalidSort {
        /// The unrecognized value.
        value: String,
    },

    /// The lower bound of a price window is above the upper bound.
    #[error("invalid price range: minimum {min} is greater than maximum {max}")]
    InvalidPriceRange {
        /// Requested lower bound.
        min: u64,
        /// Requested upper bound.
        max: u64,
    },
}

impl FilterError {
    /// Creates an invalid sort error.
    pub fn invalid_sort(value: impl Into<String>) -> Self {
        FilterError::InvalidSort {
            value: value.into(),
        }
    }
}
