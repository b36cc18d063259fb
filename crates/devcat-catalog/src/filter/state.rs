//! Filter state: the complete set of user-chosen facet constraints and sort order.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{FilterError, FilterResult};

/// Top of the price slider. The neutral price window is `(0, PRICE_CEILING)`.
///
/// A window whose upper bound is at or above the ceiling has no upper bound,
/// so developments priced above it still pass the neutral state.
pub const PRICE_CEILING: u64 = 30_000_000;

/// The neutral filter state: no constraint on any facet, default ordering.
///
/// This is the only place the defaults are declared. [`FilterState::default`]
/// and [`FilterState::neutral`] both return it.
pub const NEUTRAL_FILTER_STATE: FilterState = FilterState {
    status: Vec::new(),
    types: Vec::new(),
    bedrooms: None,
    price_range: (0, PRICE_CEILING),
    location: None,
    sort: SortOrder::Relevant,
};

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Ascending by entry price.
    PriceAsc,
    /// Descending by entry price.
    PriceDesc,
    /// Most recently created first.
    Newest,
    /// Catalog display order.
    #[default]
    Relevant,
}

impl SortOrder {
    /// All sort orders, in menu order.
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Relevant,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::Newest,
    ];

    /// Returns the wire name of the sort order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::Newest => "newest",
            SortOrder::Relevant => "relevant",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| FilterError::invalid_sort(s))
    }
}

/// A property-type facet token.
///
/// Tokens outside the known set are kept as [`TypeToken::Other`]. They are
/// accepted everywhere but only match if a classifier rule is registered for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeToken {
    /// Houses.
    Casa,
    /// Flats, compact units and studios.
    Flat,
    /// Garden units.
    Garden,
    /// Penthouses.
    Cobertura,
    /// Regular apartments (anything that is neither a house nor a flat).
    Apto,
    /// Unrecognized token.
    Other(String),
}

impl TypeToken {
    /// The tokens offered by the type selector.
    pub const KNOWN: [TypeToken; 5] = [
        TypeToken::Casa,
        TypeToken::Flat,
        TypeToken::Garden,
        TypeToken::Cobertura,
        TypeToken::Apto,
    ];

    /// Parses a token. Matching is case-insensitive; unknown tokens become `Other`.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        match token.to_ascii_lowercase().as_str() {
            "casa" => TypeToken::Casa,
            "flat" => TypeToken::Flat,
            "garden" => TypeToken::Garden,
            "cobertura" => TypeToken::Cobertura,
            "apto" => TypeToken::Apto,
            _ => TypeToken::Other(token.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TypeToken::Casa => "casa",
            TypeToken::Flat => "flat",
            TypeToken::Garden => "garden",
            TypeToken::Cobertura => "cobertura",
            TypeToken::Apto => "apto",
            TypeToken::Other(s) => s,
        }
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TypeToken {
    fn from(s: String) -> Self {
        TypeToken::from_token(&s)
    }
}

impl From<&str> for TypeToken {
    fn from(s: &str) -> Self {
        TypeToken::from_token(s)
    }
}

impl From<TypeToken> for String {
    fn from(token: TypeToken) -> Self {
        token.as_str().to_string()
    }
}

/// The complete filter and sort selection.
///
/// Every field always holds a value. "No constraint" is expressed by a neutral
/// value (`None`, an empty list, or the full price window), never by omission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Status constraint. Accepted and carried, not evaluated yet.
    pub status: Vec<String>,

    /// Property types; a development passes if it matches any of them.
    #[serde(rename = "type")]
    pub types: Vec<TypeToken>,

    /// Minimum bedroom count.
    pub bedrooms: Option<u32>,

    /// Inclusive `(lower, upper)` price window.
    pub price_range: (u64, u64),

    /// City or country facet value.
    pub location: Option<String>,

    pub sort: SortOrder,
}

impl Default for FilterState {
    fn default() -> Self {
        NEUTRAL_FILTER_STATE
    }
}

impl FilterState {
    /// Returns the neutral filter state.
    pub fn neutral() -> Self {
        NEUTRAL_FILTER_STATE
    }

    /// Returns true if every field holds its neutral value.
    pub fn is_neutral(&self) -> bool {
        *self == NEUTRAL_FILTER_STATE
    }

    /// Returns true if the ready-now section may be shown for this state.
    ///
    /// Only location, bedrooms and type constraints suppress it; price and sort do not.
    pub fn allows_ready_now(&self) -> bool {
        self.location.is_none() && self.bedrooms.is_none() && self.types.is_empty()
    }

    /// Hash of the full structure, usable as a memoization key.
    pub fn structural_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Builds a validated price window.
///
/// # Errors
///
/// Returns [`FilterError::InvalidPriceRange`] if `min > max`.
pub fn price_window(min: u64, max: u64) -> FilterResult<(u64, u64)> {
    if min > max {
        return Err(FilterError::InvalidPriceRange { min, max });
    }
    Ok((min, max))
}
