//! Designated regions that the engine treats specially.

use serde::{Deserialize, Serialize};

/// Default region whose ready developments form the ready-now section.
pub const DEFAULT_PRIMARY_REGION: &str = "region-a";

/// Default region whose developments are faceted by country instead of city.
pub const DEFAULT_INTERNATIONAL_REGION: &str = "international";

/// Region identifiers with special meaning for facets and the ready-now section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Regions {
    /// Region whose `ready` developments are promoted to the ready-now section.
    pub primary: String,

    /// Region whose location facet is the country (falling back to the city).
    pub international: String,
}

impl Default for Regions {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_REGION.to_string(),
            international: DEFAULT_INTERNATIONAL_REGION.to_string(),
        }
    }
}

impl Regions {
    /// Creates a region configuration with explicit identifiers.
    pub fn new(primary: impl Into<String>, international: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            international: international.into(),
        }
    }

    pub fn is_primary(&self, region: &str) -> bool {
        self.primary == region
    }

    pub fn is_international(&self, region: &str) -> bool {
        self.international == region
    }
}
