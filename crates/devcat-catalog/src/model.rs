//! Catalog data model.
//!
//! These types mirror the JSON documents produced by the catalog export. Field
//! names are camelCase on the wire and snake_case in Rust. Developments are
//! read-only as far as the filtering engine is concerned.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sales status of a development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentStatus {
    /// Pre-launch or launch phase.
    Launch,
    /// Construction finished, units ready to move in.
    Ready,
    /// Under construction.
    UnderConstruction,
}

impl DevelopmentStatus {
    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            DevelopmentStatus::Launch => "launch",
            DevelopmentStatus::Ready => "ready",
            DevelopmentStatus::UnderConstruction => "under_construction",
        }
    }
}

impl fmt::Display for DevelopmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic coordinates of a development.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Where a development is located.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// City name. Always populated.
    pub city: String,

    /// Country name. Only populated for developments in the international region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Neighborhood name.
    #[serde(default)]
    pub neighborhood: String,

    /// Map coordinates.
    #[serde(default)]
    pub coordinates: Coordinates,
}

/// Entry and top price of the units in a development.
///
/// `min <= max` is assumed to be enforced by whoever produced the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

/// Descriptive unit specifications for a development.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specs {
    /// Bedroom count, either a single number (`"3"`) or a range (`"2-4"`).
    #[serde(default)]
    pub bedrooms_range: String,

    /// Private area range, e.g. `"68-142 m²"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_range: Option<String>,

    /// Suite count range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suites_range: Option<String>,

    /// Parking spaces range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_range: Option<String>,
}

/// A sellable unit layout within a development.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Free-text unit type, e.g. `"GARDEN"` or `"COBERTURA DUPLEX"`.
    #[serde(rename = "type")]
    pub unit_type: String,

    /// Private area, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,

    /// Bedroom description, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<String>,
}

/// A real-estate development in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Development {
    /// Unique identifier.
    pub id: String,

    /// URL slug, unique within the catalog.
    pub slug: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Developer (construction company) name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,

    /// Sales status.
    pub status: DevelopmentStatus,

    /// Region identifier, e.g. `"region-a"` or `"international"`.
    pub region: String,

    pub location: Location,

    pub price_range: PriceRange,

    #[serde(default)]
    pub specs: Specs,

    /// Free-form classification tags (`"casas"`, `"flat"`, `"compacto"`, ...).
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub units: Vec<Unit>,

    /// Position in the default ("relevant") ordering. Lower sorts first.
    #[serde(default)]
    pub order: i64,

    /// Creation timestamp, used by the "newest" ordering.
    pub created_at: DateTime<Utc>,
}

impl Development {
    /// Returns true if the development carries the given tag (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns true if any unit type contains `needle`, ignoring case.
    ///
    /// `needle` is expected to be lower-case.
    pub fn has_unit_type_containing(&self, needle: &str) -> bool {
        self.units
            .iter()
            .any(|u| u.unit_type.to_lowercase().contains(needle))
    }
}
