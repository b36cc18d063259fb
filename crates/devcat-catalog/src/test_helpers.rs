//! Shared fixtures for unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{Coordinates, Development, DevelopmentStatus, Location, PriceRange, Specs, Unit};

pub(crate) fn make_development(id: &str, order: i64) -> Development {
    Development {
        id: id.to_string(),
        slug: format!("dev-{id}"),
        name: format!("Development {id}"),
        developer: None,
        status: DevelopmentStatus::UnderConstruction,
        region: "region-b".to_string(),
        location: Location {
            city: "Itapema".to_string(),
            country: None,
            neighborhood: "Centro".to_string(),
            coordinates: Coordinates::default(),
        },
        price_range: PriceRange {
            min: 1_000_000,
            max: 2_000_000,
        },
        specs: Specs {
            bedrooms_range: "3".to_string(),
            ..Specs::default()
        },
        tags: vec![],
        units: vec![],
        order,
        created_at: day(1),
    }
}

pub(crate) fn make_unit(unit_type: &str) -> Unit {
    Unit {
        unit_type: unit_type.to_string(),
        area: None,
        bedrooms: None,
    }
}

/// Midnight UTC on the given day of January 2025.
pub(crate) fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, d, 0, 0, 0).unwrap()
}

pub(crate) fn ids(devs: &[&Development]) -> Vec<String> {
    devs.iter().map(|d| d.id.clone()).collect()
}
