//! Location facet extraction.
//!
//! The location selector offers one value per distinct city, except for the
//! international region where the country is offered instead. The resulting
//! list therefore mixes city and country names.

use std::collections::BTreeSet;

use strsim::levenshtein;

use crate::model::Development;
use crate::regions::Regions;

/// Maximum Levenshtein distance to consider a facet value as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Returns the location facet value for one development.
pub fn location_facet<'a>(dev: &'a Development, regions: &Regions) -> &'a str {
    if regions.is_international(&dev.region) {
        dev.location
            .country
            .as_deref()
            .unwrap_or(dev.location.city.as_str())
    } else {
        &dev.location.city
    }
}

/// Extracts the distinct location facet values, sorted ascending (byte order).
pub fn extract_location_facets(catalog: &[Development], regions: &Regions) -> Vec<String> {
    catalog
        .iter()
        .map(|dev| location_facet(dev, regions))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Finds the closest facet value to `query` using Levenshtein distance.
///
/// Comparison ignores case. Returns `None` for exact matches and for
/// candidates further than the suggestion threshold.
pub fn suggest_facet<'a>(query: &str, facets: &'a [String]) -> Option<&'a str> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = facets
        .iter()
        .filter(|name| !name.is_empty())
        .map(|name| (name.as_str(), levenshtein(&query_lower, &name.to_lowercase())))
        .min_by_key(|(_, d)| *d)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_development;

    fn dev_in(id: &str, region: &str, city: &str, country: Option<&str>) -> Development {
        let mut dev = make_development(id, 0);
        dev.region = region.to_string();
        dev.location.city = city.to_string();
        dev.location.country = country.map(str::to_string);
        dev
    }

    #[test]
    fn test_empty_catalog_yields_no_facets() {
        assert!(extract_location_facets(&[], &Regions::default()).is_empty());
    }

    #[test]
    fn test_facets_are_sorted_and_deduplicated() {
        let catalog = vec![
            dev_in("1", "region-a", "Itapema", None),
            dev_in("2", "region-a", "Balneario Camboriu", None),
            dev_in("3", "region-b", "Itapema", None),
            dev_in("4", "region-b", "Porto Belo", None),
        ];

        let facets = extract_location_facets(&catalog, &Regions::default());
        assert_eq!(facets, vec!["Balneario Camboriu", "Itapema", "Porto Belo"]);
    }

    #[test]
    fn test_international_uses_country_with_city_fallback() {
        let catalog = vec![
            dev_in("1", "international", "Orlando", Some("Estados Unidos")),
            dev_in("2", "international", "Lisboa", None),
            dev_in("3", "region-a", "Itapema", Some("Brasil")),
        ];

        let facets = extract_location_facets(&catalog, &Regions::default());
        assert_eq!(facets, vec!["Estados Unidos", "Itapema", "Lisboa"]);
    }

    #[test]
    fn test_facets_are_case_sensitive() {
        let catalog = vec![
            dev_in("1", "region-a", "itapema", None),
            dev_in("2", "region-a", "Itapema", None),
        ];

        let facets = extract_location_facets(&catalog, &Regions::default());
        assert_eq!(facets, vec!["Itapema", "itapema"]);
    }

    #[test]
    fn test_custom_international_region() {
        let catalog = vec![dev_in("1", "exterior", "Miami", Some("EUA"))];
        let regions = Regions::new("region-a", "exterior");

        assert_eq!(extract_location_facets(&catalog, &regions), vec!["EUA"]);
        assert_eq!(
            extract_location_facets(&catalog, &Regions::default()),
            vec!["Miami"]
        );
    }

    #[test]
    fn test_suggest_facet() {
        let facets = vec!["Itapema".to_string(), "Porto Belo".to_string()];

        assert_eq!(suggest_facet("Itapma", &facets), Some("Itapema"));
        assert_eq!(suggest_facet("porto belo", &facets), None);
        assert_eq!(suggest_facet("Florianopolis", &facets), None);
        assert_eq!(suggest_facet("anything", &[]), None);
    }
}
