//! Location facet output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output structure for the facets command.
#[derive(Serialize)]
pub struct FacetsOutput<'a> {
    pub locations: &'a [String],
}

/// Formats location facets as JSON.
pub fn format_facets_json(facets: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&FacetsOutput { locations: facets })
}

/// Formats location facets as a one-per-line list.
pub fn format_facets_table(facets: &[String], use_colors: bool) -> String {
    if facets.is_empty() {
        return "No locations found.\n".to_string();
    }

    let mut output = String::new();
    let header = "Locations";
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(header);
        output.push('\n');
    }

    for facet in facets {
        output.push_str("  ");
        output.push_str(facet);
        output.push('\n');
    }

    output
}
