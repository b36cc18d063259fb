//! Development list output formatting.

use devcat_catalog::{CatalogResults, Development, FilterState};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{
    display_name, format_location, format_price, paint_status, status_label, truncate_str,
};

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct ResultsOutput<'a> {
    pub filters: &'a FilterState,
    pub result_count: usize,
    pub ready_now: Vec<DevelopmentOutput<'a>>,
    pub main_grid: Vec<DevelopmentOutput<'a>>,
}

/// JSON output structure for a single development.
#[derive(Serialize)]
pub struct DevelopmentOutput<'a> {
    pub id: &'a str,
    pub slug: &'a str,
    pub name: &'a str,
    pub status: &'static str,
    pub region: &'a str,
    pub city: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<&'a str>,
    pub price_min: u64,
    pub price_max: u64,
    pub bedrooms: &'a str,
    pub tags: &'a [String],
}

impl<'a> From<&'a Development> for DevelopmentOutput<'a> {
    fn from(dev: &'a Development) -> Self {
        Self {
            id: &dev.id,
            slug: &dev.slug,
            name: display_name(dev),
            status: dev.status.as_str(),
            region: &dev.region,
            city: &dev.location.city,
            country: dev.location.country.as_deref(),
            price_min: dev.price_range.min,
            price_max: dev.price_range.max,
            bedrooms: &dev.specs.bedrooms_range,
            tags: &dev.tags,
        }
    }
}

/// Formats engine results as JSON.
pub fn format_results_json(
    results: &CatalogResults<'_>,
    filters: &FilterState,
) -> Result<String, serde_json::Error> {
    let output = ResultsOutput {
        filters,
        result_count: results.result_count,
        ready_now: results.ready_now.iter().map(|&d| d.into()).collect(),
        main_grid: results.main_grid.iter().map(|&d| d.into()).collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats engine results as a table: the ready-now section first, then the main grid.
pub fn format_results_table(results: &CatalogResults<'_>, use_colors: bool) -> String {
    if results.is_empty() {
        return "No developments found.\n".to_string();
    }

    let mut output = String::new();

    if !results.ready_now.is_empty() {
        push_heading(&mut output, "Ready to move in", use_colors);
        push_rows(&mut output, &results.ready_now, use_colors);
        output.push('\n');
    }

    let heading = match results.result_count {
        1 => "1 development".to_string(),
        n => format!("{n} developments"),
    };
    push_heading(&mut output, &heading, use_colors);
    if results.main_grid.is_empty() {
        output.push_str("No other developments match.\n");
    } else {
        push_rows(&mut output, &results.main_grid, use_colors);
    }

    output
}

fn push_heading(output: &mut String, heading: &str, use_colors: bool) {
    if use_colors {
        output.push_str(&format!("{}\n", heading.bold()));
    } else {
        output.push_str(heading);
        output.push('\n');
    }
}

fn push_rows(output: &mut String, devs: &[&Development], use_colors: bool) {
    let header = format!(
        "{:<28} {:<10} {:<24} {:>16} {:<6}",
        "Name", "Status", "Location", "From", "Beds"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for dev in devs {
        // pad before coloring so escape codes don't break alignment
        let status = format!("{:<10}", status_label(dev.status));
        let status = paint_status(dev.status, &status, use_colors);

        let line = format!(
            "{:<28} {} {:<24} {:>16} {:<6}",
            truncate_str(display_name(dev), 28),
            status,
            truncate_str(&format_location(dev), 24),
            format_price(dev.price_range.min),
            dev.specs.bedrooms_range,
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }
}
