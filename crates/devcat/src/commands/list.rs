//! List command implementation.
//!
//! Lists developments from the catalog, filtered the same way the filter bar
//! does: every option is a desktop edit applied directly to the committed state.

use devcat_catalog::filter::{price_window, PRICE_CEILING};
use devcat_catalog::{suggest_facet, FilterController, SortOrder, TypeToken};

use super::config::Config;
use super::{load_engine, CommandContext, Result};
use crate::cli::SortField;
use crate::output::{format_results_json, format_results_table};

/// Options for the list command.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Location facet (city or country).
    pub location: Option<String>,
    /// Property type tokens.
    pub types: Vec<String>,
    /// Minimum number of bedrooms.
    pub bedrooms: Option<u32>,
    /// Lower bound of the price window.
    pub min_price: Option<u64>,
    /// Upper bound of the price window.
    pub max_price: Option<u64>,
    /// Sort order.
    pub sort: Option<SortField>,
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the price window is inverted.
pub async fn execute(ctx: &CommandContext, opts: &ListOptions, config: &Config) -> Result<()> {
    let mut engine = load_engine(ctx, config).await?;

    apply_options(engine.controller_mut(), opts)?;

    if !ctx.quiet {
        warn_unknown_types(opts);
        if let Some(location) = &opts.location {
            let facets = engine.facets();
            if !facets.iter().any(|f| f == location) {
                if let Some(suggestion) = suggest_facet(location, facets) {
                    eprintln!("No location '{location}'. Did you mean '{suggestion}'?");
                }
            }
        }
    }

    let filters = engine.controller().committed().clone();
    let results = engine.results();

    if ctx.json_output {
        let output = format_results_json(&results, &filters)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_results_table(&results, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Applies list options to the committed state, one facet at a time.
///
/// Options that were not given leave their facet untouched, so a sort from
/// the config file survives a list without `--sort`.
pub fn apply_options(controller: &mut FilterController, opts: &ListOptions) -> Result<()> {
    if opts.location.is_some() {
        controller.set_location(opts.location.clone());
    }

    if !opts.types.is_empty() {
        controller.set_types(parse_types(&opts.types));
    }

    if opts.bedrooms.is_some() {
        controller.set_bedrooms(opts.bedrooms);
    }

    if opts.min_price.is_some() || opts.max_price.is_some() {
        let window = price_window(
            opts.min_price.unwrap_or(0),
            opts.max_price.unwrap_or(PRICE_CEILING),
        )?;
        controller.set_price_range(window);
    }

    if let Some(sort) = opts.sort {
        controller.set_sort(SortOrder::from(sort));
    }

    Ok(())
}

/// Parses type tokens, dropping repeats but keeping first-seen order.
fn parse_types(raw: &[String]) -> Vec<TypeToken> {
    let mut types: Vec<TypeToken> = Vec::with_capacity(raw.len());
    for token in raw.iter().map(|t| TypeToken::from_token(t)) {
        if !types.contains(&token) {
            types.push(token);
        }
    }
    types
}

fn warn_unknown_types(opts: &ListOptions) {
    let known_tokens = TypeToken::KNOWN;
    let known: Vec<&str> = known_tokens.iter().map(TypeToken::as_str).collect();

    for token in parse_types(&opts.types) {
        if let TypeToken::Other(name) = token {
            eprintln!(
                "Unknown property type '{}' matches nothing. Known types: {}",
                name,
                known.join(", ")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandError;
    use devcat_catalog::FilterState;

    #[test]
    fn test_no_options_keeps_committed_state() {
        let mut controller = FilterController::new();
        controller.set_sort(SortOrder::Newest);
        let revision = controller.revision();

        apply_options(&mut controller, &ListOptions::default()).unwrap();

        assert_eq!(controller.committed().sort, SortOrder::Newest);
        assert_eq!(controller.revision(), revision);
    }

    #[test]
    fn test_all_options_applied() {
        let mut controller = FilterController::new();
        let opts = ListOptions {
            location: Some("Itapema".to_string()),
            types: vec!["Garden".to_string(), "casa".to_string()],
            bedrooms: Some(3),
            min_price: None,
            max_price: Some(2_000_000),
            sort: Some(SortField::PriceAsc),
        };

        apply_options(&mut controller, &opts).unwrap();

        let expected = FilterState {
            location: Some("Itapema".to_string()),
            types: vec![TypeToken::Garden, TypeToken::Casa],
            bedrooms: Some(3),
            price_range: (0, 2_000_000),
            sort: SortOrder::PriceAsc,
            ..FilterState::neutral()
        };
        assert_eq!(controller.committed(), &expected);
    }

    #[test]
    fn test_min_price_only_keeps_ceiling() {
        let mut controller = FilterController::new();
        let opts = ListOptions {
            min_price: Some(500_000),
            ..ListOptions::default()
        };

        apply_options(&mut controller, &opts).unwrap();
        assert_eq!(controller.committed().price_range, (500_000, PRICE_CEILING));
    }

    #[test]
    fn test_inverted_price_window_rejected() {
        let mut controller = FilterController::new();
        let opts = ListOptions {
            min_price: Some(2_000_000),
            max_price: Some(1_000_000),
            ..ListOptions::default()
        };

        let result = apply_options(&mut controller, &opts);
        assert!(matches!(result, Err(CommandError::Filter(_))));
        assert!(controller.committed().is_neutral());
    }

    #[test]
    fn test_parse_types_dedups_case_insensitively() {
        let raw = vec![
            "flat".to_string(),
            "FLAT".to_string(),
            "loft".to_string(),
            "flat".to_string(),
        ];
        assert_eq!(
            parse_types(&raw),
            vec![TypeToken::Flat, TypeToken::Other("loft".to_string())]
        );
    }
}
