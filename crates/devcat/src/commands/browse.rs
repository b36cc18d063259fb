//! Browse command implementation.
//!
//! An interactive session over the catalog with two ways of editing filters:
//!
//! 1. Filter bar: every edit is committed immediately and the results refresh.
//! 2. Filter drawer: edits go to a draft. The committed results stay as they
//!    are until the draft is applied; dismissing throws the draft away and
//!    clearing resets every facet and returns to the configured sort.

use std::io::{self, IsTerminal};

use devcat_catalog::filter::{price_window, PRICE_CEILING};
use devcat_catalog::{CatalogEngine, FilterController, FilterState, SortOrder, TypeToken};
use dialoguer::{Input, MultiSelect, Select};
use owo_colors::OwoColorize;

use super::config::Config;
use super::{load_engine, CommandContext, CommandError, Result};
use crate::output::format_results_table;
use crate::output::helpers::format_price;

/// Bedroom minimums offered by the selector.
const BEDROOM_CHOICES: [u32; 4] = [1, 2, 3, 4];

/// A single-facet filter edit, independent of where it is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEdit {
    Location(Option<String>),
    Types(Vec<TypeToken>),
    Bedrooms(Option<u32>),
    PriceRange((u64, u64)),
    Sort(SortOrder),
}

impl FilterEdit {
    /// Applies the edit to a filter state in place.
    pub fn apply_to(self, state: &mut FilterState) {
        match self {
            FilterEdit::Location(location) => state.location = location,
            FilterEdit::Types(types) => state.types = types,
            FilterEdit::Bedrooms(bedrooms) => state.bedrooms = bedrooms,
            FilterEdit::PriceRange(range) => state.price_range = range,
            FilterEdit::Sort(sort) => state.sort = sort,
        }
    }

    /// Applies the edit straight to the committed state.
    pub fn commit(self, controller: &mut FilterController) {
        match self {
            FilterEdit::Location(location) => controller.set_location(location),
            FilterEdit::Types(types) => controller.set_types(types),
            FilterEdit::Bedrooms(bedrooms) => controller.set_bedrooms(bedrooms),
            FilterEdit::PriceRange(range) => controller.set_price_range(range),
            FilterEdit::Sort(sort) => controller.set_sort(sort),
        }
    }

    /// Applies the edit to the drawer draft.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Controller` if the drawer is closed.
    pub fn stage(self, controller: &mut FilterController) -> Result<()> {
        controller.stage(|draft| self.apply_to(draft))?;
        Ok(())
    }
}

/// Facets that can be edited from either the bar or the drawer.
#[derive(Debug, Clone, Copy)]
enum Facet {
    Location,
    Types,
    Bedrooms,
    Price,
    Sort,
}

const FACETS: [(Facet, &str); 5] = [
    (Facet::Location, "Location"),
    (Facet::Types, "Property type"),
    (Facet::Bedrooms, "Bedrooms"),
    (Facet::Price, "Price"),
    (Facet::Sort, "Sort"),
];

/// Drawer outcome chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawerAction {
    Apply,
    Dismiss,
    Clear,
}

/// Executes the browse command.
///
/// # Errors
///
/// Returns an error if stdin is not a terminal, the catalog cannot be loaded,
/// or a prompt fails.
pub async fn execute(ctx: &CommandContext, config: &Config) -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(CommandError::Interactive(
            "browse needs an interactive terminal; use 'devcat list' instead".to_string(),
        ));
    }

    let mut engine = load_engine(ctx, config).await?;
    let facets = engine.facets().to_vec();

    loop {
        print_results(ctx, &mut engine);

        let mut items: Vec<&str> = FACETS.iter().map(|(_, label)| *label).collect();
        items.extend(["Open filters drawer", "Clear filters", "Quit"]);

        let choice = Select::new()
            .with_prompt("Filter bar")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;

        match choice {
            Some(i) if i < FACETS.len() => {
                let committed = engine.controller().committed().clone();
                if let Some(edit) = prompt_edit(FACETS[i].0, &committed, &facets)? {
                    edit.commit(engine.controller_mut());
                }
            }
            Some(i) if i == FACETS.len() => run_drawer(ctx, &mut engine, &facets)?,
            Some(i) if i == FACETS.len() + 1 => engine.controller_mut().clear(),
            _ => break,
        }
    }

    Ok(())
}

/// Runs the drawer until the user applies, dismisses or clears.
fn run_drawer(ctx: &CommandContext, engine: &mut CatalogEngine, facets: &[String]) -> Result<()> {
    engine.controller_mut().open_drawer();

    loop {
        let draft = engine.controller_mut().staged_mut()?.clone();
        let preview_count = engine.preview(&draft).result_count;

        if !ctx.quiet {
            println!();
            print_heading(ctx, "Filters (draft)");
            println!("{}", describe_filters(&draft));
        }

        let mut items: Vec<String> = FACETS.iter().map(|(_, label)| label.to_string()).collect();
        items.push(format!("Apply ({preview_count} results)"));
        items.push("Dismiss".to_string());
        items.push("Clear".to_string());

        let choice = Select::new()
            .with_prompt("Filter drawer")
            .items(&items)
            .default(FACETS.len())
            .interact_opt()
            .map_err(prompt_error)?;

        let action = match choice {
            Some(i) if i < FACETS.len() => {
                if let Some(edit) = prompt_edit(FACETS[i].0, &draft, facets)? {
                    edit.stage(engine.controller_mut())?;
                }
                continue;
            }
            Some(i) if i == FACETS.len() => DrawerAction::Apply,
            Some(i) if i == FACETS.len() + 2 => DrawerAction::Clear,
            _ => DrawerAction::Dismiss,
        };

        finish_drawer(engine.controller_mut(), action)?;
        return Ok(());
    }
}

/// Ends the drawer session with the chosen action.
fn finish_drawer(controller: &mut FilterController, action: DrawerAction) -> Result<()> {
    match action {
        DrawerAction::Apply => {
            controller.apply()?;
        }
        DrawerAction::Dismiss => {
            controller.dismiss();
        }
        DrawerAction::Clear => controller.clear(),
    }
    Ok(())
}

/// Prompts for a new value of one facet, starting from `current`.
///
/// Returns `None` if the user backed out or entered an invalid value.
fn prompt_edit(facet: Facet, current: &FilterState, facets: &[String]) -> Result<Option<FilterEdit>> {
    let edit = match facet {
        Facet::Location => {
            let mut items = vec!["Any location"];
            items.extend(facets.iter().map(String::as_str));
            let default = current
                .location
                .as_ref()
                .and_then(|loc| facets.iter().position(|f| f == loc))
                .map_or(0, |i| i + 1);

            Select::new()
                .with_prompt("Location")
                .items(&items)
                .default(default)
                .interact_opt()
                .map_err(prompt_error)?
                .map(|i| FilterEdit::Location(i.checked_sub(1).map(|i| facets[i].clone())))
        }
        Facet::Types => {
            let known = TypeToken::KNOWN;
            let items: Vec<&str> = known.iter().map(TypeToken::as_str).collect();
            let defaults: Vec<bool> = known
                .iter()
                .map(|t| current.types.contains(t))
                .collect();

            MultiSelect::new()
                .with_prompt("Property type (space to toggle)")
                .items(&items)
                .defaults(&defaults)
                .interact_opt()
                .map_err(prompt_error)?
                .map(|chosen| {
                    FilterEdit::Types(
                        chosen
                            .into_iter()
                            .map(|i| known[i].clone())
                            .collect(),
                    )
                })
        }
        Facet::Bedrooms => {
            let mut items = vec!["Any".to_string()];
            items.extend(BEDROOM_CHOICES.iter().map(|n| format!("{n}+")));
            let default = current
                .bedrooms
                .and_then(|b| BEDROOM_CHOICES.iter().position(|&n| n == b))
                .map_or(0, |i| i + 1);

            Select::new()
                .with_prompt("Bedrooms")
                .items(&items)
                .default(default)
                .interact_opt()
                .map_err(prompt_error)?
                .map(|i| FilterEdit::Bedrooms(i.checked_sub(1).map(|i| BEDROOM_CHOICES[i])))
        }
        Facet::Price => {
            let (current_min, current_max) = current.price_range;
            let min: u64 = Input::new()
                .with_prompt("Minimum price")
                .default(current_min)
                .interact_text()
                .map_err(prompt_error)?;
            let max: u64 = Input::new()
                .with_prompt("Maximum price")
                .default(current_max)
                .interact_text()
                .map_err(prompt_error)?;

            match price_window(min, max) {
                Ok(window) => Some(FilterEdit::PriceRange(window)),
                Err(e) => {
                    eprintln!("{e}");
                    None
                }
            }
        }
        Facet::Sort => {
            let items: Vec<&str> = SortOrder::ALL.iter().map(|s| s.as_str()).collect();
            let default = SortOrder::ALL
                .iter()
                .position(|&s| s == current.sort)
                .unwrap_or(0);

            Select::new()
                .with_prompt("Sort")
                .items(&items)
                .default(default)
                .interact_opt()
                .map_err(prompt_error)?
                .map(|i| FilterEdit::Sort(SortOrder::ALL[i]))
        }
    };

    Ok(edit)
}

fn print_results(ctx: &CommandContext, engine: &mut CatalogEngine) {
    if ctx.quiet {
        return;
    }

    let summary = describe_filters(engine.controller().committed());
    let results = engine.results();

    println!();
    print_heading(ctx, "Filters");
    println!("{summary}\n");
    print!("{}", format_results_table(&results, ctx.use_colors));
    println!();
}

fn print_heading(ctx: &CommandContext, heading: &str) {
    if ctx.use_colors {
        println!("{}", heading.green().bold());
    } else {
        println!("{heading}");
    }
}

/// One-line summary of the active constraints.
pub fn describe_filters(state: &FilterState) -> String {
    let mut parts = Vec::new();

    if let Some(location) = &state.location {
        parts.push(format!("location: {location}"));
    }
    if !state.types.is_empty() {
        let types: Vec<&str> = state.types.iter().map(|t| t.as_str()).collect();
        parts.push(format!("type: {}", types.join(", ")));
    }
    if let Some(bedrooms) = state.bedrooms {
        parts.push(format!("bedrooms: {bedrooms}+"));
    }
    let (min, max) = state.price_range;
    if (min, max) != (0, PRICE_CEILING) {
        parts.push(format!("price: {} - {}", format_price(min), format_price(max)));
    }
    if parts.is_empty() {
        parts.push("no filters".to_string());
    }
    parts.push(format!("sort: {}", state.sort));

    parts.join(" | ")
}

fn prompt_error(e: dialoguer::Error) -> CommandError {
    CommandError::Interactive(e.to_string())
}
