//! Facets command implementation.
//!
//! Prints the location facet values offered by the location selector.

use super::config::Config;
use super::{load_engine, CommandContext, Result};
use crate::output::{format_facets_json, format_facets_table};

/// Executes the facets command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub async fn execute(ctx: &CommandContext, config: &Config) -> Result<()> {
    let engine = load_engine(ctx, config).await?;

    if ctx.json_output {
        let output = format_facets_json(engine.facets())?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_facets_table(engine.facets(), ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
