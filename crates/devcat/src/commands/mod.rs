//! Command implementations for the devcat CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod browse;
pub mod completions;
pub mod config;
pub mod facets;
pub mod list;

use std::path::{Path, PathBuf};

use devcat_catalog::filter::{FilterError, TypeClassifier};
use devcat_catalog::{
    CatalogEngine, CatalogStore, CatalogStoreError, ControllerError, FilterController, FilterState,
};

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Catalog file error.
    #[error("catalog error: {0}")]
    CatalogStore(#[from] CatalogStoreError),

    /// Invalid filter input.
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// Filter drawer misuse.
    #[error("filter drawer error: {0}")]
    Controller(#[from] ControllerError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Interactive prompt error.
    #[error("interactive error: {0}")]
    Interactive(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Catalog path given on the command line or via `DEVCAT_CATALOG`.
    pub catalog: Option<PathBuf>,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
            catalog: cli.catalog.clone(),
        }
    }

    /// Applies config file preferences that the command line did not override.
    pub fn with_config(mut self, config: &Config) -> Self {
        if config.output.color == Some(false) {
            self.use_colors = false;
        }
        self
    }
}

/// Picks the catalog store: command line, then config file, then the XDG data dir.
///
/// Only the default location tolerates a missing file.
fn resolve_store(ctx: &CommandContext, config: &Config) -> Result<(CatalogStore, bool)> {
    if let Some(path) = &ctx.catalog {
        return Ok((CatalogStore::with_path(path), false));
    }
    if let Some(path) = &config.catalog {
        return Ok((CatalogStore::with_path(path), false));
    }
    Ok((CatalogStore::new()?, true))
}

/// Loads the catalog and builds an engine with the configured regions.
///
/// The committed state starts neutral except for the configured default sort.
pub async fn load_engine(ctx: &CommandContext, config: &Config) -> Result<CatalogEngine> {
    let (store, is_default) = resolve_store(ctx, config)?;

    if ctx.verbose {
        eprintln!("Loading catalog from {}", display_path(store.path()));
    }

    let catalog = if is_default {
        store.load_or_default_async().await?
    } else {
        store.load_async().await?
    };

    if catalog.is_empty() && !ctx.quiet && !ctx.json_output {
        eprintln!(
            "Catalog is empty. Pass --catalog <PATH> or place a catalog at {}",
            display_path(store.path())
        );
    }

    let mut engine =
        CatalogEngine::with_settings(catalog, config.regions.clone(), TypeClassifier::standard());

    // "Clear filters" returns to the configured sort, not to relevance.
    let defaults = FilterState {
        sort: config.default_sort()?,
        ..FilterState::neutral()
    };
    *engine.controller_mut() = FilterController::with_defaults(defaults);

    Ok(engine)
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
