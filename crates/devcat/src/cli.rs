//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the devcat CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use devcat_catalog::SortOrder;

/// devcat - Browse and filter a real-estate development catalog
#[derive(Parser, Debug)]
#[command(name = "devcat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Catalog file (default: from config, then the XDG data dir)
    #[arg(long, global = true, env = "DEVCAT_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List developments matching the filters
    #[command(alias = "l")]
    List {
        /// Location facet (city or country)
        #[arg(short, long)]
        location: Option<String>,

        /// Property type: casa, flat, garden, cobertura, apto (repeatable)
        #[arg(short = 't', long = "type", action = clap::ArgAction::Append)]
        types: Vec<String>,

        /// Minimum number of bedrooms
        #[arg(short, long)]
        bedrooms: Option<u32>,

        /// Lower bound of the price window
        #[arg(long)]
        min_price: Option<u64>,

        /// Upper bound of the price window (entry price must fit under it)
        #[arg(long)]
        max_price: Option<u64>,

        /// Sort order (default: from config, then relevant)
        #[arg(short, long, value_enum)]
        sort: Option<SortField>,
    },

    /// List location facet values
    #[command(alias = "f")]
    Facets,

    /// Interactively browse the catalog with a filter bar and a filter drawer
    #[command(alias = "b")]
    Browse,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sort orders accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    PriceAsc,
    PriceDesc,
    Newest,
    Relevant,
}

impl From<SortField> for SortOrder {
    fn from(field: SortField) -> Self {
        match field {
            SortField::PriceAsc => SortOrder::PriceAsc,
            SortField::PriceDesc => SortOrder::PriceDesc,
            SortField::Newest => SortOrder::Newest,
            SortField::Relevant => SortOrder::Relevant,
        }
    }
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open config in $EDITOR
    Edit,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
