//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands are split by whether they need the catalog: config, completions
//! and help run without touching it, everything else loads it first.

use crate::cli::{Cli, Commands, ConfigCommands, Shell, SortField};
use crate::commands::config::Config;
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that run without loading the catalog.
#[allow(async_fn_in_trait)]
pub trait StandaloneCommand {
    /// Execute the command.
    async fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that operate on the catalog.
#[allow(async_fn_in_trait)]
pub trait CatalogCommand {
    /// Execute the command with the loaded configuration.
    async fn execute(&self, ctx: &CommandContext, config: &Config) -> Result<()>;
}

/// Commands that don't need the catalog.
pub enum StandaloneDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> StandaloneDispatch<'a> {
    /// Try to create a standalone dispatch from the CLI command.
    /// Returns None if the command needs the catalog.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl StandaloneCommand for StandaloneDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command).await,
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("devcat - development catalog browser");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
async fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
        Some(ConfigCommands::Edit) => commands::config::execute_edit(ctx).await,
    }
}

/// Commands that operate on the catalog.
pub enum CatalogDispatch<'a> {
    List {
        location: &'a Option<String>,
        types: &'a [String],
        bedrooms: Option<u32>,
        min_price: Option<u64>,
        max_price: Option<u64>,
        sort: Option<SortField>,
    },
    Facets,
    Browse,
}

impl<'a> CatalogDispatch<'a> {
    /// Create a catalog dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::List {
                location,
                types,
                bedrooms,
                min_price,
                max_price,
                sort,
            }) => Some(Self::List {
                location,
                types,
                bedrooms: *bedrooms,
                min_price: *min_price,
                max_price: *max_price,
                sort: *sort,
            }),
            Some(Commands::Facets) => Some(Self::Facets),
            Some(Commands::Browse) => Some(Self::Browse),
            _ => None,
        }
    }
}

impl CatalogCommand for CatalogDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext, config: &Config) -> Result<()> {
        match self {
            Self::List {
                location,
                types,
                bedrooms,
                min_price,
                max_price,
                sort,
            } => {
                let opts = commands::list::ListOptions {
                    location: (*location).clone(),
                    types: types.to_vec(),
                    bedrooms: *bedrooms,
                    min_price: *min_price,
                    max_price: *max_price,
                    sort: *sort,
                };
                commands::list::execute(ctx, &opts, config).await
            }
            Self::Facets => commands::facets::execute(ctx, config).await,
            Self::Browse => commands::browse::execute(ctx, config).await,
        }
    }
}
