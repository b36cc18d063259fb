use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use dispatch::{CatalogCommand, CatalogDispatch, StandaloneCommand, StandaloneDispatch};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(json) => eprintln!("{json}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(exit_status(&e))
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    if let Some(dispatch) = StandaloneDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx).await;
    }

    let config = load_config()?;
    let ctx = ctx.with_config(&config);

    match CatalogDispatch::from_cli(cli) {
        Some(dispatch) => dispatch.execute(&ctx, &config).await,
        None => Ok(()),
    }
}

/// Log level implied by the global flags. `RUST_LOG` takes precedence.
fn default_log_filter(cli: &Cli) -> &'static str {
    if cli.verbose {
        "devcat=debug,devcat_catalog=debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    }
}

/// Sends tracing output to stderr so stdout stays clean for tables and JSON.
fn init_tracing(cli: &Cli) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_filter(cli).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::CatalogStore(_) => "CATALOG_ERROR",
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::Controller(_) => "DRAWER_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Interactive(_) => "INTERACTIVE_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the process exit status for an error.
fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Filter(_) => 1,
        CommandError::Controller(_) => 1,
        CommandError::Interactive(_) => 1,
        CommandError::Json(_) => 1,
        CommandError::Io(_) => 3,
        CommandError::CatalogStore(_) => 5,
        CommandError::Config(_) => 5,
    }
}
