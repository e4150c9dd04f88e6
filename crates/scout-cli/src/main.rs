//! Scout CLI - Command-line interface for lead enrichment.

use anyhow::Context;
use clap::Parser;
use scout_cli::commands;
use scout_cli::{Cli, Command, Config, Formatter};
use scout_store::SqliteStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (log to stderr, RUST_LOG wins over --verbose)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config_path = cli.config.as_ref().map(PathBuf::from);
    let config = Config::load(config_path.as_deref()).context("Failed to load configuration")?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Open store
    let db_path = config.database_path()?;
    let store = SqliteStore::new(&db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    // Handle commands
    match cli.command {
        Command::Add(args) => {
            commands::execute_add(args, &store, &formatter)?;
        }
        Command::Status(args) => {
            commands::execute_status(args, &store, &formatter)?;
        }
        Command::Enrich(args) => {
            let enricher = commands::build_enricher(&config)?;
            commands::execute_enrich(args, &enricher, &store, &formatter).await?;
        }
        Command::EnrichAll(args) => {
            let enricher = commands::build_enricher(&config)?;
            commands::execute_enrich_all(args, &enricher, &store, &formatter).await?;
        }
    }

    Ok(())
}

