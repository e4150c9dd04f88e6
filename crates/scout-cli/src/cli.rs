//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use scout_domain::EnrichStatus;

/// Scout CLI - Enrich business leads with websites, Instagram, and decision-makers.
#[derive(Debug, Parser)]
#[command(name = "scout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SCOUT_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a pending lead
    Add(AddArgs),

    /// Enrich one lead and record its status
    Enrich(EnrichArgs),

    /// Enrich every lead that is not done yet, one at a time
    EnrichAll(EnrichAllArgs),

    /// List leads with their enrichment status
    Status(StatusArgs),
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Business name
    #[arg(short, long)]
    pub name: String,

    /// City
    #[arg(long)]
    pub city: String,

    /// State or region
    #[arg(short, long)]
    pub state: String,

    /// Lead id (defaults to the next free number)
    #[arg(long)]
    pub id: Option<String>,
}

/// Arguments for the enrich command.
#[derive(Debug, Parser)]
pub struct EnrichArgs {
    /// Lead id
    pub id: String,
}

/// Arguments for the enrich-all command.
#[derive(Debug, Parser)]
pub struct EnrichAllArgs {
    /// Pause between leads in milliseconds (overrides config)
    #[arg(short, long)]
    pub interval_ms: Option<u64>,

    /// Re-enrich leads that are already done
    #[arg(long)]
    pub include_done: bool,
}

/// Arguments for the status command.
#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Only show leads with this status
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,
}

/// Status argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StatusArg {
    /// Never enriched
    Pending,
    /// Enrichment in progress (or interrupted)
    Running,
    /// Enriched successfully
    Done,
    /// Last enrichment failed
    Error,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<StatusArg> for EnrichStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Pending => EnrichStatus::Pending,
            StatusArg::Running => EnrichStatus::Running,
            StatusArg::Done => EnrichStatus::Done,
            StatusArg::Error => EnrichStatus::Error,
        }
    }
}
