//! Top-level CLI argument types

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::fleet::FleetCommands;
use crate::cli::commands::init::InitArgs;
use crate::cli::commands::quote::QuoteCommands;
use crate::cli::commands::tax::TaxCommands;
use crate::cli::commands::truck::TruckCommands;

/// Truck Quote Toolkit - trip costing and quoting for owner-operators
#[derive(Parser, Debug)]
#[command(name = "tqt", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project with seeded truck and tax defaults
    Init(InitArgs),

    /// Inspect or update truck parameters
    #[command(subcommand)]
    Truck(TruckCommands),

    /// Inspect or update tax settings
    #[command(subcommand)]
    Tax(TaxCommands),

    /// Compute and manage trip quotes
    #[command(subcommand)]
    Quote(QuoteCommands),

    /// Fleet-level cost summaries
    #[command(subcommand)]
    Fleet(FleetCommands),
}

/// Output format for show/list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tables for lists, YAML for single records
    #[default]
    Auto,
    /// Bordered table
    Table,
    /// YAML document
    Yaml,
    /// JSON document
    Json,
}
