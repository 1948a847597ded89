//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for ledger listings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "chantier-ciment")]
#[command(version)]
#[command(about = "Suivi de la consommation de sacs de ciment sur chantier")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Ledger storage directory (overrides the configured one)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (table, json). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a cement usage entry
    Add {
        /// Number of bags used (fractional allowed)
        quantity: String,

        /// Usage date (YYYY-MM-DD), defaults to today
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Cement type, e.g. "CEM II 32,5"
        #[arg(long = "type", short = 't')]
        cement_type: Option<String>,

        /// Supplier name
        #[arg(long, short = 's')]
        supplier: Option<String>,

        /// Free comment
        #[arg(long, short = 'c')]
        comment: Option<String>,
    },

    /// List recorded entries with the running total
    List,

    /// Delete one entry by its row number in the listing
    Remove {
        /// Row number as shown by `list` (most recent first)
        row: usize,
    },

    /// Print the ledger table as HTML
    Html,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set ledger storage directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
