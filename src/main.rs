//! Chantier Ciment - cement-bag consumption ledger for a construction site
//!
//! CLI tool that records usage entries and renders the ledger.

use chantier_ciment::cli::Cli;
use chantier_ciment::commands;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
