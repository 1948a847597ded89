//! Terminal output for the ledger

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::types::Record;
use crate::view::{LedgerView, EMPTY_MESSAGE};

/// Print the ledger to stdout in the requested format.
///
/// The table numbers rows in display order; `remove` takes those numbers.
/// JSON output is the raw record sequence in insertion order, ids included.
pub fn print_ledger(format: OutputFormat, records: &[Record], view: &LedgerView) -> Result<()> {
    if format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(records)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nConsommation de ciment");
    println!("======================");

    if view.is_empty() {
        println!("{}", EMPTY_MESSAGE);
    } else {
        println!(
            "{:>3}  {:<10}  {:>8}  {:<14}  {:<14}  {}",
            "#", "Date", "Sacs", "Type", "Fournisseur", "Commentaire"
        );
        for (number, row) in view.rows.iter().enumerate() {
            println!(
                "{:>3}  {:<10}  {:>8}  {:<14}  {:<14}  {}",
                number + 1,
                row.date,
                row.quantity,
                row.cement_type,
                row.supplier,
                row.comment
            );
        }
    }

    println!();
    println!("{}", view.total_label());
    Ok(())
}
