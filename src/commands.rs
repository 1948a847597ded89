//! Command handlers

use std::path::PathBuf;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::print_ledger;
use crate::render::render_fragment;
use crate::storage::FileStorage;
use crate::store::LedgerStore;
use crate::types::RecordForm;
use crate::view::LedgerView;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Add {
            quantity,
            date,
            cement_type,
            supplier,
            comment,
        } => cmd_add(
            &cli,
            &config,
            output_format,
            RecordForm {
                date: date.clone().unwrap_or_else(today),
                quantity: quantity.clone(),
                cement_type: cement_type.clone().unwrap_or_default(),
                supplier: supplier.clone().unwrap_or_default(),
                comment: comment.clone().unwrap_or_default(),
            },
        ),
        Commands::List => cmd_list(&cli, &config, output_format),
        Commands::Remove { row } => cmd_remove(&cli, &config, output_format, *row),
        Commands::Html => cmd_html(&cli, &config),
        Commands::Config {
            show,
            set_data_dir,
            set_output,
            reset,
        } => cmd_config(*show, set_data_dir.clone(), *set_output, *reset),
    }
}

/// Today's date in the form's text format
fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn open_store(cli: &Cli, config: &Config) -> Result<LedgerStore<FileStorage>> {
    let data_dir = config.data_dir()?;
    if cli.verbose {
        eprintln!("Ledger storage: {}", data_dir.display());
    }
    let storage = FileStorage::open(data_dir)?;
    LedgerStore::open(storage)
}

fn cmd_add(
    cli: &Cli,
    config: &Config,
    output_format: OutputFormat,
    form: RecordForm,
) -> Result<()> {
    let mut store = open_store(cli, config)?;
    let id = store.submit(&form)?;

    if cli.verbose {
        eprintln!("Recorded entry {}", id);
    }

    // Show the updated ledger after the mutation
    let view = LedgerView::build(store.records());
    print_ledger(output_format, store.records(), &view)
}

fn cmd_list(cli: &Cli, config: &Config, output_format: OutputFormat) -> Result<()> {
    let store = open_store(cli, config)?;
    let view = LedgerView::build(store.records());
    print_ledger(output_format, store.records(), &view)
}

fn cmd_remove(cli: &Cli, config: &Config, output_format: OutputFormat, row: usize) -> Result<()> {
    let mut store = open_store(cli, config)?;
    let view = LedgerView::build(store.records());

    // Row numbers are 1-based display positions; resolve to the record id
    let id = row
        .checked_sub(1)
        .and_then(|i| view.rows.get(i))
        .map(|r| r.id.clone())
        .ok_or(Error::RowNotFound(row))?;

    if !store.remove(&id)? {
        return Err(Error::RowNotFound(row));
    }

    if cli.verbose {
        eprintln!("Removed entry {}", id);
    }

    let view = LedgerView::build(store.records());
    print_ledger(output_format, store.records(), &view)
}

fn cmd_html(cli: &Cli, config: &Config) -> Result<()> {
    let store = open_store(cli, config)?;
    let view = LedgerView::build(store.records());
    println!("{}", render_fragment(&view));
    Ok(())
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
