use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use budgetbook::cli::{handle_command, Commands};
use budgetbook::config::default_data_file;
use budgetbook::services::Ledger;
use budgetbook::LedgerError;

#[derive(Parser)]
#[command(
    name = "budgetbook",
    author = "Kaylee Beyene",
    version,
    about = "Personal budget ledger for the command line",
    long_about = "budgetbook tracks income and expense entries, per-category \
                  spending goals, and computes budget summaries. All data is \
                  kept in a single JSON file that is rewritten after every change."
)]
struct Cli {
    /// Path to the ledger data file
    #[arg(long, global = true, env = "BUDGETBOOK_DATA_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = match cli.file {
        Some(path) => path,
        None => default_data_file()?,
    };

    // A corrupt file is reported once at startup; the CLI's policy is to
    // warn and start fresh rather than abort. The old file is only
    // overwritten on the next mutation.
    let mut ledger = match Ledger::open(&path) {
        Ok(ledger) => ledger,
        Err(err @ LedgerError::CorruptData(_)) => {
            eprintln!("Warning: {}", err);
            eprintln!("Starting with an empty ledger; the file will be replaced on the next change.");
            Ledger::open_empty(&path)
        }
        Err(err) => return Err(err.into()),
    };

    if let Err(err) = handle_command(&mut ledger, cli.command) {
        match &err {
            LedgerError::Io(_) => {
                eprintln!("Error: {}", err);
                eprintln!("The change was not saved and has been discarded.");
            }
            _ => eprintln!("Error: {}", err),
        }
        std::process::exit(1);
    }

    Ok(())
}
