//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger facade: parses raw amount
//! strings, confirms destructive operations, and formats results for the
//! terminal. All ledger semantics live below this layer.

use std::io::{self, BufRead, Write};

use clap::Subcommand;

use crate::display::format_summary;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::services::Ledger;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Record an income entry
    Income {
        /// Amount, e.g. "3000" or "3000.00"
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// What the income was for
        description: Option<String>,
        /// Category label (defaults to "General")
        category: Option<String>,
    },

    /// Record an expense entry
    Expense {
        /// Amount, e.g. "50.25"
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// What the expense was for
        description: Option<String>,
        /// Category label (defaults to "General")
        category: Option<String>,
    },

    /// Set a spending goal for a category
    Goal {
        /// Category label
        category: String,
        /// Goal ceiling, e.g. "400"
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Show the budget summary
    Summary,

    /// Delete all entries and goals
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Dispatch a parsed command against the ledger
pub fn handle_command(ledger: &mut Ledger, command: Commands) -> LedgerResult<()> {
    match command {
        Commands::Income {
            amount,
            description,
            category,
        } => {
            let amount = parse_amount(&amount)?;
            let entry = ledger.add_income(amount, description.as_deref(), category.as_deref())?;
            println!("Added income: {} - {}", entry.amount, entry.description);
        }
        Commands::Expense {
            amount,
            description,
            category,
        } => {
            let amount = parse_amount(&amount)?;
            let entry = ledger.add_expense(amount, description.as_deref(), category.as_deref())?;
            println!("Added expense: {} - {}", entry.amount, entry.description);
        }
        Commands::Goal { category, amount } => {
            let amount = parse_amount(&amount)?;
            let goal = ledger.set_goal(&category, amount)?;
            println!("Set goal for {}: {}", goal.category, goal.amount);
        }
        Commands::Summary => {
            print!("{}", format_summary(&ledger.summary()));
        }
        Commands::Clear { yes } => {
            if yes || confirm_clear()? {
                ledger.clear()?;
                println!("All data cleared.");
            } else {
                println!("Aborted.");
            }
        }
    }

    Ok(())
}

fn parse_amount(raw: &str) -> LedgerResult<Money> {
    Money::parse(raw).map_err(|e| LedgerError::Validation(e.to_string()))
}

fn confirm_clear() -> LedgerResult<bool> {
    print!("Are you sure you want to clear all data? (yes/no): ");
    io::stdout()
        .flush()
        .map_err(|e| LedgerError::Io(e.to_string()))?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| LedgerError::Io(e.to_string()))?;

    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::open(temp_dir.path().join("ledger.json")).unwrap();
        (temp_dir, ledger)
    }

    #[test]
    fn test_income_command_records_entry() {
        let (_temp_dir, mut ledger) = open_temp_ledger();
        handle_command(
            &mut ledger,
            Commands::Income {
                amount: "3000".into(),
                description: Some("Monthly salary".into()),
                category: Some("salary".into()),
            },
        )
        .unwrap();

        assert_eq!(ledger.entries().len(), 1);
        assert_eq!(ledger.summary().total_income.cents(), 300000);
    }

    #[test]
    fn test_non_numeric_amount_is_validation_error() {
        let (_temp_dir, mut ledger) = open_temp_ledger();
        let err = handle_command(
            &mut ledger,
            Commands::Expense {
                amount: "abc".into(),
                description: None,
                category: None,
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn test_clear_with_yes_skips_prompt() {
        let (_temp_dir, mut ledger) = open_temp_ledger();
        handle_command(
            &mut ledger,
            Commands::Income {
                amount: "10".into(),
                description: None,
                category: None,
            },
        )
        .unwrap();

        handle_command(&mut ledger, Commands::Clear { yes: true }).unwrap();
        assert!(ledger.summary().is_empty());
    }
}
