//! budgetbook - Personal budget ledger for the command line
//!
//! This library provides the core functionality for the budgetbook CLI:
//! an append-only ledger of income and expense entries, per-category
//! spending goals, summary computation, and JSON file persistence with a
//! full-state rewrite after every mutation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: data file path resolution
//! - `error`: custom error types
//! - `models`: core data models (money, entries, goals, summaries)
//! - `storage`: JSON file storage layer with atomic writes
//! - `services`: business logic (stores, aggregation, the ledger facade)
//! - `display`: terminal report formatting
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use budgetbook::models::Money;
//! use budgetbook::services::Ledger;
//!
//! # fn main() -> budgetbook::error::LedgerResult<()> {
//! let mut ledger = Ledger::open("ledger.json")?;
//! ledger.add_income(Money::from_cents(300000), Some("salary"), Some("salary"))?;
//! ledger.add_expense(Money::from_cents(5025), Some("groceries"), Some("food"))?;
//! let summary = ledger.summary();
//! assert_eq!(summary.net.cents(), 294975);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
