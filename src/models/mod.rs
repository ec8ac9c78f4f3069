//! Core data models for budgetbook
//!
//! This module contains the data structures that represent the ledger
//! domain: monetary amounts, entries, goals, and computed summaries.

pub mod category;
pub mod entry;
pub mod goal;
pub mod ledger;
pub mod money;
pub mod summary;

pub use category::{normalize_category, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION};
pub use entry::{Entry, EntryKind};
pub use goal::Goal;
pub use ledger::{GoalRecord, LedgerState};
pub use money::{Money, MoneyParseError};
pub use summary::{CategorySpend, GoalStatus, Summary};
