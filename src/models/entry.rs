//! Entry model
//!
//! Represents one recorded transaction: an income or an expense. Entries are
//! immutable once created; corrections are modeled by adding an offsetting
//! entry, and the only bulk lifecycle event is `clear`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{resolve_category, resolve_description};
use super::money::Money;

/// Whether an entry adds to or subtracts from the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// One recorded income or expense transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Income or expense
    pub kind: EntryKind,

    /// Amount, always positive
    pub amount: Money,

    /// Free-text label
    pub description: String,

    /// Normalized category label
    pub category: String,

    /// When the entry was recorded; set once, never updated
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    /// Create a new entry, resolving optional description/category to their
    /// defaults and normalizing the category.
    ///
    /// Amount validation belongs to the store; this constructor assumes a
    /// positive amount.
    pub fn new(
        kind: EntryKind,
        amount: Money,
        description: Option<&str>,
        category: Option<&str>,
    ) -> Self {
        Self {
            kind,
            amount,
            description: resolve_description(description),
            category: resolve_category(category),
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} - {}",
            self.timestamp.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.description
        )
    }
}
