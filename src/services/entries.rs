//! Entry store
//!
//! Holds the ordered collection of income and expense records. Append-only:
//! entries are never edited in place, corrections are modeled by adding an
//! offsetting entry. The only bulk operation is `clear`.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Entry, EntryKind, Money};

/// In-memory store of all recorded entries, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from previously persisted entries
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Record a new entry. The amount must be positive; rejection leaves the
    /// store untouched.
    pub fn add(
        &mut self,
        kind: EntryKind,
        amount: Money,
        description: Option<&str>,
        category: Option<&str>,
    ) -> LedgerResult<Entry> {
        if !amount.is_positive() {
            return Err(LedgerError::Validation(format!(
                "{} amount must be positive, got {}",
                kind, amount
            )));
        }

        let entry = Entry::new(kind, amount, description, category);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// All entries in insertion order
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries unconditionally
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Discard the most recently added entry. Used by the facade to roll
    /// back an add whose persistence write failed.
    pub(crate) fn pop_last(&mut self) -> Option<Entry> {
        self.entries.pop()
    }
}
