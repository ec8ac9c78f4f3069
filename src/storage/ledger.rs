//! Ledger persistence gateway
//!
//! Serializes the combined ledger state (entries + goals) to a single JSON
//! file and reconstructs it wholesale on load. The gateway only moves state
//! in and out of the file; it never repairs or guesses at partial data, and
//! a missing file simply means a fresh, empty ledger.

use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::LedgerState;

use super::file_io::{read_json, write_json_atomic};

/// Persistence gateway for the ledger state file
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    /// Create a gateway for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path this gateway reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full state from disk.
    ///
    /// A missing file yields an empty state. A file that parses but violates
    /// the shape the ledger guarantees (non-positive entry amount, negative
    /// goal amount) is reported as corrupt rather than partially accepted.
    pub fn load(&self) -> LedgerResult<LedgerState> {
        let state: LedgerState = read_json(&self.path)?;
        Self::validate(&state)?;
        Ok(state)
    }

    /// Save the full state to disk atomically
    pub fn save(&self, state: &LedgerState) -> LedgerResult<()> {
        write_json_atomic(&self.path, state)
    }

    fn validate(state: &LedgerState) -> LedgerResult<()> {
        for entry in &state.entries {
            if !entry.amount.is_positive() {
                return Err(LedgerError::CorruptData(format!(
                    "entry '{}' has non-positive amount {}",
                    entry.description, entry.amount
                )));
            }
        }

        for (category, record) in &state.goals {
            if record.amount.is_negative() {
                return Err(LedgerError::CorruptData(format!(
                    "goal for '{}' has negative amount {}",
                    category, record.amount
                )));
            }
        }

        Ok(())
    }
}
