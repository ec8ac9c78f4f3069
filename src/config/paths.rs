//! Path management for budgetbook
//!
//! The ledger lives in a single data file. Its location is a caller choice:
//! the CLI accepts `--file` (or the `BUDGETBOOK_DATA_FILE` env var) and only
//! falls back to the platform data directory resolved here.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{LedgerError, LedgerResult};

/// File name of the ledger inside the data directory
const DATA_FILE_NAME: &str = "ledger.json";

/// Resolve the default ledger file path from the platform data directory
/// (e.g. `~/.local/share/budgetbook/ledger.json` on Linux).
///
/// # Errors
///
/// Returns an error if no home directory can be determined.
pub fn default_data_file() -> LedgerResult<PathBuf> {
    let dirs = ProjectDirs::from("", "", "budgetbook").ok_or_else(|| {
        LedgerError::Config("Could not determine a data directory for this platform".into())
    })?;

    Ok(dirs.data_dir().join(DATA_FILE_NAME))
}
