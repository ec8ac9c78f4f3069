//! Storage layer for budgetbook
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The whole ledger lives in a single file that is rewritten on
//! every mutation.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use ledger::LedgerFile;
