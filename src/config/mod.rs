//! Configuration module for budgetbook
//!
//! Provides platform-aware resolution of the ledger data file location.

pub mod paths;

pub use paths::default_data_file;
