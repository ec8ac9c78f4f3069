//! Display formatting for terminal output
//!
//! Provides utilities for formatting the computed summary for terminal
//! display.

pub mod summary;

pub use summary::format_summary;
