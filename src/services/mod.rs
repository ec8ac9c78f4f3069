//! Service layer for budgetbook
//!
//! The service layer provides business logic on top of the storage layer:
//! the in-memory entry and goal stores, the pure summary computation, and
//! the ledger facade that ties them to persistence.

pub mod entries;
pub mod goals;
pub mod ledger;
pub mod reporting;

pub use entries::EntryStore;
pub use goals::GoalStore;
pub use ledger::Ledger;
pub use reporting::summarize;
