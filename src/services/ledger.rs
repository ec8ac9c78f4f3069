//! Ledger facade
//!
//! The single entry point over the entry store, goal store, and persistence
//! gateway. Every mutation is apply-then-save: the in-memory change is made
//! first, the full state is written to disk, and if the write fails the
//! change is rolled back so the caller-visible state matches the file.
//! Reads never touch the disk.

use std::path::PathBuf;

use crate::error::LedgerResult;
use crate::models::{Entry, EntryKind, Goal, LedgerState, Money, Summary};
use crate::storage::LedgerFile;

use super::entries::EntryStore;
use super::goals::GoalStore;
use super::reporting::summarize;

/// Owns the ledger state for the life of the process and keeps it in sync
/// with the durable file
pub struct Ledger {
    entries: EntryStore,
    goals: GoalStore,
    file: LedgerFile,
}

impl Ledger {
    /// Open the ledger backed by the given file, loading prior state.
    ///
    /// A missing file starts an empty ledger; a malformed one surfaces as
    /// `CorruptData` so the caller can decide between failing and starting
    /// fresh.
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let file = LedgerFile::new(path);
        let state = file.load()?;
        let goals = GoalStore::from_goals(state.goals_map());

        Ok(Self {
            entries: EntryStore::from_entries(state.entries),
            goals,
            file,
        })
    }

    /// Open the ledger backed by the given file, discarding any prior state
    /// on disk. The file itself is not rewritten until the first mutation.
    pub fn open_empty(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: EntryStore::new(),
            goals: GoalStore::new(),
            file: LedgerFile::new(path),
        }
    }

    /// Record an income entry
    pub fn add_income(
        &mut self,
        amount: Money,
        description: Option<&str>,
        category: Option<&str>,
    ) -> LedgerResult<Entry> {
        self.add_entry(EntryKind::Income, amount, description, category)
    }

    /// Record an expense entry
    pub fn add_expense(
        &mut self,
        amount: Money,
        description: Option<&str>,
        category: Option<&str>,
    ) -> LedgerResult<Entry> {
        self.add_entry(EntryKind::Expense, amount, description, category)
    }

    fn add_entry(
        &mut self,
        kind: EntryKind,
        amount: Money,
        description: Option<&str>,
        category: Option<&str>,
    ) -> LedgerResult<Entry> {
        let entry = self.entries.add(kind, amount, description, category)?;

        if let Err(e) = self.save() {
            self.entries.pop_last();
            return Err(e);
        }

        Ok(entry)
    }

    /// Set the spending goal for a category, overwriting any existing goal
    pub fn set_goal(&mut self, category: &str, amount: Money) -> LedgerResult<Goal> {
        let (goal, previous) = self.goals.set(category, amount)?;

        if let Err(e) = self.save() {
            self.goals.restore(&goal.category, previous);
            return Err(e);
        }

        Ok(goal)
    }

    /// Remove all entries and goals
    pub fn clear(&mut self) -> LedgerResult<()> {
        let entries_before = self.entries.clone();
        let goals_before = self.goals.clone();

        self.entries.clear();
        self.goals.clear();

        if let Err(e) = self.save() {
            self.entries = entries_before;
            self.goals = goals_before;
            return Err(e);
        }

        Ok(())
    }

    /// Compute the summary report. Pure read, no persistence.
    pub fn summary(&self) -> Summary {
        summarize(self.entries.list(), self.goals.list())
    }

    /// All recorded entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        self.entries.list()
    }

    /// Look up the goal for a category
    pub fn goal(&self, category: &str) -> Option<&Goal> {
        self.goals.get(category)
    }

    fn save(&self) -> LedgerResult<()> {
        let state = LedgerState::from_parts(self.entries.list().to_vec(), self.goals.list());
        self.file.save(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::open(temp_dir.path().join("ledger.json")).unwrap();
        (temp_dir, ledger)
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let (_temp_dir, ledger) = open_temp_ledger();
        assert!(ledger.summary().is_empty());
    }

    #[test]
    fn test_mutations_persist_across_open() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");

        {
            let mut ledger = Ledger::open(&path).unwrap();
            ledger
                .add_income(Money::from_cents(300000), Some("salary"), Some("salary"))
                .unwrap();
            ledger.set_goal("food", Money::from_cents(30000)).unwrap();
        }

        let reopened = Ledger::open(&path).unwrap();
        assert_eq!(reopened.entries().len(), 1);
        assert_eq!(reopened.goal("food").unwrap().amount.cents(), 30000);
    }

    #[test]
    fn test_rejected_add_leaves_summary_unchanged() {
        let (_temp_dir, mut ledger) = open_temp_ledger();
        ledger
            .add_income(Money::from_cents(10000), None, None)
            .unwrap();
        let before = ledger.summary();

        assert!(ledger
            .add_expense(Money::from_cents(-500), Some("x"), Some("y"))
            .is_err());
        assert!(ledger.add_expense(Money::zero(), Some("x"), Some("y")).is_err());

        assert_eq!(ledger.summary(), before);
    }

    /// Ledger whose saves always fail: the data file's parent path is a
    /// regular file, so the write can never create it as a directory.
    fn unwritable_ledger(temp_dir: &TempDir) -> Ledger {
        let blocker = temp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, "x").unwrap();
        Ledger::open_empty(blocker.join("ledger.json"))
    }

    #[test]
    fn test_failed_save_rolls_back_add() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = unwritable_ledger(&temp_dir);

        let before = ledger.summary();
        let err = ledger
            .add_income(Money::from_cents(100), None, None)
            .unwrap_err();

        assert!(matches!(err, crate::error::LedgerError::Io(_)));
        assert_eq!(ledger.summary(), before);
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn test_failed_save_rolls_back_goal() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = unwritable_ledger(&temp_dir);

        let err = ledger.set_goal("food", Money::from_cents(100)).unwrap_err();
        assert!(matches!(err, crate::error::LedgerError::Io(_)));
        assert!(ledger.goal("food").is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_temp_dir, mut ledger) = open_temp_ledger();
        ledger
            .add_expense(Money::from_cents(5000), Some("rent"), Some("housing"))
            .unwrap();
        ledger.set_goal("housing", Money::from_cents(60000)).unwrap();

        ledger.clear().unwrap();
        let after_once = ledger.summary();
        ledger.clear().unwrap();

        assert!(after_once.is_empty());
        assert_eq!(ledger.summary(), after_once);
    }

    #[test]
    fn test_goal_overwrite_last_write_wins() {
        let (_temp_dir, mut ledger) = open_temp_ledger();
        ledger.set_goal("food", Money::from_cents(10000)).unwrap();
        ledger.set_goal("Food", Money::from_cents(5000)).unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.goal_status.len(), 1);
        assert_eq!(summary.goal_status["Food"].goal_amount.cents(), 5000);
    }

    #[test]
    fn test_end_to_end_summary() {
        let (_temp_dir, mut ledger) = open_temp_ledger();
        ledger
            .add_income(Money::from_cents(300000), Some("salary"), Some("salary"))
            .unwrap();
        ledger
            .add_expense(Money::from_cents(50000), Some("rent"), Some("housing"))
            .unwrap();
        ledger
            .add_expense(Money::from_cents(15000), Some("groceries"), Some("food"))
            .unwrap();
        ledger.set_goal("food", Money::from_cents(30000)).unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.total_income.cents(), 300000);
        assert_eq!(summary.total_expenses.cents(), 65000);
        assert_eq!(summary.net.cents(), 235000);
        assert_eq!(summary.category_spend("Housing").unwrap().cents(), 50000);
        assert_eq!(summary.category_spend("Food").unwrap().cents(), 15000);

        let food = &summary.goal_status["Food"];
        assert_eq!(food.spent.cents(), 15000);
        assert_eq!(food.goal_amount.cents(), 30000);
        assert_eq!(food.remaining.cents(), 15000);
        assert!(!food.over_budget);
    }
}
