//! Goal store
//!
//! Holds per-category spending goals, keyed by normalized category so that
//! "food" and "Food" land on the same goal. Setting a goal for an existing
//! category overwrites it; no history is kept.

use std::collections::BTreeMap;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{normalize_category, Goal, Money};

/// In-memory store of spending goals, one per normalized category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalStore {
    goals: BTreeMap<String, Goal>,
}

impl GoalStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from previously persisted goals
    pub fn from_goals(goals: BTreeMap<String, Goal>) -> Self {
        Self { goals }
    }

    /// Set the goal for a category, overwriting any existing goal. The
    /// amount must be non-negative; rejection leaves the store untouched.
    /// Returns the new goal along with the one it replaced, if any.
    pub fn set(&mut self, category: &str, amount: Money) -> LedgerResult<(Goal, Option<Goal>)> {
        if amount.is_negative() {
            return Err(LedgerError::Validation(format!(
                "goal amount must be non-negative, got {}",
                amount
            )));
        }

        let goal = Goal::new(category, amount);
        let previous = self.goals.insert(goal.category.clone(), goal.clone());
        Ok((goal, previous))
    }

    /// Look up the goal for a category, matching on the normalized name
    pub fn get(&self, category: &str) -> Option<&Goal> {
        self.goals.get(&normalize_category(category))
    }

    /// All goals, keyed by normalized category
    pub fn list(&self) -> &BTreeMap<String, Goal> {
        &self.goals
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Remove all goals unconditionally
    pub fn clear(&mut self) {
        self.goals.clear();
    }

    /// Restore a category to its previous goal (or remove it). Used by the
    /// facade to roll back a set whose persistence write failed.
    pub(crate) fn restore(&mut self, category: &str, previous: Option<Goal>) {
        match previous {
            Some(goal) => {
                self.goals.insert(category.to_string(), goal);
            }
            None => {
                self.goals.remove(category);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut store = GoalStore::new();
        store.set("food", Money::from_cents(30000)).unwrap();

        let goal = store.get("food").unwrap();
        assert_eq!(goal.category, "Food");
        assert_eq!(goal.amount.cents(), 30000);
    }

    #[test]
    fn test_set_overwrites_case_insensitively() {
        let mut store = GoalStore::new();
        store.set("food", Money::from_cents(10000)).unwrap();
        let (goal, previous) = store.set("Food", Money::from_cents(5000)).unwrap();

        assert_eq!(previous.unwrap().amount.cents(), 10000);
        assert_eq!(goal.amount.cents(), 5000);
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.get("FOOD").unwrap().amount.cents(), 5000);
    }

    #[test]
    fn test_set_rejects_negative_amount() {
        let mut store = GoalStore::new();
        let err = store.set("food", Money::from_cents(-1)).unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_zero_goal_is_allowed() {
        let mut store = GoalStore::new();
        store.set("impulse", Money::zero()).unwrap();
        assert!(store.get("impulse").unwrap().amount.is_zero());
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = GoalStore::new();
        assert!(store.get("travel").is_none());
    }

    #[test]
    fn test_restore_reinstates_previous_goal() {
        let mut store = GoalStore::new();
        store.set("food", Money::from_cents(10000)).unwrap();
        let (goal, previous) = store.set("food", Money::from_cents(5000)).unwrap();

        store.restore(&goal.category, previous);
        assert_eq!(store.get("food").unwrap().amount.cents(), 10000);
    }

    #[test]
    fn test_restore_removes_goal_without_previous() {
        let mut store = GoalStore::new();
        let (goal, previous) = store.set("food", Money::from_cents(5000)).unwrap();
        assert!(previous.is_none());

        store.restore(&goal.category, None);
        assert!(store.is_empty());
    }
}
