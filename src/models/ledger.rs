//! Ledger state
//!
//! The aggregate root: the ordered entry list plus the per-category goal map.
//! This is exactly the shape the persistence gateway writes and reconstructs;
//! there is no incremental persistence, every save rewrites the whole state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entry::Entry;
use super::goal::Goal;
use super::money::Money;

/// Serialized form of a goal inside the state document; the category lives
/// in the map key, so only the amount is stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    pub amount: Money,
}

/// The full in-memory aggregate of all entries and goals
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerState {
    /// All entries in insertion order
    #[serde(default)]
    pub entries: Vec<Entry>,

    /// Goals keyed by normalized category
    #[serde(default)]
    pub goals: BTreeMap<String, GoalRecord>,
}

impl LedgerState {
    /// Build state from store snapshots
    pub fn from_parts(entries: Vec<Entry>, goals: &BTreeMap<String, Goal>) -> Self {
        Self {
            entries,
            goals: goals
                .iter()
                .map(|(category, goal)| (category.clone(), GoalRecord { amount: goal.amount }))
                .collect(),
        }
    }

    /// Decompose loaded state into the goal map the stores use
    pub fn goals_map(&self) -> BTreeMap<String, Goal> {
        self.goals
            .iter()
            .map(|(category, record)| {
                (
                    category.clone(),
                    Goal {
                        category: category.clone(),
                        amount: record.amount,
                    },
                )
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.goals.is_empty()
    }
}
