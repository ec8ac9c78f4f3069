//! Goal model
//!
//! A spending ceiling set per category. At most one goal exists per
//! normalized category; setting a goal again overwrites the previous one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::normalize_category;
use super::money::Money;

/// A per-category spending ceiling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Normalized category label; the join key against expense entries
    pub category: String,

    /// The ceiling, never negative
    pub amount: Money,
}

impl Goal {
    /// Create a new goal with a normalized category.
    ///
    /// Amount validation belongs to the store; this constructor assumes a
    /// non-negative amount.
    pub fn new(category: &str, amount: Money) -> Self {
        Self {
            category: normalize_category(category),
            amount,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_goal_normalizes_category() {
        let goal = Goal::new("food", Money::from_cents(30000));
        assert_eq!(goal.category, "Food");
        assert_eq!(goal.amount.cents(), 30000);
    }

    #[test]
    fn test_display() {
        let goal = Goal::new("rent", Money::from_cents(120000));
        assert_eq!(format!("{}", goal), "Rent: $1200.00");
    }
}
