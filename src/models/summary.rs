//! Summary types
//!
//! The computed report over the ledger: totals, per-category expense
//! breakdown, and goal progress. Produced by the reporting service; these
//! types carry no behavior beyond a few convenience accessors.

use std::collections::BTreeMap;

use super::money::Money;

/// Total spent in one expense category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: String,
    pub amount: Money,
}

/// Progress against one category's spending goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalStatus {
    /// Total expenses recorded in the goal's category (zero if none)
    pub spent: Money,

    /// The goal ceiling
    pub goal_amount: Money,

    /// goal_amount - spent; stays signed so callers can show "over by"
    pub remaining: Money,

    /// True when remaining is negative
    pub over_budget: bool,
}

/// The full computed report over the ledger
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    /// Sum of all income entry amounts
    pub total_income: Money,

    /// Sum of all expense entry amounts
    pub total_expenses: Money,

    /// total_income - total_expenses
    pub net: Money,

    /// Expense totals per category, restricted to categories with at least
    /// one expense, ordered by descending amount then alphabetically
    pub by_category: Vec<CategorySpend>,

    /// Goal progress for every category with a goal, keyed by category
    pub goal_status: BTreeMap<String, GoalStatus>,
}

impl Summary {
    /// Look up the expense total for a category, if any expenses exist
    pub fn category_spend(&self, category: &str) -> Option<Money> {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.amount)
    }

    /// Check whether the ledger has anything recorded at all
    pub fn is_empty(&self) -> bool {
        self.total_income.is_zero() && self.total_expenses.is_zero() && self.by_category.is_empty()
    }
}
