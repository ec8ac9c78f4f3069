//! Summary computation
//!
//! Pure, read-only aggregation over entry and goal snapshots. Given the same
//! inputs this always produces the same `Summary`, including a deterministic
//! ordering for the category breakdown.

use std::collections::{BTreeMap, HashMap};

use crate::models::{CategorySpend, Entry, EntryKind, Goal, GoalStatus, Money, Summary};

/// Compute the full summary: totals, per-category expense breakdown, and
/// goal progress.
///
/// An empty ledger yields zero totals and empty collections.
pub fn summarize(entries: &[Entry], goals: &BTreeMap<String, Goal>) -> Summary {
    let mut total_income = Money::zero();
    let mut total_expenses = Money::zero();
    let mut spent_by_category: HashMap<&str, Money> = HashMap::new();

    for entry in entries {
        match entry.kind {
            EntryKind::Income => total_income += entry.amount,
            EntryKind::Expense => {
                total_expenses += entry.amount;
                *spent_by_category
                    .entry(entry.category.as_str())
                    .or_insert_with(Money::zero) += entry.amount;
            }
        }
    }

    // Descending by amount, alphabetical on ties, so display order is stable
    let mut by_category: Vec<CategorySpend> = spent_by_category
        .iter()
        .map(|(category, amount)| CategorySpend {
            category: (*category).to_string(),
            amount: *amount,
        })
        .collect();
    by_category.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));

    let goal_status: BTreeMap<String, GoalStatus> = goals
        .iter()
        .map(|(category, goal)| {
            let spent = spent_by_category
                .get(category.as_str())
                .copied()
                .unwrap_or_else(Money::zero);
            let remaining = goal.amount - spent;
            (
                category.clone(),
                GoalStatus {
                    spent,
                    goal_amount: goal.amount,
                    remaining,
                    over_budget: remaining.is_negative(),
                },
            )
        })
        .collect();

    Summary {
        total_income,
        total_expenses,
        net: total_income - total_expenses,
        by_category,
        goal_status,
    }
}
