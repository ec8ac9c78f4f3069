//! Summary report formatting for terminal output
//!
//! Renders the computed `Summary` as the fixed-width, dollar-prefixed report
//! the `summary` command prints. Formatting only; all numbers arrive
//! already computed.

use std::fmt::Write;

use crate::models::{Money, Summary};

const REPORT_WIDTH: usize = 50;
const LINE_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 15;
const AMOUNT_WIDTH: usize = 10;

/// Render the full summary report
pub fn format_summary(summary: &Summary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", double_separator(REPORT_WIDTH));
    let _ = writeln!(out, "{}", center("BUDGET SUMMARY", REPORT_WIDTH));
    let _ = writeln!(out, "{}", double_separator(REPORT_WIDTH));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", total_line("Total Income", summary.total_income));
    let _ = writeln!(out, "{}", total_line("Total Expenses", summary.total_expenses));
    let _ = writeln!(out, "{}", separator(LINE_WIDTH));
    let _ = writeln!(out, "{}", total_line("Net Amount", summary.net));
    let _ = writeln!(out);

    if summary.net.is_negative() {
        let _ = writeln!(out, "Warning: you're over budget!");
    } else {
        let _ = writeln!(out, "You're within budget.");
    }

    if !summary.by_category.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Expenses by Category:");
        let _ = writeln!(out, "{}", separator(LINE_WIDTH));
        for spend in &summary.by_category {
            let _ = writeln!(
                out,
                "{}: {}",
                left_align(&spend.category, LABEL_WIDTH),
                right_align(&spend.amount.to_string(), AMOUNT_WIDTH)
            );
        }
    }

    if !summary.goal_status.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Goal Status:");
        let _ = writeln!(out, "{}", separator(LINE_WIDTH));
        for (category, status) in &summary.goal_status {
            let note = if status.over_budget {
                format!("over by {}", status.remaining.abs())
            } else {
                format!("{} remaining", status.remaining)
            };
            let _ = writeln!(
                out,
                "{}: {} / {} ({})",
                left_align(category, LABEL_WIDTH),
                right_align(&status.spent.to_string(), AMOUNT_WIDTH),
                status.goal_amount,
                note
            );
        }
    }

    let _ = writeln!(out, "{}", double_separator(REPORT_WIDTH));
    out
}

fn total_line(label: &str, amount: Money) -> String {
    format!(
        "{}: {}",
        left_align(label, LABEL_WIDTH),
        right_align(&amount.to_string(), AMOUNT_WIDTH)
    )
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "=".repeat(width)
}

/// Center text in a field of given width
pub fn center(s: &str, width: usize) -> String {
    let padding = if s.len() >= width { 0 } else { (width - s.len()) / 2 };
    format!("{}{}", " ".repeat(padding), s)
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
