//! Spending aggregation
//!
//! Pure functions that derive spending views from the full expense
//! collection. Nothing here is cached or incrementally maintained; every
//! consumer recomputes from the records it is handed.

use std::collections::BTreeMap;

use crate::models::{Expense, Money, MonthKey};

/// Total spending for one category within a reference month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of expense amounts for the category
    pub total: Money,
}

/// Sum of all expense amounts; zero for an empty collection
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Group expenses by calendar month and sum each group
///
/// Returned pairs are sorted ascending by month key, which matches the
/// chronological order of the rendered `YYYY-MM` keys. Keys are unique.
pub fn monthly_totals(expenses: &[Expense]) -> Vec<(MonthKey, Money)> {
    let mut totals: BTreeMap<MonthKey, Money> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.month_key()).or_insert(Money::zero()) += expense.amount;
    }
    totals.into_iter().collect()
}

/// Sum the given month's expenses by category
///
/// Only expenses whose month key matches `month` contribute. Output is
/// sorted by category name ascending so results are deterministic
/// regardless of input order.
pub fn category_totals(expenses: &[Expense], month: MonthKey) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, Money> = BTreeMap::new();
    for expense in expenses.iter().filter(|e| month.contains(e.date)) {
        *totals
            .entry(expense.category.as_str())
            .or_insert(Money::zero()) += expense.amount;
    }

    totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect()
}

/// The category with the highest total, if any
///
/// Ties break to the first entry in input order: a later entry replaces the
/// leader only when strictly greater.
pub fn top_category(totals: &[CategoryTotal]) -> Option<&CategoryTotal> {
    let mut best: Option<&CategoryTotal> = None;
    for entry in totals {
        match best {
            Some(current) if entry.total <= current.total => {}
            _ => best = Some(entry),
        }
    }
    best
}

/// Look up a category's total, defaulting to zero when absent
pub fn spent_for_category(totals: &[CategoryTotal], category: &str) -> Money {
    totals
        .iter()
        .find(|t| t.category == category)
        .map(|t| t.total)
        .unwrap_or_else(Money::zero)
}
