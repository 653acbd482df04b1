//! Budget Overview Report
//!
//! Evaluates every budget against the reference month's spending and
//! composes the derived view the dashboard and budget pages render:
//! per-budget utilization rows, grand totals, and over-budget counts.

use crate::error::ExpenseResult;
use crate::models::{Budget, Expense, Money, MonthKey};
use crate::storage::Storage;

use super::spending::{
    category_totals, monthly_totals, spent_for_category, top_category, CategoryTotal,
};

/// Utilization of one budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetProgress {
    /// Percent of the cap spent, clamped to 0-100
    pub percent: u8,
    /// Whether spending exceeds the cap
    pub over: bool,
}

/// Evaluate spending against a budget's monthly cap
///
/// `percent = min(100, round(spent / max(amount, 1 cent) * 100))`. The
/// one-cent floor on the divisor keeps percent finite for degenerate
/// zero-amount budgets: any spending against such a cap reads as 100%.
pub fn budget_progress(budget: &Budget, spent: Money) -> BudgetProgress {
    let cap = budget.amount.cents().max(1);
    let ratio = spent.cents() as f64 / cap as f64;
    let percent = (ratio * 100.0).round().clamp(0.0, 100.0) as u8;

    BudgetProgress {
        percent,
        over: spent > budget.amount,
    }
}

/// Sum of all budget caps; zero for an empty collection
pub fn total_budget(budgets: &[Budget]) -> Money {
    budgets.iter().map(|b| b.amount).sum()
}

/// Budget left after spending, clamped to zero
pub fn remaining(total_budget: Money, total_spent: Money) -> Money {
    total_budget.saturating_sub_zero(total_spent)
}

/// Count budgets whose category spend strictly exceeds the cap
pub fn over_budget_count(budgets: &[Budget], spend_by_category: &[CategoryTotal]) -> usize {
    budgets
        .iter()
        .filter(|b| spent_for_category(spend_by_category, &b.category) > b.amount)
        .count()
}

/// A row in the overview for a single budget
#[derive(Debug, Clone)]
pub struct BudgetReportRow {
    /// The budget being evaluated
    pub budget: Budget,
    /// Reference-month spending in the budget's category
    pub spent: Money,
    /// Utilization of the cap
    pub progress: BudgetProgress,
}

/// Budget Overview Report for one reference month
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    /// The reference month
    pub month: MonthKey,
    /// One row per budget, in the budgets' stored order
    pub rows: Vec<BudgetReportRow>,
    /// Sum of all budget caps
    pub total_budget: Money,
    /// Total spending in the reference month
    pub month_spent: Money,
    /// Budget left this month, clamped to zero
    pub remaining: Money,
    /// Number of budgets whose category spend exceeds the cap
    pub over_budget_count: usize,
    /// The reference month's highest-spending category, if any
    pub top_category: Option<CategoryTotal>,
    /// All-time spending per month, ascending
    pub monthly_trend: Vec<(MonthKey, Money)>,
}

impl BudgetOverviewReport {
    /// Generate the overview from full record collections
    ///
    /// Pure: reads the collections it is handed and never mutates them.
    pub fn generate(expenses: &[Expense], budgets: &[Budget], month: MonthKey) -> Self {
        let by_category = category_totals(expenses, month);

        let rows: Vec<BudgetReportRow> = budgets
            .iter()
            .map(|budget| {
                let spent = spent_for_category(&by_category, &budget.category);
                BudgetReportRow {
                    budget: budget.clone(),
                    spent,
                    progress: budget_progress(budget, spent),
                }
            })
            .collect();

        let total_budget = total_budget(budgets);
        let month_spent: Money = by_category.iter().map(|t| t.total).sum();

        Self {
            month,
            total_budget,
            month_spent,
            remaining: remaining(total_budget, month_spent),
            over_budget_count: over_budget_count(budgets, &by_category),
            top_category: top_category(&by_category).cloned(),
            monthly_trend: monthly_totals(expenses),
            rows,
        }
    }

    /// Generate the overview from the record store
    pub fn from_storage(storage: &Storage, month: MonthKey) -> ExpenseResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let budgets = storage.budgets.get_all()?;
        Ok(Self::generate(&expenses, &budgets, month))
    }
}
