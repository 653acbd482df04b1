//! Aggregation and budget-evaluation engine
//!
//! Pure derivation functions over the full record collections: spending
//! totals by month and by category, budget utilization, and the composed
//! budget overview.

pub mod budget_overview;
pub mod spending;

pub use budget_overview::{
    budget_progress, over_budget_count, remaining, total_budget, BudgetOverviewReport,
    BudgetProgress, BudgetReportRow,
};
pub use spending::{
    category_totals, monthly_totals, spent_for_category, top_category, total_spent, CategoryTotal,
};
