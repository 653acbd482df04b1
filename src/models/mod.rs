//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the tracking
//! domain: expenses, category budgets, money amounts, month buckets, and
//! typed record identifiers.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use budget::{Budget, BudgetValidationError};
pub use category::DEFAULT_CATEGORIES;
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{generate_id, BudgetId, ExpenseId};
pub use money::{Money, MoneyParseError};
pub use period::{MonthKey, MonthKeyParseError};
