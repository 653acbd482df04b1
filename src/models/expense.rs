//! Expense model
//!
//! Represents a single recorded transaction: a dated, categorized amount
//! with an optional free-text description.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::period::MonthKey;

/// A single expense transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, immutable once created
    pub id: ExpenseId,

    /// Transaction date (date-only; no time-of-day semantics)
    pub date: NaiveDate,

    /// Amount spent; must be positive
    pub amount: Money,

    /// Category name; any string is accepted, see
    /// [`DEFAULT_CATEGORIES`](super::category::DEFAULT_CATEGORIES)
    pub category: String,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Expense {
    /// Create a new expense with a freshly generated ID
    pub fn new(date: NaiveDate, amount: Money, category: impl Into<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            amount,
            category: category.into(),
            description: None,
        }
    }

    /// Create an expense with a description
    pub fn with_description(
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(date, amount, category);
        expense.description = Some(description.into());
        expense
    }

    /// The month this expense buckets into
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
