//! Budget model
//!
//! A budget is a monthly spending cap for one category. At most one budget
//! per category is the intended usage, but duplicates are legal and each is
//! tracked independently.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// A monthly spending cap for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The category this cap applies to
    pub category: String,

    /// Monthly cap amount
    pub amount: Money,
}

impl Budget {
    /// Create a new budget with a freshly generated ID
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            category: category.into(),
            amount,
        }
    }

    /// Validate the budget
    ///
    /// New budgets must carry a positive cap; the aggregation engine still
    /// tolerates degenerate stored amounts (see `budget_progress`).
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} per month", self.category, self.amount)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount(Money),
    EmptyCategory,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Budget amount must be positive, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let budget = Budget::new("Food", Money::from_cents(50000));

        assert!(budget.id.as_str().starts_with("bud_"));
        assert_eq!(budget.category, "Food");
        assert_eq!(budget.amount.cents(), 50000);
    }

    #[test]
    fn test_validation() {
        let mut budget = Budget::new("Food", Money::from_cents(50000));
        assert!(budget.validate().is_ok());

        budget.amount = Money::zero();
        assert_eq!(
            budget.validate(),
            Err(BudgetValidationError::NonPositiveAmount(Money::zero()))
        );

        budget.amount = Money::from_cents(50000);
        budget.category = String::new();
        assert_eq!(budget.validate(), Err(BudgetValidationError::EmptyCategory));
    }

    #[test]
    fn test_duplicate_categories_are_distinct_records() {
        let a = Budget::new("Food", Money::from_cents(10000));
        let b = Budget::new("Food", Money::from_cents(20000));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialization() {
        let budget = Budget::new("Transportation", Money::from_cents(15000));

        let json = serde_json::to_string(&budget).unwrap();
        let deserialized: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget, deserialized);
    }
}
