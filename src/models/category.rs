//! Category vocabulary
//!
//! A fixed ordered list of default category names used to populate
//! category-selection inputs. The vocabulary is advisory: stored expenses
//! and budgets may carry any category string.

/// Default category names, in display order
pub const DEFAULT_CATEGORIES: [&str; 11] = [
    "Housing",
    "Transportation",
    "Food",
    "Utilities",
    "Healthcare",
    "Entertainment",
    "Education",
    "PersonalCare",
    "Debt",
    "Savings",
    "Business",
];

/// Check whether a category name is one of the defaults
pub fn is_default_category(name: &str) -> bool {
    DEFAULT_CATEGORIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_stable() {
        assert_eq!(DEFAULT_CATEGORIES[0], "Housing");
        assert_eq!(DEFAULT_CATEGORIES[2], "Food");
        assert_eq!(DEFAULT_CATEGORIES[10], "Business");
    }

    #[test]
    fn test_is_default_category() {
        assert!(is_default_category("Food"));
        assert!(!is_default_category("food"));
        assert!(!is_default_category("Pets"));
    }
}
