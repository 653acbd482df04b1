//! Budget repository for JSON storage
//!
//! Manages the budgets collection in budgets.json with the same
//! create/update/delete-by-id lifecycle as expenses.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Budget, BudgetId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Serializable budget collection
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read_guard(&self) -> ExpenseResult<RwLockReadGuard<'_, Vec<Budget>>> {
        self.data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_guard(&self) -> ExpenseResult<RwLockWriteGuard<'_, Vec<Budget>>> {
        self.data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load budgets from disk
    ///
    /// A missing or unreadable file loads as an empty collection.
    pub fn load(&self) -> ExpenseResult<()> {
        let file_data: BudgetData = read_json_or_default(&self.path);

        let mut data = self.write_guard()?;
        *data = file_data.budgets;
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> ExpenseResult<()> {
        let data = self.read_guard()?;
        let file_data = BudgetData {
            budgets: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all budgets in stored order (most recent first)
    pub fn get_all(&self) -> ExpenseResult<Vec<Budget>> {
        Ok(self.read_guard()?.clone())
    }

    /// Get a budget by ID
    pub fn get(&self, id: &BudgetId) -> ExpenseResult<Option<Budget>> {
        Ok(self.read_guard()?.iter().find(|b| &b.id == id).cloned())
    }

    /// Add a new budget, prepending it to the collection
    ///
    /// Duplicate-category budgets are legal; each is tracked independently.
    pub fn add(&self, budget: Budget) -> ExpenseResult<()> {
        budget
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.write_guard()?.insert(0, budget);
        Ok(())
    }

    /// Update an existing budget in place, matched by ID
    pub fn update(&self, budget: Budget) -> ExpenseResult<()> {
        budget
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let mut data = self.write_guard()?;
        match data.iter_mut().find(|b| b.id == budget.id) {
            Some(existing) => {
                *existing = budget;
                Ok(())
            }
            None => Err(ExpenseError::budget_not_found(budget.id.as_str())),
        }
    }

    /// Remove a budget by ID
    pub fn remove(&self, id: &BudgetId) -> ExpenseResult<()> {
        let mut data = self.write_guard()?;
        let before = data.len();
        data.retain(|b| &b.id != id);

        if data.len() == before {
            return Err(ExpenseError::budget_not_found(id.as_str()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_add_and_get() {
        let (_temp_dir, repo) = test_repo();

        let budget = Budget::new("Food", Money::from_cents(50000));
        repo.add(budget.clone()).unwrap();

        assert_eq!(repo.get(&budget.id).unwrap(), Some(budget));
    }

    #[test]
    fn test_add_rejects_invalid() {
        let (_temp_dir, repo) = test_repo();

        let err = repo.add(Budget::new("Food", Money::zero())).unwrap_err();
        assert!(err.is_validation());
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_categories_allowed() {
        let (_temp_dir, repo) = test_repo();

        repo.add(Budget::new("Food", Money::from_cents(10000))).unwrap();
        repo.add(Budget::new("Food", Money::from_cents(20000))).unwrap();

        assert_eq!(repo.get_all().unwrap().len(), 2);
    }

    #[test]
    fn test_update_and_remove() {
        let (_temp_dir, repo) = test_repo();

        let mut budget = Budget::new("Food", Money::from_cents(50000));
        repo.add(budget.clone()).unwrap();

        budget.amount = Money::from_cents(60000);
        repo.update(budget.clone()).unwrap();
        assert_eq!(
            repo.get(&budget.id).unwrap().unwrap().amount.cents(),
            60000
        );

        repo.remove(&budget.id).unwrap();
        assert!(repo.get(&budget.id).unwrap().is_none());
        assert!(repo.remove(&budget.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_temp_dir, repo) = test_repo();

        let budget = Budget::new("Transportation", Money::from_cents(15000));
        repo.add(budget.clone()).unwrap();
        repo.save().unwrap();

        repo.load().unwrap();
        assert_eq!(repo.get_all().unwrap(), vec![budget]);
    }
}
