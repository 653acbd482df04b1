//! Expense repository for JSON storage
//!
//! Manages the expenses collection in expenses.json. The collection is kept
//! most-recent-first: new records are prepended, matching how consumers
//! render them.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Serializable expense collection
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read_guard(&self) -> ExpenseResult<RwLockReadGuard<'_, Vec<Expense>>> {
        self.data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_guard(&self) -> ExpenseResult<RwLockWriteGuard<'_, Vec<Expense>>> {
        self.data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load expenses from disk
    ///
    /// A missing or unreadable file loads as an empty collection.
    pub fn load(&self) -> ExpenseResult<()> {
        let file_data: ExpenseData = read_json_or_default(&self.path);

        let mut data = self.write_guard()?;
        *data = file_data.expenses;
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> ExpenseResult<()> {
        let data = self.read_guard()?;
        let file_data = ExpenseData {
            expenses: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all expenses in stored order (most recent first)
    pub fn get_all(&self) -> ExpenseResult<Vec<Expense>> {
        Ok(self.read_guard()?.clone())
    }

    /// Get an expense by ID
    pub fn get(&self, id: &ExpenseId) -> ExpenseResult<Option<Expense>> {
        Ok(self.read_guard()?.iter().find(|e| &e.id == id).cloned())
    }

    /// Add a new expense, prepending it to the collection
    ///
    /// Validation failures abort the operation with no record change.
    pub fn add(&self, expense: Expense) -> ExpenseResult<()> {
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.write_guard()?.insert(0, expense);
        Ok(())
    }

    /// Update an existing expense in place, matched by ID
    pub fn update(&self, expense: Expense) -> ExpenseResult<()> {
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let mut data = self.write_guard()?;
        match data.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => {
                *existing = expense;
                Ok(())
            }
            None => Err(ExpenseError::expense_not_found(expense.id.as_str())),
        }
    }

    /// Remove an expense by ID
    pub fn remove(&self, id: &ExpenseId) -> ExpenseResult<()> {
        let mut data = self.write_guard()?;
        let before = data.len();
        data.retain(|e| &e.id != id);

        if data.len() == before {
            return Err(ExpenseError::expense_not_found(id.as_str()));
        }
        Ok(())
    }
}
