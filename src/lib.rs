//! ExpenseBuddy core - personal expense tracking
//!
//! This library provides the reusable core of a personal expense tracker:
//! users record expenses, assign monthly category budgets, and view
//! aggregated spending. Presentation concerns (page layout, forms, charts)
//! live outside this crate and consume the derived views it produces.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and collection path resolution
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, budgets, money, month keys, ids)
//! - `storage`: JSON file record store with default-on-corruption reads
//! - `reports`: Pure aggregation and budget-evaluation functions
//!
//! # Example
//!
//! ```rust,no_run
//! use expensebuddy::config::StorePaths;
//! use expensebuddy::models::MonthKey;
//! use expensebuddy::reports::BudgetOverviewReport;
//! use expensebuddy::storage::Storage;
//!
//! # fn main() -> expensebuddy::error::ExpenseResult<()> {
//! let storage = Storage::new(StorePaths::new()?)?;
//! storage.load_all()?;
//!
//! let overview = BudgetOverviewReport::from_storage(&storage, MonthKey::current())?;
//! for row in &overview.rows {
//!     println!("{}: {}% used", row.budget.category, row.progress.percent);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
