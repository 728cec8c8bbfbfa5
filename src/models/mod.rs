//! Core data models for the budget planner
//!
//! This module contains the data structures of the budgeting domain:
//! transactions, the ledger that holds them, categories and budget goals.

pub mod category;
pub mod goal;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use category::{CategoryRegistry, DEFAULT_CATEGORIES};
pub use goal::{BudgetGoals, MAX_GOAL};
pub use ledger::{Ledger, LedgerEntry, Totals};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
