//! Budget Planner - personal budget tracker core
//!
//! This library keeps a ledger of dated income and expense transactions,
//! a registry of category names and per-category spending goals, and
//! persists them as plain text files in a single data directory.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory paths and settings
//! - `error`: Custom error types
//! - `models`: Money, transactions, the ledger, categories and goals
//! - `storage`: Line-oriented text stores with atomic writes
//! - `services`: Business logic and the filter engine
//! - `session`: The command surface a front end drives
//! - `cli`: Command handlers for the `budget` binary
//! - `display`: Terminal output formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_planner::config::{BudgetPaths, Settings};
//! use budget_planner::session::BudgetSession;
//!
//! let paths = BudgetPaths::new();
//! let settings = Settings::load_or_create(&paths)?;
//! let mut session = BudgetSession::new(paths, &settings);
//! session.load_all();
//! let totals = session.add_transaction("30", "Food", today)?;
//! session.save_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
pub use session::BudgetSession;
