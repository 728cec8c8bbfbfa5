//! Path management for the budget planner
//!
//! Store files use fixed names inside a single data directory.
//!
//! ## Path Resolution Order
//!
//! 1. Explicit directory passed by the caller (`--data-dir`)
//! 2. `BUDGET_PLANNER_DATA_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::PathBuf;

use crate::error::BudgetError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "BUDGET_PLANNER_DATA_DIR";

/// Manages all paths used by the budget planner
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Directory holding every store file
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve paths from the environment, falling back to the current directory
    pub fn new() -> Self {
        let base_dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self { base_dir }
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.txt
    pub fn transactions_file(&self) -> PathBuf {
        self.base_dir.join("transactions.txt")
    }

    /// Get the path to categories.txt
    pub fn categories_file(&self) -> PathBuf {
        self.base_dir.join("categories.txt")
    }

    /// Get the path to goals.json (only used when goal persistence is enabled)
    pub fn goals_file(&self) -> PathBuf {
        self.base_dir.join("goals.json")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))
    }
}

impl Default for BudgetPaths {
    fn default() -> Self {
        Self::new()
    }
}
