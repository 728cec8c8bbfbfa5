//! Storage layer for the budget planner
//!
//! Two plain-text stores (transactions.txt, categories.txt) and an optional
//! JSON goal store, all written atomically.

pub mod categories;
pub mod file_io;
pub mod goals;
pub mod init;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_json, read_lines, write_json_atomic, write_lines_atomic};
pub use goals::GoalRepository;
pub use init::initialize_storage;
pub use transactions::TransactionRepository;

use tracing::warn;

use crate::config::paths::BudgetPaths;
use crate::config::settings::Settings;
use crate::error::BudgetError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BudgetPaths,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// Nothing is read or written until `load_all`/`save_all`.
    pub fn new(paths: BudgetPaths, settings: &Settings) -> Self {
        Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            goals: GoalRepository::new(paths.goals_file(), settings.persist_goals),
            paths,
        }
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Load all data from disk
    ///
    /// Missing or unreadable stores load as "no prior data". A malformed goal
    /// store is logged and treated the same way.
    pub fn load_all(&mut self) {
        self.transactions.load();
        self.categories.load();
        if let Err(e) = self.goals.load() {
            warn!(error = %e, "Ignoring unreadable goal store");
        }
    }

    /// Save all data to disk
    ///
    /// Every store is attempted; the first failure is returned.
    pub fn save_all(&self) -> Result<(), BudgetError> {
        let results = [
            self.transactions.save(),
            self.categories.save(),
            self.goals.save(),
        ];

        let mut first_error = None;
        for result in results {
            if let Err(e) = result {
                warn!(error = %e, "Failed to save store");
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
