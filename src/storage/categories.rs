//! Category repository for line storage
//!
//! Manages loading and saving the category registry to categories.txt

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::BudgetError;
use crate::models::CategoryRegistry;

use super::file_io::{read_lines, write_lines_atomic};

/// Repository owning the in-memory category registry
pub struct CategoryRepository {
    path: PathBuf,
    registry: CategoryRegistry,
    /// Set when the store exists but could not be read
    unreadable: bool,
}

impl CategoryRepository {
    /// Create a new category repository holding the seed list
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            registry: CategoryRegistry::seeded(),
            unreadable: false,
        }
    }

    /// Load the registry from disk
    ///
    /// Installs the seed list when no persisted registry exists. An
    /// unreadable store also falls back to the seed list and is then
    /// protected from being overwritten by `save`.
    pub fn load(&mut self) {
        self.unreadable = false;
        self.registry = match read_lines(&self.path) {
            Ok(Some(lines)) => CategoryRegistry::deserialize(lines),
            Ok(None) => {
                debug!("No category store found, installing defaults");
                CategoryRegistry::seeded()
            }
            Err(e) => {
                warn!(error = %e, "Category store unreadable, using defaults");
                self.unreadable = true;
                CategoryRegistry::seeded()
            }
        };
    }

    /// Save the registry to disk, overwriting the whole store
    ///
    /// Refuses to replace a store that failed to load.
    pub fn save(&self) -> Result<(), BudgetError> {
        if self.unreadable {
            return Err(BudgetError::Storage(format!(
                "{} could not be read; leaving it untouched",
                self.path.display()
            )));
        }
        write_lines_atomic(&self.path, self.registry.all())
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CategoryRegistry {
        &mut self.registry
    }
}
