//! Category service
//!
//! Registers new category names. The category store is rewritten after
//! every successful add.

use tracing::{debug, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::category::CategoryValidationError;
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Append a category and persist the registry
    ///
    /// A failed write is logged but does not undo the add; the registry is
    /// written again when the session is saved.
    pub fn add_category(&mut self, name: &str) -> BudgetResult<()> {
        self.storage
            .categories
            .registry_mut()
            .add(name)
            .map_err(|e| match e {
                CategoryValidationError::EmptyName => BudgetError::empty_category(),
                other => BudgetError::Validation(other.to_string()),
            })?;
        debug!(name, "Added category");

        if let Err(e) = self.storage.categories.save() {
            warn!(error = %e, "Could not write category store");
        }

        Ok(())
    }
}
