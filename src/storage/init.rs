//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::DEFAULT_CATEGORIES;

use super::file_io::write_lines_atomic;

/// Initialize storage for a fresh installation
///
/// Creates the data directory and writes the default category store.
/// Existing stores are left untouched.
pub fn initialize_storage(paths: &BudgetPaths) -> Result<(), BudgetError> {
    paths.ensure_directories()?;

    if needs_initialization(paths) {
        write_lines_atomic(paths.categories_file(), DEFAULT_CATEGORIES)?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BudgetPaths) -> bool {
    !paths.categories_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().join("data"));

        assert!(needs_initialization(&paths));
        initialize_storage(&paths).unwrap();
        assert!(!needs_initialization(&paths));

        let content = std::fs::read_to_string(paths.categories_file()).unwrap();
        assert_eq!(content.lines().count(), 8);
        assert_eq!(content.lines().next(), Some("Salary"));
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path());

        std::fs::write(paths.categories_file(), "Custom\n").unwrap();
        initialize_storage(&paths).unwrap();

        let content = std::fs::read_to_string(paths.categories_file()).unwrap();
        assert_eq!(content, "Custom\n");
    }
}
