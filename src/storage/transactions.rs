//! Transaction repository for line storage
//!
//! Manages loading and saving the ledger to transactions.txt

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::BudgetError;
use crate::models::Ledger;

use super::file_io::{read_lines, write_lines_atomic};

/// Repository owning the in-memory ledger
pub struct TransactionRepository {
    path: PathBuf,
    ledger: Ledger,
    /// Set when the store exists but could not be read
    unreadable: bool,
}

impl TransactionRepository {
    /// Create a new transaction repository with an empty ledger
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ledger: Ledger::new(),
            unreadable: false,
        }
    }

    /// Load the ledger from disk, replacing what is in memory
    ///
    /// A missing store loads as an empty ledger. An unreadable one also
    /// loads empty, but is then protected from being overwritten by `save`.
    pub fn load(&mut self) {
        self.unreadable = false;
        self.ledger = match read_lines(&self.path) {
            Ok(lines) => lines.map(Ledger::deserialize).unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Transaction store unreadable, treating as empty");
                self.unreadable = true;
                Ledger::new()
            }
        };
        debug!(entries = self.ledger.len(), "Loaded ledger");
    }

    /// Save the ledger to disk
    ///
    /// Refuses to replace a store that failed to load.
    pub fn save(&self) -> Result<(), BudgetError> {
        if self.unreadable {
            return Err(BudgetError::Storage(format!(
                "{} could not be read; leaving it untouched",
                self.path.display()
            )));
        }
        write_lines_atomic(&self.path, self.ledger.serialize())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.txt");
        (temp_dir, TransactionRepository::new(path))
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.load();
        assert!(repo.ledger().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut repo) = create_test_repo();
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        repo.ledger_mut()
            .add(&Transaction::new(Money::from_cents(10000), "Salary", date).unwrap())
            .unwrap();
        repo.ledger_mut()
            .add(&Transaction::new(Money::from_cents(3000), "Food", date).unwrap())
            .unwrap();
        repo.save().unwrap();

        let contents = std::fs::read_to_string(temp_dir.path().join("transactions.txt")).unwrap();
        assert_eq!(
            contents,
            "[2024-01-05] Income (Salary): +$100\n[2024-01-05] Expense (Food): -$30\n"
        );

        let mut repo2 = TransactionRepository::new(temp_dir.path().join("transactions.txt"));
        repo2.load();
        assert_eq!(repo2.ledger().serialize(), repo.ledger().serialize());
        assert_eq!(repo2.ledger().totals(), repo.ledger().totals());
    }

    #[test]
    fn test_load_replaces_memory() {
        let (temp_dir, mut repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("transactions.txt"),
            "[2024-02-01] Expense (Rent): -$500\n",
        )
        .unwrap();

        repo.load();
        repo.load();
        assert_eq!(repo.ledger().len(), 1);
        assert_eq!(repo.ledger().totals().expenses, Money::from_cents(50000));
    }

    #[test]
    fn test_latin1_store_survives_load_and_save() {
        let (temp_dir, mut repo) = create_test_repo();
        let path = temp_dir.path().join("transactions.txt");
        std::fs::write(
            &path,
            b"[2024-01-05] Income (Salary): +$100\n[2024-01-06] Expense (Caf\xE9): -$3\n",
        )
        .unwrap();

        repo.load();
        assert_eq!(repo.ledger().len(), 2);
        assert_eq!(repo.ledger().totals().budget, Money::from_cents(9700));

        let date = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        repo.ledger_mut()
            .add(&Transaction::new(Money::from_cents(100), "Food", date).unwrap())
            .unwrap();
        repo.save().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("[2024-01-05] Income (Salary): +$100\n"));
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_unreadable_store_is_not_overwritten() {
        let (temp_dir, _) = create_test_repo();
        // A directory where the store should be cannot be read as lines
        let path = temp_dir.path().join("transactions.txt");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep.txt"), "precious").unwrap();

        let mut repo = TransactionRepository::new(path.clone());
        repo.load();
        assert!(repo.ledger().is_empty());
        assert!(matches!(repo.save(), Err(BudgetError::Storage(_))));
        assert!(path.join("keep.txt").exists());
    }
}
