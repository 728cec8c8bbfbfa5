//! Transaction service
//!
//! Provides business logic for recording transactions: amount parsing and
//! validation, appending to the ledger, and clearing it.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::transaction::TransactionValidationError;
use crate::models::{Money, Totals, Transaction};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction from user-entered amount text
    ///
    /// Fails with a validation error when the amount is not a positive
    /// number, the category is blank or spans several lines, or the totals
    /// would overflow. Nothing changes on failure.
    pub fn add_transaction(
        &mut self,
        amount_text: &str,
        category: &str,
        date: NaiveDate,
    ) -> BudgetResult<Totals> {
        let amount =
            Money::parse(amount_text).map_err(|_| BudgetError::invalid_amount(amount_text))?;

        let txn = Transaction::new(amount, category, date).map_err(|e| match e {
            TransactionValidationError::NonPositiveAmount(_) => {
                BudgetError::invalid_amount(amount_text)
            }
            TransactionValidationError::EmptyCategory => BudgetError::empty_category(),
            other @ TransactionValidationError::LineBreak => {
                BudgetError::Validation(other.to_string())
            }
        })?;

        let ledger = self.storage.transactions.ledger_mut();
        ledger.add(&txn).map_err(|_| {
            BudgetError::Validation(format!(
                "Amount {} is too large: the totals would overflow",
                amount
            ))
        })?;
        debug!(line = %txn, "Added transaction");

        Ok(ledger.totals())
    }

    /// Empty the ledger; the returned totals are always zero
    pub fn clear_all(&mut self) -> Totals {
        let ledger = self.storage.transactions.ledger_mut();
        let removed = ledger.len();
        ledger.clear();
        debug!(removed, "Cleared ledger");
        ledger.totals()
    }
}
