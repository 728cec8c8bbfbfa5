//! Transaction ledger
//!
//! The ledger is an append-only list of entries in display order plus three
//! cached totals. Each entry keeps the exact line shown in the register and
//! written to `transactions.txt`, so lines loaded from disk survive verbatim
//! even when they are not well-formed transactions.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use super::money::Money;
use super::transaction::{line_amount, line_kind, Transaction, TransactionKind};

/// Aggregate income, expenses and net budget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    pub budget: Money,
}

impl Totals {
    /// Totals with one more contribution folded in, or `None` on overflow
    fn checked_apply(&self, kind: TransactionKind, amount: Money) -> Option<Self> {
        let mut next = *self;
        match kind {
            TransactionKind::Income => next.income = self.income.checked_add(amount)?,
            TransactionKind::Expense => next.expenses = self.expenses.checked_add(amount)?,
        }
        next.budget = next.income.checked_sub(next.expenses)?;
        Some(next)
    }
}

/// The running totals cannot represent another contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalsOverflow;

impl fmt::Display for TotalsOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ledger totals would overflow")
    }
}

impl std::error::Error for TotalsOverflow {}

/// One line of the ledger and what it contributes to the totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    line: String,
    contribution: Option<(TransactionKind, Money)>,
}

impl LedgerEntry {
    /// Entry for a newly recorded transaction
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            line: txn.to_line(),
            contribution: Some((txn.kind(), txn.amount())),
        }
    }

    /// Entry for a stored line
    ///
    /// Lines labelled Income/Expense contribute the amount after their final
    /// `:`; an unparseable amount contributes nothing.
    pub fn from_line(line: impl Into<String>) -> Self {
        let line = line.into();
        let contribution = line_kind(&line).map(|kind| {
            let amount = line_amount(&line).unwrap_or_else(|| {
                warn!(line = %line, "Could not parse amount in stored ledger line");
                Money::zero()
            });
            (kind, amount)
        });

        Self { line, contribution }
    }

    /// The rendered line
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn kind(&self) -> Option<TransactionKind> {
        self.contribution.map(|(kind, _)| kind)
    }

    /// Amount this entry adds to its kind's total
    pub fn amount(&self) -> Money {
        self.contribution
            .map(|(_, amount)| amount)
            .unwrap_or_default()
    }

    /// Parse the line back into a transaction, when it is well-formed
    pub fn transaction(&self) -> Option<Transaction> {
        Transaction::parse_line(&self.line)
    }
}

/// Ordered transaction entries with cached totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
    totals: Totals,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction and update the totals
    ///
    /// Nothing changes when the totals would overflow.
    pub fn add(&mut self, txn: &Transaction) -> Result<(), TotalsOverflow> {
        let entry = LedgerEntry::from_transaction(txn);
        self.totals = self
            .totals
            .checked_apply(txn.kind(), txn.amount())
            .ok_or(TotalsOverflow)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Append a stored line; a contribution that would overflow is dropped
    fn push_stored(&mut self, mut entry: LedgerEntry) {
        if let Some((kind, amount)) = entry.contribution {
            match self.totals.checked_apply(kind, amount) {
                Some(totals) => self.totals = totals,
                None => {
                    warn!(line = %entry.line, "Stored amount overflows the totals, ignoring it");
                    entry.contribution = None;
                }
            }
        }
        self.entries.push(entry);
    }

    /// Remove every entry and reset the totals to zero
    pub fn clear(&mut self) {
        self.entries.clear();
        self.totals = Totals::default();
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lines in display order, ready to be written one per line
    pub fn serialize(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.line.clone()).collect()
    }

    /// Rebuild a ledger from stored lines
    ///
    /// Totals are recomputed from the lines themselves; nothing else is
    /// carried in the store.
    pub fn deserialize<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ledger = Self::new();
        for line in lines {
            ledger.push_stored(LedgerEntry::from_line(line));
        }
        ledger
    }

    /// Sum of expense amounts recorded under a category
    ///
    /// Uses the same per-line kind as the totals, so a line labelled Income
    /// never counts as spending.
    pub fn spent_in(&self, category: &str) -> Money {
        self.entries
            .iter()
            .filter(|entry| entry.kind() == Some(TransactionKind::Expense))
            .filter(|entry| {
                entry
                    .transaction()
                    .is_some_and(|txn| txn.category() == category)
            })
            .map(LedgerEntry::amount)
            .fold(Money::zero(), |acc, amount| {
                acc.checked_add(amount).unwrap_or(acc)
            })
    }
}
