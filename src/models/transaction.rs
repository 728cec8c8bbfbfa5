//! Transaction model
//!
//! A transaction is an immutable (amount, category, date) record. Its kind is
//! never stored: a transaction is income exactly when its category is
//! `Salary`, and every other category is an expense.
//!
//! The module also owns the canonical line format shared by the register and
//! the `transactions.txt` store:
//!
//! ```text
//! [2024-01-05] Income (Salary): +$100
//! [2024-01-06] Expense (Food): -$30.5
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// The single category name that marks a transaction as income
pub const INCOME_CATEGORY: &str = "Salary";

/// Date format used inside ledger lines
pub const LINE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a transaction adds to or subtracts from the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Derive the kind from a category name
    pub fn for_category(category: &str) -> Self {
        if category == INCOME_CATEGORY {
            Self::Income
        } else {
            Self::Expense
        }
    }

    /// Label used in ledger lines
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Sign prefix used in ledger lines
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    amount: Money,
    category: String,
    date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// The amount must be positive and the category non-empty after trimming
    /// and free of line breaks.
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, TransactionValidationError> {
        let txn = Self {
            amount,
            category: category.into(),
            date,
        };
        txn.validate()?;
        Ok(txn)
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Income iff the category is exactly `Salary`
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::for_category(&self.category)
    }

    /// The amount with the sign of its kind applied (expenses are negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind() {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        // One transaction is exactly one stored line
        if self.category.contains(['\n', '\r']) {
            return Err(TransactionValidationError::LineBreak);
        }

        Ok(())
    }

    /// Render the canonical ledger line
    pub fn to_line(&self) -> String {
        self.to_string()
    }

    /// Parse a canonical ledger line back into a transaction
    ///
    /// Returns `None` for anything that is not a well-formed line. The kind
    /// label in the line is not trusted; the kind is re-derived from the
    /// category.
    pub fn parse_line(line: &str) -> Option<Self> {
        let rest = line.strip_prefix('[')?;
        let (date, rest) = rest.split_once("] ")?;
        let date = NaiveDate::parse_from_str(date, LINE_DATE_FORMAT).ok()?;

        let rest = rest
            .strip_prefix("Income (")
            .or_else(|| rest.strip_prefix("Expense ("))?;
        let (category, amount) = rest.rsplit_once("): ")?;
        let amount = parse_stored_amount(amount)?;

        Self::new(amount, category, date).ok()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        write!(
            f,
            "[{}] {} ({}): {}${}",
            self.date.format(LINE_DATE_FORMAT),
            kind.label(),
            self.category,
            kind.sign(),
            self.amount
        )
    }
}

/// Extract the date from a line's leading bracketed segment
///
/// Everything before the first `]`, minus its first character, must be a
/// `yyyy-MM-dd` date.
pub fn line_date(line: &str) -> Option<NaiveDate> {
    let segment = line.split(']').next().unwrap_or(line);
    let mut chars = segment.chars();
    chars.next()?;
    NaiveDate::parse_from_str(chars.as_str(), LINE_DATE_FORMAT).ok()
}

/// Determine which aggregate a stored line contributes to
///
/// Canonical lines are recognised by the label right after the date so that a
/// category such as "Income tax" cannot flip an expense into income. Free-form
/// lines fall back to a plain substring search, checking "Income" first.
pub fn line_kind(line: &str) -> Option<TransactionKind> {
    if let Some((_, rest)) = line.split_once("] ") {
        if rest.starts_with("Income (") {
            return Some(TransactionKind::Income);
        }
        if rest.starts_with("Expense (") {
            return Some(TransactionKind::Expense);
        }
    }

    if line.contains("Income") {
        Some(TransactionKind::Income)
    } else if line.contains("Expense") {
        Some(TransactionKind::Expense)
    } else {
        None
    }
}

/// Parse the signed amount after the final `:` of a line
///
/// The magnitude is returned; the kind decides which total it feeds.
pub fn line_amount(line: &str) -> Option<Money> {
    let tail = line.rsplit(':').next().unwrap_or(line);
    parse_stored_amount(tail)
}

/// Parse a stored amount such as `+$100` or `-$30.5` into its magnitude
fn parse_stored_amount(text: &str) -> Option<Money> {
    let text = text.trim();
    let text = text
        .strip_prefix(['+', '-'])
        .unwrap_or(text)
        .trim_start_matches('$');
    Money::parse(text).ok().map(|m| m.abs())
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    EmptyCategory,
    LineBreak,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Category name cannot be empty"),
            Self::LineBreak => write!(f, "Category name cannot contain line breaks"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_is_derived_from_category() {
        let salary = Transaction::new(Money::from_cents(10000), "Salary", date(2024, 1, 5)).unwrap();
        let food = Transaction::new(Money::from_cents(3000), "Food", date(2024, 1, 6)).unwrap();
        let lower = Transaction::new(Money::from_cents(3000), "salary", date(2024, 1, 6)).unwrap();

        assert_eq!(salary.kind(), TransactionKind::Income);
        assert_eq!(food.kind(), TransactionKind::Expense);
        assert_eq!(lower.kind(), TransactionKind::Expense);
        assert_eq!(food.signed_amount().cents(), -3000);
    }

    #[test]
    fn test_rejects_invalid() {
        assert_eq!(
            Transaction::new(Money::zero(), "Food", date(2024, 1, 1)),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );
        assert!(Transaction::new(Money::from_cents(-5), "Food", date(2024, 1, 1)).is_err());
        assert_eq!(
            Transaction::new(Money::from_cents(5), "  ", date(2024, 1, 1)),
            Err(TransactionValidationError::EmptyCategory)
        );
    }

    #[test]
    fn test_rejects_line_breaks_in_category() {
        for category in [
            "Food\n[2024-01-01] Income (Salary): +$999",
            "Food\r",
            "\r\nFood",
        ] {
            assert_eq!(
                Transaction::new(Money::from_cents(500), category, date(2024, 1, 1)),
                Err(TransactionValidationError::LineBreak)
            );
        }
    }

    #[test]
    fn test_line_format() {
        let income = Transaction::new(Money::from_cents(10000), "Salary", date(2024, 1, 5)).unwrap();
        let expense = Transaction::new(Money::from_cents(3050), "Food", date(2024, 1, 6)).unwrap();

        assert_eq!(income.to_line(), "[2024-01-05] Income (Salary): +$100");
        assert_eq!(expense.to_line(), "[2024-01-06] Expense (Food): -$30.5");
    }

    #[test]
    fn test_parse_line() {
        let txn = Transaction::parse_line("[2024-03-01] Expense (Kids (school)): -$12.34").unwrap();
        assert_eq!(txn.category(), "Kids (school)");
        assert_eq!(txn.amount().cents(), 1234);
        assert_eq!(txn.date(), date(2024, 3, 1));

        assert!(Transaction::parse_line("not a transaction").is_none());
        assert!(Transaction::parse_line("[2024-13-01] Expense (Food): -$1").is_none());
    }

    #[test]
    fn test_line_helpers() {
        let line = "[2024-01-06] Expense (Income tax): -$30";
        assert_eq!(line_date(line), Some(date(2024, 1, 6)));
        assert_eq!(line_kind(line), Some(TransactionKind::Expense));
        assert_eq!(line_amount(line), Some(Money::from_cents(3000)));

        assert_eq!(line_kind("bonus Income: 5"), Some(TransactionKind::Income));
        assert_eq!(line_kind("just a note"), None);
        assert_eq!(line_date("just a note"), None);
        assert_eq!(line_amount("total: lots"), None);
        assert_eq!(line_amount("Income: +$12.5"), Some(Money::from_cents(1250)));
        assert_eq!(line_amount("Expense: 7"), Some(Money::from_cents(700)));
    }
}
