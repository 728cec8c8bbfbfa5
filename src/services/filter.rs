//! Filter engine
//!
//! Evaluates a text + date range query against the ledger and produces an
//! inclusion set over display order. The ledger is never modified; hiding an
//! entry is purely a property of the returned set.

use chrono::NaiveDate;

use crate::models::transaction::line_date;
use crate::models::{Ledger, LedgerEntry};

/// A search query over rendered ledger lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    /// Case-insensitive substring to look for; empty matches everything
    pub text: String,
    /// First date included
    pub start_date: NaiveDate,
    /// Last date included
    pub end_date: NaiveDate,
}

impl FilterQuery {
    pub fn new(text: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            text: text.into(),
            start_date,
            end_date,
        }
    }

    /// Empty text over the widest possible date range
    pub fn everything() -> Self {
        Self::new("", NaiveDate::MIN, NaiveDate::MAX)
    }

    /// Replace the search text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Restrict the range start
    pub fn since(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Restrict the range end
    pub fn until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    /// Check a single rendered line
    ///
    /// Lines without a leading `[yyyy-MM-dd]` date never satisfy the date
    /// range.
    pub fn matches(&self, line: &str) -> bool {
        let needle = self.text.to_lowercase();
        self.matches_lowered(line, &needle)
    }

    fn matches_lowered(&self, line: &str, needle: &str) -> bool {
        let haystack = line.to_lowercase();
        let matches_search = haystack.contains(needle);
        let matches_date = line_date(&haystack)
            .map(|date| self.start_date <= date && date <= self.end_date)
            .unwrap_or(false);

        matches_search && matches_date
    }
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self::everything()
    }
}

/// Which ledger entries a query includes, indexed by display position
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InclusionSet {
    included: Vec<bool>,
}

impl InclusionSet {
    /// Whether the entry at `index` is visible
    pub fn is_included(&self, index: usize) -> bool {
        self.included.get(index).copied().unwrap_or(false)
    }

    /// Indices of visible entries, in display order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.included
            .iter()
            .enumerate()
            .filter_map(|(i, &included)| included.then_some(i))
    }

    /// Number of visible entries
    pub fn count(&self) -> usize {
        self.included.iter().filter(|&&included| included).count()
    }

    /// Number of entries the set covers
    pub fn len(&self) -> usize {
        self.included.len()
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }

    /// The bitmap itself
    pub fn as_slice(&self) -> &[bool] {
        &self.included
    }

    /// Pair each visible entry with its index
    pub fn visible<'l>(
        &'l self,
        ledger: &'l Ledger,
    ) -> impl Iterator<Item = (usize, &'l LedgerEntry)> + 'l {
        self.indices()
            .filter_map(move |i| ledger.entries().get(i).map(|entry| (i, entry)))
    }
}

/// Evaluate a query against every ledger entry
pub fn filter(ledger: &Ledger, query: &FilterQuery) -> InclusionSet {
    let needle = query.text.to_lowercase();
    let included = ledger
        .entries()
        .iter()
        .map(|entry| query.matches_lowered(entry.line(), &needle))
        .collect();

    InclusionSet { included }
}
