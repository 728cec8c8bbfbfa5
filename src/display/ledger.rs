//! Ledger display formatting
//!
//! The register shows stored lines exactly as they are kept on disk.

use crate::models::{Ledger, Totals};
use crate::services::InclusionSet;

/// Format the visible part of the ledger, one line per entry
pub fn format_register(ledger: &Ledger, visible: &InclusionSet) -> String {
    let mut output = String::new();

    for (_, entry) in visible.visible(ledger) {
        output.push_str(entry.line());
        output.push('\n');
    }

    if output.is_empty() {
        return "No transactions found.\n".to_string();
    }

    if visible.count() < ledger.len() {
        output.push_str(&format!(
            "({} of {} transactions shown)\n",
            visible.count(),
            ledger.len()
        ));
    }

    output
}

/// The running balance label
pub fn format_budget_label(totals: &Totals) -> String {
    format!("Total Budget: ${}", totals.budget)
}

/// Income, expenses and balance
pub fn format_totals(totals: &Totals) -> String {
    format!(
        "Income:   ${}\nExpenses: ${}\n{}\n",
        totals.income,
        totals.expenses,
        format_budget_label(totals)
    )
}
