//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget session.

pub mod category;
pub mod goal;
pub mod transaction;

use chrono::NaiveDate;

use crate::models::transaction::LINE_DATE_FORMAT;

pub use category::{handle_category_command, CategoryCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

/// clap value parser for `YYYY-MM-DD` dates
pub fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), LINE_DATE_FORMAT)
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", input))
}
