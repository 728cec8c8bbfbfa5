//! Transaction CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use tracing::warn;

use super::parse_date;
use crate::display::{format_budget_label, format_register, format_totals};
use crate::error::BudgetResult;
use crate::services::FilterQuery;
use crate::session::BudgetSession;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction (Salary is income, everything else is an expense)
    Add {
        /// Positive amount (e.g., "30" or "12.34")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// List recorded transactions
    List {
        /// Case-insensitive text to look for
        #[arg(short, long)]
        search: Option<String>,
        /// Earliest date to include (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
        /// Latest date to include (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        to: Option<NaiveDate>,
    },

    /// Show income, expenses and the running budget
    Totals,

    /// Remove every transaction
    Clear,
}

/// Handle a transaction command
pub fn handle_transaction_command(
    session: &mut BudgetSession,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            date,
        } => {
            if !category.trim().is_empty() && !session.categories().contains(&category) {
                warn!(category = %category, "Category is not registered");
                eprintln!(
                    "Warning: '{}' is not a registered category. Run 'budget category add' to register it.",
                    category
                );
            }

            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let totals = session.add_transaction(&amount, &category, date)?;

            println!("Transaction added successfully");
            println!("{}", format_budget_label(&totals));
        }

        TransactionCommands::List { search, from, to } => {
            let mut query = FilterQuery::everything();
            if let Some(text) = search {
                query = query.text(text);
            }
            if let Some(start) = from {
                query = query.since(start);
            }
            if let Some(end) = to {
                query = query.until(end);
            }

            let visible = session.filter(&query);
            print!("{}", format_register(session.ledger(), &visible));
        }

        TransactionCommands::Totals => {
            print!("{}", format_totals(&session.totals()));
        }

        TransactionCommands::Clear => {
            let totals = session.clear_all();
            println!("Transaction list cleared");
            println!("{}", format_budget_label(&totals));
        }
    }

    Ok(())
}
