//! Budget goal CLI commands

use clap::Subcommand;

use crate::display::format_goal_report;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::session::BudgetSession;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Set the spending goal for a category
    Set {
        /// Category name
        category: String,
        /// Goal amount between 0 and 1000000
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the goal for one category
    Show {
        /// Category name
        category: String,
    },

    /// Compare every goal with recorded spending
    List,
}

/// Handle a goal command
pub fn handle_goal_command(session: &mut BudgetSession, cmd: GoalCommands) -> BudgetResult<()> {
    match cmd {
        GoalCommands::Set { category, amount } => {
            let goal = Money::parse(&amount).map_err(|e| {
                BudgetError::Validation(format!("Invalid goal amount '{}': {}", amount, e))
            })?;
            session.set_budget_goal(&category, goal)?;
            println!("Budget goal set for {}: ${}", category, goal);
        }

        GoalCommands::Show { category } => match session.get_goal(&category) {
            Some(goal) => println!("Budget goal for {}: ${}", category, goal),
            None => println!("No budget goal set for {}", category),
        },

        GoalCommands::List => {
            print!("{}", format_goal_report(&session.goal_progress()));
        }
    }

    Ok(())
}
