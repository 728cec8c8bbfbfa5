//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::BudgetResult;
use crate::session::BudgetSession;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Register a new category
    Add {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    session: &mut BudgetSession,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(session.categories()));
        }

        CategoryCommands::Add { name } => {
            session.add_category(&name)?;
            println!("Added category: {}", name.trim());
        }
    }

    Ok(())
}
