use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_planner::cli::{
    handle_category_command, handle_goal_command, handle_transaction_command, CategoryCommands,
    GoalCommands, TransactionCommands,
};
use budget_planner::config::paths::DATA_DIR_ENV;
use budget_planner::config::{BudgetPaths, Settings};
use budget_planner::logging::init_tracing;
use budget_planner::session::BudgetSession;
use budget_planner::storage::initialize_storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker",
    long_about = "Track dated income and expenses, keep a list of spending \
                  categories and compare spending against per-category goals. \
                  Data is kept as plain text files in the data directory."
)]
struct Cli {
    /// Directory holding the data files
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default categories
    Init,

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => BudgetPaths::with_base_dir(dir),
        None => BudgetPaths::new(),
    };
    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("Budget Planner - personal budget tracker");
            println!();
            println!("Run 'budget --help' for usage information.");
            return Ok(());
        }
    };

    match command {
        Commands::Init => {
            println!("Initializing budget data at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'budget category list' to see the default categories.");
            return Ok(());
        }
        Commands::Config => {
            println!("Budget Planner Configuration");
            println!("============================");
            println!("Data directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Categories file:   {}", paths.categories_file().display());
            println!("Goals file:        {}", paths.goals_file().display());
            println!();
            println!("Settings:");
            println!("  Persist goals: {}", settings.persist_goals);
            return Ok(());
        }
        _ => {}
    }

    let mut session = BudgetSession::new(paths, &settings);
    session.load_all();

    let result = match command {
        Commands::Transaction(cmd) => handle_transaction_command(&mut session, cmd),
        Commands::Category(cmd) => handle_category_command(&mut session, cmd),
        Commands::Goal(cmd) => handle_goal_command(&mut session, cmd),
        Commands::Init | Commands::Config => Ok(()),
    };

    // A failed save never discards the outcome of the command.
    if let Err(e) = session.save_all() {
        tracing::warn!(error = %e, "Failed to save budget data");
        eprintln!("Warning: {}", e);
    }

    result?;
    Ok(())
}
