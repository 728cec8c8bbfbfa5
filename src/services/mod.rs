//! Service layer for the budget planner
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input validation and derived views such as filtering and goal
//! progress.

pub mod category;
pub mod filter;
pub mod goal;
pub mod transaction;

pub use category::CategoryService;
pub use filter::{filter, FilterQuery, InclusionSet};
pub use goal::{goal_progress, GoalProgress, GoalService};
pub use transaction::TransactionService;
