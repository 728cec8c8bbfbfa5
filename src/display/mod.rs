//! Display formatting for terminal output

pub mod category;
pub mod goal;
pub mod ledger;

pub use category::format_category_list;
pub use goal::format_goal_report;
pub use ledger::{format_budget_label, format_register, format_totals};
