//! Budget goal display formatting
//!
//! Renders goals next to recorded spending as a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::GoalProgress;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Goal")]
    goal: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

impl From<&GoalProgress> for GoalRow {
    fn from(progress: &GoalProgress) -> Self {
        let remaining = if progress.is_over() {
            format!("${} (over)", progress.remaining)
        } else {
            format!("${}", progress.remaining)
        };

        Self {
            category: progress.category.clone(),
            goal: format!("${}", progress.goal),
            spent: format!("${}", progress.spent),
            remaining,
        }
    }
}

/// Format every goal with its spending as a table
pub fn format_goal_report(progress: &[GoalProgress]) -> String {
    if progress.is_empty() {
        return "No budget goals set.\n".to_string();
    }

    let rows: Vec<GoalRow> = progress.iter().map(GoalRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}
