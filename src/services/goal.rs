//! Budget goal service
//!
//! Sets goals and reports them against recorded spending.

use serde::Serialize;
use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::goal::GoalValidationError;
use crate::models::{BudgetGoals, Ledger, Money};
use crate::storage::Storage;

/// Service for budget goal management
pub struct GoalService<'a> {
    storage: &'a mut Storage,
}

/// A goal next to what has been spent in its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub category: String,
    pub goal: Money,
    pub spent: Money,
    /// Goal minus spent; negative once the goal is exceeded
    pub remaining: Money,
}

impl GoalProgress {
    pub fn is_over(&self) -> bool {
        self.remaining.is_negative()
    }
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Set or overwrite a category's goal
    pub fn set_budget_goal(&mut self, category: &str, amount: Money) -> BudgetResult<()> {
        self.storage
            .goals
            .goals_mut()
            .set_goal(category, amount)
            .map_err(|GoalValidationError::OutOfRange(amount)| {
                BudgetError::goal_out_of_range(amount)
            })?;
        debug!(category, %amount, "Set budget goal");
        Ok(())
    }
}

/// Pair each goal with the expenses recorded under its category
pub fn goal_progress(goals: &BudgetGoals, ledger: &Ledger) -> Vec<GoalProgress> {
    goals
        .iter()
        .map(|(category, goal)| {
            let spent = ledger.spent_in(category);
            GoalProgress {
                category: category.to_string(),
                goal,
                spent,
                remaining: goal - spent,
            }
        })
        .collect()
}
