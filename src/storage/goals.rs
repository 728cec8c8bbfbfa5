//! Budget goal repository for JSON storage
//!
//! Goals only reach disk when persistence is enabled in the settings. When it
//! is off, loading leaves the table empty and saving is a no-op.

use std::path::PathBuf;

use crate::error::BudgetError;
use crate::models::BudgetGoals;

use super::file_io::{read_json, write_json_atomic};

pub struct GoalRepository {
    path: PathBuf,
    persist: bool,
    goals: BudgetGoals,
}

impl GoalRepository {
    pub fn new(path: PathBuf, persist: bool) -> Self {
        Self {
            path,
            persist,
            goals: BudgetGoals::new(),
        }
    }

    pub fn load(&mut self) -> Result<(), BudgetError> {
        self.goals = if self.persist {
            read_json(&self.path)?
        } else {
            BudgetGoals::new()
        };
        Ok(())
    }

    pub fn save(&self) -> Result<(), BudgetError> {
        if !self.persist {
            return Ok(());
        }
        write_json_atomic(&self.path, &self.goals)
    }

    pub fn goals(&self) -> &BudgetGoals {
        &self.goals
    }

    pub fn goals_mut(&mut self) -> &mut BudgetGoals {
        &mut self.goals
    }
}
