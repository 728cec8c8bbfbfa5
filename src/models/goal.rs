//! Budget goal model
//!
//! A goal is a target amount attached to a category name. Goals are
//! independent of recorded spending and of the category registry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::money::Money;

/// Largest accepted goal (1,000,000.00)
pub const MAX_GOAL: Money = Money::from_cents(100_000_000);

/// Category name -> goal amount. Setting a goal overwrites any previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetGoals {
    goals: BTreeMap<String, Money>,
}

impl BudgetGoals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the goal for a category
    ///
    /// Accepts amounts in `[0, 1_000_000]`, both ends inclusive.
    pub fn set_goal(
        &mut self,
        category: impl Into<String>,
        amount: Money,
    ) -> Result<(), GoalValidationError> {
        if amount.is_negative() || amount > MAX_GOAL {
            return Err(GoalValidationError::OutOfRange(amount));
        }

        self.goals.insert(category.into(), amount);
        Ok(())
    }

    /// Get the goal for a category, if one was ever set
    pub fn get_goal(&self, category: &str) -> Option<Money> {
        self.goals.get(category).copied()
    }

    /// Iterate goals ordered by category name
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.goals.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    OutOfRange(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(amount) => write!(
                f,
                "Budget goal {} is out of range (0 to {})",
                amount, MAX_GOAL
            ),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut goals = BudgetGoals::new();
        assert!(goals.set_goal("Food", Money::from_cents(150_000_000)).is_err());
        goals.set_goal("Food", Money::from_cents(20000)).unwrap();

        assert_eq!(goals.get_goal("Food"), Some(Money::from_cents(20000)));
        assert_eq!(goals.get_goal("Rent"), None);
    }

    #[test]
    fn test_bounds_inclusive() {
        let mut goals = BudgetGoals::new();
        goals.set_goal("Zero", Money::zero()).unwrap();
        goals.set_goal("Max", MAX_GOAL).unwrap();

        assert_eq!(goals.get_goal("Zero"), Some(Money::zero()));
        assert_eq!(goals.get_goal("Max"), Some(MAX_GOAL));
        assert!(goals
            .set_goal("Over", MAX_GOAL + Money::from_cents(1))
            .is_err());
        assert!(goals.set_goal("Under", Money::from_cents(-1)).is_err());
        assert_eq!(goals.len(), 2);
    }

    #[test]
    fn test_last_write_wins() {
        let mut goals = BudgetGoals::new();
        goals.set_goal("Food", Money::from_cents(100)).unwrap();
        goals.set_goal("Food", Money::from_cents(300)).unwrap();
        assert_eq!(goals.get_goal("Food"), Some(Money::from_cents(300)));
        assert_eq!(goals.len(), 1);
    }

    #[test]
    fn test_failed_set_keeps_previous() {
        let mut goals = BudgetGoals::new();
        goals.set_goal("Food", Money::from_cents(100)).unwrap();
        assert!(goals.set_goal("Food", Money::from_cents(-100)).is_err());
        assert_eq!(goals.get_goal("Food"), Some(Money::from_cents(100)));
    }

    #[test]
    fn test_serialization_keeps_absence() {
        let mut goals = BudgetGoals::new();
        goals.set_goal("Food", Money::from_cents(20000)).unwrap();

        let json = serde_json::to_string(&goals).unwrap();
        assert_eq!(json, r#"{"Food":20000}"#);

        let restored: BudgetGoals = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.get_goal("Food"), Some(Money::from_cents(20000)));
        assert_eq!(restored.get_goal("Rent"), None);
    }
}
