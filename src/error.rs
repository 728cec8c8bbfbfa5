//! Custom error types for the budget planner
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget planner operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors reported back to the user for inline feedback
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors (failed saves, unwritable stores)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a validation error for a rejected transaction amount
    pub fn invalid_amount(input: impl AsRef<str>) -> Self {
        Self::Validation(format!(
            "Invalid amount '{}': please enter a positive number",
            input.as_ref()
        ))
    }

    /// Create a validation error for an empty category name
    pub fn empty_category() -> Self {
        Self::Validation("Category name cannot be empty".into())
    }

    /// Create a validation error for a goal outside the accepted range
    pub fn goal_out_of_range(amount: impl std::fmt::Display) -> Self {
        Self::Validation(format!(
            "Budget goal {} is out of range (0 to 1000000)",
            amount
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget planner operations
pub type BudgetResult<T> = Result<T, BudgetError>;
