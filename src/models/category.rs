//! Category registry model
//!
//! Categories are plain names kept in insertion order. Names are compared by
//! exact string match and duplicates are allowed; transactions refer to
//! categories by name only, so the registry never constrains the ledger.

use std::fmt;

/// Categories installed when no persisted registry exists
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Salary",
    "Rent",
    "Food",
    "Transport",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Other",
];

/// Ordered list of known category names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the default seed list
    pub fn seeded() -> Self {
        Self {
            names: Self::seed(),
        }
    }

    /// The default seed list, in display order
    pub fn seed() -> Vec<String> {
        DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
    }

    /// Append a category name
    ///
    /// The name is stored exactly as given. Duplicates are appended again.
    pub fn add(&mut self, name: impl Into<String>) -> Result<(), CategoryValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.names.push(name);
        Ok(())
    }

    /// All names in registry order
    pub fn all(&self) -> &[String] {
        &self.names
    }

    /// Exact-match lookup
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// One name per line, in registry order
    pub fn serialize(&self) -> Vec<String> {
        self.names.clone()
    }

    /// Rebuild a registry from stored lines, preserving order
    ///
    /// Stored lines are trusted as-is, the same way the ledger keeps
    /// unrecognised lines.
    pub fn deserialize<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Check that a category name can be registered
pub fn validate_name(name: &str) -> Result<(), CategoryValidationError> {
    if name.trim().is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    if name.contains(['\n', '\r']) {
        return Err(CategoryValidationError::LineBreak);
    }

    Ok(())
}

/// Validation errors for category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    LineBreak,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::LineBreak => write!(f, "Category name cannot contain line breaks"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
