//! Custom error types for family-budget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for family-budget operations
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

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Generic validation errors (bad flags, unparseable input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A transaction breaks the sign/type invariant or references an unknown category
    #[error("Invalid transaction '{id}': {reason}")]
    InvalidTransaction { id: String, reason: String },

    /// A budget has a non-positive limit or negative spend
    #[error("Invalid budget for '{category}': {reason}")]
    InvalidBudget { category: String, reason: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Create an invalid transaction error
    pub fn invalid_transaction(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTransaction {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid budget error
    pub fn invalid_budget(category: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBudget {
            category: category.into(),
            reason: reason.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for snapshot files
    pub fn ledger_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Ledger",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error comes from input validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidTransaction { .. } | Self::InvalidBudget { .. }
        )
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

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for family-budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::category_not_found("Groceries");
        assert_eq!(err.to_string(), "Category not found: Groceries");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_invalid_transaction_error() {
        let err = BudgetError::invalid_transaction("7", "amount sign does not match type");
        assert_eq!(
            err.to_string(),
            "Invalid transaction '7': amount sign does not match type"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_budget_error() {
        let err = BudgetError::invalid_budget("Transport", "limit must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid budget for 'Transport': limit must be positive"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }
}
