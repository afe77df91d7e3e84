//! # Error Types
//!
//! Domain-specific error types for todo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  todo-core errors (this file)                                          │
//! │  ├── TodoError        - Collection and item operation failures         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  todo-cli errors (separate crate)                                      │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → TodoError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is returned at the point of the offending call. The list is
//! left untouched when an operation fails.

use thiserror::Error;

// =============================================================================
// Todo Error
// =============================================================================

/// Errors raised by [`Todo`](crate::Todo) and [`TodoList`](crate::TodoList)
/// operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// A value that is not a todo was offered to a list.
    ///
    /// ## When This Occurs
    /// Only at the untyped boundary: [`TodoList::add_value`](crate::TodoList::add_value)
    /// and the JSON import functions. Typed callers cannot reach it.
    #[error("can only add {expected} values, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// Positional access outside `[0, len)`.
    #[error("index {index} is out of range for a list of {len} items")]
    IndexOutOfRange { index: i64, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field holds a value of the wrong shape.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with TodoError.
pub type TodoResult<T> = Result<T, TodoError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TodoError::IndexOutOfRange { index: 100, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 100 is out of range for a list of 3 items"
        );

        let err = TodoError::TypeMismatch {
            expected: "todo",
            found: "string".to_string(),
        };
        assert_eq!(err.to_string(), "can only add todo values, found string");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::InvalidFormat {
            field: "done".to_string(),
            reason: "expected boolean, found string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "done has invalid format: expected boolean, found string"
        );
    }

    #[test]
    fn test_validation_converts_to_todo_error() {
        let validation_err = ValidationError::Required {
            field: "title".to_string(),
        };
        let todo_err: TodoError = validation_err.into();
        assert!(matches!(todo_err, TodoError::Validation(_)));
    }
}
