//! # Validation Module
//!
//! Input validation utilities for todo-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Type system                                                  │
//! │  └── TodoList only stores Todo values (static gate)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Untyped boundary (JSON import)                               │
//! │  └── Non-todo values rejected with TypeMismatch                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── Titles must be present                                            │
//! │  └── Signed indexes must land inside the list                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use todo_core::validation::{validate_index, validate_title};
//!
//! assert!(validate_title("Buy milk").is_ok());
//! assert!(validate_title("   ").is_err());
//!
//! assert_eq!(validate_index(2, 3).unwrap(), 2);
//! assert!(validate_index(-1, 3).is_err());
//! ```

use crate::error::{TodoError, TodoResult, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a todo title.
///
/// ## Rules
/// - Must not be empty
/// - Must not consist only of whitespace
///
/// The title is stored as given; surrounding whitespace is not stripped.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Index Validators
// =============================================================================

/// Validates a caller-supplied, possibly negative, position against a list
/// length and converts it to a `usize`.
///
/// ## Rules
/// - Negative indexes are rejected (no counting from the end)
/// - Index must be strictly less than `len`
pub fn validate_index(index: i64, len: usize) -> TodoResult<usize> {
    match usize::try_from(index) {
        Ok(idx) if idx < len => Ok(idx),
        _ => Err(TodoError::IndexOutOfRange { index, len }),
    }
}

/// Converts an unsigned position into the signed form carried by
/// [`TodoError::IndexOutOfRange`].
pub(crate) fn out_of_range(index: usize, len: usize) -> TodoError {
    TodoError::IndexOutOfRange {
        index: i64::try_from(index).unwrap_or(i64::MAX),
        len,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
