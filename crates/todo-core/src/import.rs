//! # Untyped Import
//!
//! The one place where values of unknown shape meet a [`TodoList`].
//!
//! ## Document Shape
//! ```json
//! {
//!   "title": "Today's Todos",
//!   "todos": [
//!     { "title": "Buy milk" },
//!     { "title": "Clean room", "description": "under the bed too", "done": true }
//!   ]
//! }
//! ```
//!
//! ## Checks Per Entry
//! ```text
//! entry is not an object            → TypeMismatch { expected: "todo", found: <kind> }
//! "title" missing / null / blank    → ValidationError::Required
//! fields of the wrong type          → ValidationError::InvalidFormat (serde's message)
//! ```
//!
//! ```rust
//! use serde_json::json;
//! use todo_core::{TodoError, TodoList};
//!
//! let mut list = TodoList::new("Inbox");
//! assert!(list.add_value(&json!({ "title": "Buy milk" })).is_ok());
//!
//! let err = list.add_value(&json!("Hi")).unwrap_err();
//! assert!(matches!(err, TodoError::TypeMismatch { .. }));
//! assert_eq!(list.len(), 1);
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::error::{TodoError, TodoResult, ValidationError};
use crate::list::TodoList;
use crate::todo::{Todo, TodoRecord};

/// Name reported as the expected type in [`TodoError::TypeMismatch`].
const TODO_KIND: &str = "todo";

/// Entries skipped by a lenient import, with their position in the source
/// array.
pub type Rejected = Vec<(usize, TodoError)>;

impl TodoList {
    /// Checks an untyped value and appends it as a new todo.
    ///
    /// Returns a handle to the added item. On any error the list is unchanged.
    pub fn add_value(&mut self, value: &Value) -> TodoResult<Todo> {
        let todo = todo_from_value(value)?;
        self.add(todo.clone());
        Ok(todo)
    }

    /// Builds a list from a JSON document, all or nothing.
    pub fn from_json_value(document: &Value) -> TodoResult<Self> {
        let (mut list, entries) = split_document(document)?;
        let todos = entries
            .iter()
            .map(todo_from_value)
            .collect::<TodoResult<Vec<_>>>()?;
        list.extend(todos);
        Ok(list)
    }

    /// Builds a list from a JSON document, skipping entries that fail the
    /// checks.
    ///
    /// The document itself must still be well formed.
    pub fn from_json_value_lenient(document: &Value) -> TodoResult<(Self, Rejected)> {
        let (mut list, entries) = split_document(document)?;
        let mut rejected = Vec::new();

        for (position, entry) in entries.iter().enumerate() {
            if let Err(err) = list.add_value(entry) {
                rejected.push((position, err));
            }
        }

        Ok((list, rejected))
    }
}

/// Converts one untyped value into a todo.
///
/// After the shape and title checks, the entry is decoded through
/// [`TodoRecord`]'s `Deserialize`, the same path snapshots use.
pub fn todo_from_value(value: &Value) -> TodoResult<Todo> {
    let object = value.as_object().ok_or_else(|| TodoError::TypeMismatch {
        expected: TODO_KIND,
        found: json_kind(value).to_string(),
    })?;

    if matches!(object.get("title"), None | Some(Value::Null)) {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        }
        .into());
    }

    let record = TodoRecord::deserialize(value).map_err(|err| ValidationError::InvalidFormat {
        field: TODO_KIND.to_string(),
        reason: err.to_string(),
    })?;

    Todo::from_record(record)
}

/// Returns the JSON type name of a value, as used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn split_document(document: &Value) -> TodoResult<(TodoList, &[Value])> {
    let object = document.as_object().ok_or_else(|| TodoError::TypeMismatch {
        expected: "list document",
        found: json_kind(document).to_string(),
    })?;

    let title = match object.get("title") {
        Some(Value::String(title)) => title.clone(),
        None | Some(Value::Null) => {
            return Err(ValidationError::Required {
                field: "list title".to_string(),
            }
            .into())
        }
        Some(other) => return Err(wrong_type("list title", "string", other).into()),
    };

    let entries: &[Value] = match object.get("todos") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(entries)) => entries.as_slice(),
        Some(other) => return Err(wrong_type("todos", "array", other).into()),
    };

    Ok((TodoList::new(title), entries))
}

fn wrong_type(field: &str, expected: &str, found: &Value) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("expected {}, found {}", expected, json_kind(found)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "title": "Today's Todos",
            "todos": [
                { "title": "Buy milk" },
                { "title": "Clean room", "done": true },
                { "title": "Go to gym", "description": "leg day" }
            ]
        })
    }

    #[test]
    fn test_from_json_value() {
        let list = TodoList::from_json_value(&document()).unwrap();
        assert_eq!(
            list.to_string(),
            "---- Today's Todos ----\n[ ] Buy milk\n[X] Clean room\n[ ] Go to gym"
        );
        assert_eq!(list.item_at(2).unwrap().description(), "leg day");
    }

    #[test]
    fn test_add_value_rejects_non_todo() {
        let mut list = TodoList::from_json_value(&document()).unwrap();

        for value in [json!("Hi"), json!(42), json!([1, 2]), json!(null), json!(true)] {
            let err = list.add_value(&value).unwrap_err();
            assert!(
                matches!(err, TodoError::TypeMismatch { expected: "todo", .. }),
                "unexpected error for {}: {}",
                value,
                err
            );
            assert_eq!(list.len(), 3);
        }
    }

    #[test]
    fn test_add_value_reports_kind() {
        let mut list = TodoList::new("Inbox");
        let err = list.add_value(&json!("Hi")).unwrap_err();
        assert_eq!(err.to_string(), "can only add todo values, found string");
    }

    #[test]
    fn test_add_value_returns_shared_handle() {
        let mut list = TodoList::new("Inbox");
        let todo = list.add_value(&json!({ "title": "Walk dogs" })).unwrap();
        todo.mark_done();
        assert!(list.first().unwrap().is_done());
        assert!(list.first().unwrap().is_same(&todo));
    }

    #[test]
    fn test_entry_field_checks() {
        let missing = todo_from_value(&json!({ "description": "no title" })).unwrap_err();
        assert!(matches!(
            missing,
            TodoError::Validation(ValidationError::Required { .. })
        ));

        let blank = todo_from_value(&json!({ "title": "" })).unwrap_err();
        assert!(matches!(
            blank,
            TodoError::Validation(ValidationError::Required { .. })
        ));

        let numeric = todo_from_value(&json!({ "title": 7 })).unwrap_err();
        assert!(matches!(
            numeric,
            TodoError::Validation(ValidationError::InvalidFormat { ref field, .. }) if field == "todo"
        ));

        let done = todo_from_value(&json!({ "title": "x", "done": "yes" })).unwrap_err();
        assert!(matches!(
            done,
            TodoError::Validation(ValidationError::InvalidFormat { ref reason, .. })
                if reason.contains("boolean")
        ));

        let description = todo_from_value(&json!({ "title": "x", "description": 1 })).unwrap_err();
        assert!(matches!(
            description,
            TodoError::Validation(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_null_optional_fields_use_defaults() {
        let todo = todo_from_value(&json!({ "title": "x", "description": null, "done": null }))
            .unwrap();
        assert_eq!(todo.description(), "");
        assert!(!todo.is_done());
    }

    #[test]
    fn test_strict_import_is_all_or_nothing() {
        let doc = json!({
            "title": "Mixed",
            "todos": [{ "title": "fine" }, "Hi", { "title": "also fine" }]
        });
        assert!(matches!(
            TodoList::from_json_value(&doc),
            Err(TodoError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_lenient_import_skips_bad_entries() {
        let doc = json!({
            "title": "Mixed",
            "todos": [{ "title": "fine" }, "Hi", { "title": "also fine" }, { "done": true }]
        });
        let (list, rejected) = TodoList::from_json_value_lenient(&doc).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.item_at(1).unwrap().title(), "also fine");

        let positions: Vec<usize> = rejected.iter().map(|(pos, _)| *pos).collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn test_document_shape_checks() {
        assert!(matches!(
            TodoList::from_json_value(&json!([])),
            Err(TodoError::TypeMismatch {
                expected: "list document",
                ..
            })
        ));
        assert!(TodoList::from_json_value(&json!({ "todos": [] })).is_err());
        assert!(TodoList::from_json_value(&json!({ "title": "T", "todos": {} })).is_err());

        let empty = TodoList::from_json_value(&json!({ "title": "T" })).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.title(), "T");
    }

    #[test]
    fn test_snapshot_serializes_to_importable_json() {
        let list = TodoList::from_json_value(&document()).unwrap();
        let value = serde_json::to_value(list.snapshot()).unwrap();
        let rebuilt = TodoList::from_json_value(&value).unwrap();
        assert_eq!(rebuilt.to_string(), list.to_string());
    }
}
