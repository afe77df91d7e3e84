//! # Todo Item
//!
//! A single task: title, optional description and a completion flag.
//!
//! ## Identity vs. Contents
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Todo Handle Model                                 │
//! │                                                                         │
//! │   caller's Todo ──┐                                                     │
//! │                   ├──► Arc<Mutex<TodoRecord>>  (one item)               │
//! │   list's Todo ────┘        title / description / done                   │
//! │                                                                         │
//! │   Todo::clone()   → same item, new handle   (is_same == true)           │
//! │   Todo::new(..)   → new item                (is_same == false)          │
//! │   a == b          → equal contents          (may be different items)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A list stores handles, so marking an item through the list is visible to
//! every other handle the caller kept.
//!
//! ```rust
//! use todo_core::Todo;
//!
//! let todo = Todo::new("Buy milk").unwrap();
//! let alias = todo.clone();
//!
//! alias.mark_done();
//! assert!(todo.is_done());
//! assert_eq!(todo.to_string(), "[X] Buy milk");
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TodoResult;
use crate::validation::validate_title;

/// Marker rendered for a completed item.
pub const DONE_MARKER: char = 'X';

/// Marker rendered for an open item.
pub const UNDONE_MARKER: char = ' ';

// =============================================================================
// Todo Record
// =============================================================================

/// Plain field data of a todo, detached from any handle.
///
/// This is the serialized form: `{"title": "...", "description": "", "done": false}`.
/// `description` and `done` may be omitted or `null` when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub done: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl TodoRecord {
    /// Creates an open record with an empty description.
    pub fn new(title: impl Into<String>) -> Self {
        TodoRecord {
            title: title.into(),
            description: String::new(),
            done: false,
        }
    }
}

// =============================================================================
// Todo
// =============================================================================

/// A todo item.
///
/// Cloning a `Todo` yields another handle to the same item; use
/// [`Todo::is_same`] to test identity and `==` to compare contents.
#[derive(Clone)]
pub struct Todo {
    inner: Arc<Mutex<TodoRecord>>,
}

impl Todo {
    /// Creates an open todo with an empty description.
    ///
    /// Fails with [`ValidationError::Required`](crate::ValidationError::Required)
    /// when `title` is empty or whitespace.
    pub fn new(title: impl Into<String>) -> TodoResult<Self> {
        Self::with_description(title, "")
    }

    /// Creates an open todo with a description.
    pub fn with_description(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> TodoResult<Self> {
        let title = title.into();
        validate_title(&title)?;

        Ok(Todo::from_valid_record(TodoRecord {
            title,
            description: description.into(),
            done: false,
        }))
    }

    /// Builds a todo from a record, validating its title.
    pub fn from_record(record: TodoRecord) -> TodoResult<Self> {
        validate_title(&record.title)?;
        Ok(Todo::from_valid_record(record))
    }

    fn from_valid_record(record: TodoRecord) -> Self {
        Todo {
            inner: Arc::new(Mutex::new(record)),
        }
    }

    // A poisoned lock still holds a consistent record: every write below is a
    // single field assignment.
    fn record(&self) -> MutexGuard<'_, TodoRecord> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn title(&self) -> String {
        self.record().title.clone()
    }

    /// Replaces the title. The new title must pass the same check as
    /// construction; on failure the old title is kept.
    pub fn set_title(&self, title: impl Into<String>) -> TodoResult<()> {
        let title = title.into();
        validate_title(&title)?;
        self.record().title = title;
        Ok(())
    }

    pub fn description(&self) -> String {
        self.record().description.clone()
    }

    pub fn set_description(&self, description: impl Into<String>) {
        self.record().description = description.into();
    }

    /// Returns true if the item is complete.
    pub fn is_done(&self) -> bool {
        self.record().done
    }

    pub fn set_done(&self, done: bool) {
        self.record().done = done;
    }

    /// Marks the item complete. No-op if already done.
    pub fn mark_done(&self) {
        self.set_done(true);
    }

    /// Marks the item open again. No-op if already open.
    pub fn mark_undone(&self) {
        self.set_done(false);
    }

    /// Returns true when both handles point at the same item.
    #[inline]
    pub fn is_same(&self, other: &Todo) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns a copy of the current field values.
    pub fn snapshot(&self) -> TodoRecord {
        self.record().clone()
    }

    pub(crate) fn has_title(&self, title: &str) -> bool {
        self.record().title == title
    }
}

impl PartialEq for Todo {
    /// Structural equality: same title, description and state.
    fn eq(&self, other: &Self) -> bool {
        // Short-circuit also avoids locking the same mutex twice.
        if self.is_same(other) {
            return true;
        }
        self.snapshot() == other.snapshot()
    }
}

impl Eq for Todo {}

impl fmt::Debug for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record();
        f.debug_struct("Todo")
            .field("title", &record.title)
            .field("description", &record.description)
            .field("done", &record.done)
            .finish()
    }
}

impl fmt::Display for Todo {
    /// Renders `"[X] title"` when done, `"[ ] title"` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record();
        let marker = if record.done {
            DONE_MARKER
        } else {
            UNDONE_MARKER
        };
        write!(f, "[{}] {}", marker, record.title)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
