//! # Todo List
//!
//! A named, ordered collection of [`Todo`] items.
//!
//! ## Operation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      TodoList Operations                                │
//! │                                                                         │
//! │  Grow        add, extend, add_value (untyped boundary)                 │
//! │  Shrink      shift, pop, remove_at                                     │
//! │  Access      first, last, item_at, resolve_index, find_by_title        │
//! │  Mark        mark_done_at, mark_undone_at, mark_all_done,              │
//! │              mark_all_undone, mark_done_by_title,                      │
//! │              mark_undone_by_title                                      │
//! │  Query       len, all_done, done_count                                 │
//! │  Derive      select, all_done_items, all_not_done_items                │
//! │  Walk        iter, each, to_vec                                        │
//! │  Render      Display  →  "---- title ----\n[ ] a\n[X] b"               │
//! │              (empty list → "---- title ----\n")                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every element is a `Todo`. Typed callers get this from the compiler;
//!   [`TodoList::add_value`] checks untyped input at runtime.
//! - Positions have no gaps: index `i` is always the `i`-th surviving item.
//! - A failed operation leaves the list unchanged.
//!
//! The list owns its sequence but not the items: callers may keep handles
//! to items before, during and after membership.
//!
//! ```rust
//! use todo_core::{Todo, TodoList};
//!
//! let mut list = TodoList::new("Today's Todos");
//! list.add(Todo::new("Buy milk").unwrap());
//! list.add(Todo::new("Clean room").unwrap());
//! list.add(Todo::new("Go to gym").unwrap());
//!
//! list.mark_done_at(1).unwrap();
//!
//! assert_eq!(
//!     list.to_string(),
//!     "---- Today's Todos ----\n[ ] Buy milk\n[X] Clean room\n[ ] Go to gym"
//! );
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::error::TodoResult;
use crate::iteration;
use crate::todo::{Todo, TodoRecord};
use crate::validation::{out_of_range, validate_index};

// =============================================================================
// List Snapshot
// =============================================================================

/// Serializable copy of a list: its title and the records of its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSnapshot {
    pub title: String,

    #[serde(default)]
    pub todos: Vec<TodoRecord>,
}

// =============================================================================
// Todo List
// =============================================================================

/// An ordered collection of todos with a title.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    title: String,
    todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new(title: impl Into<String>) -> Self {
        TodoList {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    // -------------------------------------------------------------------------
    // Size
    // -------------------------------------------------------------------------

    /// Number of items in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    // -------------------------------------------------------------------------
    // Grow / Shrink
    // -------------------------------------------------------------------------

    /// Appends a todo to the end of the list.
    ///
    /// This is the only way items enter a list; everything else
    /// (`extend`, `add_value`, imports) funnels through here.
    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Removes and returns the first item, or `None` when empty.
    pub fn shift(&mut self) -> Option<Todo> {
        if self.todos.is_empty() {
            return None;
        }
        Some(self.todos.remove(0))
    }

    /// Removes and returns the last item, or `None` when empty.
    pub fn pop(&mut self) -> Option<Todo> {
        self.todos.pop()
    }

    /// Removes the item found at `idx` and returns it.
    ///
    /// The item is resolved by position first and then removed by identity:
    /// exactly one element goes away, even if other items have equal
    /// contents or the same item was added more than once.
    pub fn remove_at(&mut self, idx: usize) -> TodoResult<Todo> {
        let target = self.item_at(idx)?.clone();
        let position = self
            .todos
            .iter()
            .position(|todo| todo.is_same(&target))
            .ok_or_else(|| out_of_range(idx, self.todos.len()))?;
        Ok(self.todos.remove(position))
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    /// Returns the item at `idx`, failing with `IndexOutOfRange` past the end.
    pub fn item_at(&self, idx: usize) -> TodoResult<&Todo> {
        self.todos
            .get(idx)
            .ok_or_else(|| out_of_range(idx, self.todos.len()))
    }

    /// Checks a signed position coming from outside the program (CLI
    /// arguments, JSON) against the current length.
    ///
    /// ```rust
    /// use todo_core::{Todo, TodoList};
    ///
    /// let mut list = TodoList::new("Chores");
    /// list.add(Todo::new("Dishes").unwrap());
    ///
    /// assert_eq!(list.resolve_index(0).unwrap(), 0);
    /// assert!(list.resolve_index(-1).is_err());
    /// assert!(list.resolve_index(1).is_err());
    /// ```
    pub fn resolve_index(&self, idx: i64) -> TodoResult<usize> {
        validate_index(idx, self.todos.len())
    }

    /// Returns the first item whose title equals `title` exactly.
    pub fn find_by_title(&self, title: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.has_title(title))
    }

    // -------------------------------------------------------------------------
    // Mark
    // -------------------------------------------------------------------------
    // Marking changes item state, not list structure, so these take &self.

    pub fn mark_done_at(&self, idx: usize) -> TodoResult<()> {
        self.item_at(idx)?.mark_done();
        Ok(())
    }

    pub fn mark_undone_at(&self, idx: usize) -> TodoResult<()> {
        self.item_at(idx)?.mark_undone();
        Ok(())
    }

    pub fn mark_all_done(&self) {
        self.each(Todo::mark_done);
    }

    pub fn mark_all_undone(&self) {
        self.each(Todo::mark_undone);
    }

    /// Marks every item titled `title` as done and returns how many matched.
    pub fn mark_done_by_title(&self, title: &str) -> usize {
        let mut marked = 0;
        self.each(|todo| {
            if todo.has_title(title) {
                todo.mark_done();
                marked += 1;
            }
        });
        marked
    }

    /// Marks every item titled `title` as not done and returns how many
    /// matched.
    pub fn mark_undone_by_title(&self, title: &str) -> usize {
        let mut marked = 0;
        self.each(|todo| {
            if todo.has_title(title) {
                todo.mark_undone();
                marked += 1;
            }
        });
        marked
    }

    // -------------------------------------------------------------------------
    // Query
    // -------------------------------------------------------------------------

    /// True when every item is done. An empty list is vacuously done.
    pub fn all_done(&self) -> bool {
        self.todos.iter().all(Todo::is_done)
    }

    pub fn done_count(&self) -> usize {
        iteration::reduce(&self.todos, 0, |count, todo| {
            if todo.is_done() {
                count + 1
            } else {
                count
            }
        })
    }

    // -------------------------------------------------------------------------
    // Derive
    // -------------------------------------------------------------------------

    /// Returns a new list with the same title holding the items that match
    /// `predicate`, in their original order.
    ///
    /// The new list shares items with this one: marking an item in either
    /// list is visible in both.
    pub fn select<F>(&self, predicate: F) -> TodoList
    where
        F: FnMut(&Todo) -> bool,
    {
        let mut list = TodoList::new(self.title.clone());
        list.extend(iteration::select(&self.todos, predicate));
        list
    }

    pub fn all_done_items(&self) -> TodoList {
        self.select(Todo::is_done)
    }

    pub fn all_not_done_items(&self) -> TodoList {
        self.select(|todo| !todo.is_done())
    }

    // -------------------------------------------------------------------------
    // Walk
    // -------------------------------------------------------------------------

    /// Iterates over the items in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.todos.iter(),
        }
    }

    /// Calls `visit` once per item, in order, and returns the list for
    /// chaining.
    ///
    /// ```rust
    /// use todo_core::{Todo, TodoList};
    ///
    /// let mut list = TodoList::new("Errands");
    /// list.add(Todo::new("Post office").unwrap());
    /// list.add(Todo::new("Bank").unwrap());
    ///
    /// let mut titles = Vec::new();
    /// let done = list
    ///     .each(|todo| titles.push(todo.title()))
    ///     .all_done();
    ///
    /// assert_eq!(titles, ["Post office", "Bank"]);
    /// assert!(!done);
    /// ```
    pub fn each<F>(&self, mut visit: F) -> &Self
    where
        F: FnMut(&Todo),
    {
        for todo in &self.todos {
            visit(todo);
        }
        self
    }

    /// Returns the items as a new `Vec`.
    ///
    /// The handles still point at the listed items, but changing the
    /// returned `Vec` itself never affects the list.
    pub fn to_vec(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    // -------------------------------------------------------------------------
    // Snapshots
    // -------------------------------------------------------------------------

    /// Copies the current title and item fields into a serializable form.
    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            title: self.title.clone(),
            todos: self.todos.iter().map(Todo::snapshot).collect(),
        }
    }

    /// Builds a list of fresh items from a snapshot.
    ///
    /// Fails on the first record with an invalid title; no list is produced.
    pub fn from_snapshot(snapshot: ListSnapshot) -> TodoResult<Self> {
        let todos = snapshot
            .todos
            .into_iter()
            .map(Todo::from_record)
            .collect::<TodoResult<Vec<_>>>()?;

        let mut list = TodoList::new(snapshot.title);
        list.extend(todos);
        Ok(list)
    }
}

impl Extend<Todo> for TodoList {
    fn extend<I: IntoIterator<Item = Todo>>(&mut self, iter: I) {
        for todo in iter {
            self.add(todo);
        }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TodoList {
    /// Header line, then the items joined by newlines. An empty list is
    /// just the header and its newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- {} ----", self.title)?;
        for (i, todo) in self.todos.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", todo)?;
        }
        Ok(())
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Borrowing iterator over the items of a [`TodoList`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Todo>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Todo;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

// =============================================================================
// Unit Tests
// =============================================================================
