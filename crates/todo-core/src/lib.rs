//! # todo-core: Pure Domain Logic for the Todo List
//!
//! This crate holds the todo item, the ordered todo list and everything
//! needed to check input on its way in. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Todo List Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    todo-cli (driving program)                   │   │
//! │  │    args ──► config ──► read JSON ──► list operation ──► stdout │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ todo-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   todo    │  │   list    │  │  import   │  │ validation│  │   │
//! │  │   │   Todo    │  │ TodoList  │  │ JSON gate │  │  titles   │  │   │
//! │  │   │TodoRecord │  │ Snapshot  │  │           │  │  indexes  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`todo`] - The todo item handle and its plain record
//! - [`list`] - The ordered todo list
//! - [`import`] - Checks for untyped (JSON) input
//! - [`iteration`] - Generic reduce / select / times
//! - [`error`] - Domain error types
//! - [`validation`] - Title and index rules
//!
//! ## Example Usage
//!
//! ```rust
//! use todo_core::{Todo, TodoList};
//!
//! let milk = Todo::new("Buy milk").unwrap();
//! let mut list = TodoList::new("Today's Todos");
//! list.add(milk.clone());
//! list.add(Todo::new("Go to gym").unwrap());
//!
//! list.mark_done_at(0).unwrap();
//! assert!(milk.is_done());
//!
//! let gym = list.find_by_title("Go to gym").unwrap();
//! assert!(!gym.is_done());
//! assert!(list.find_by_title("missing").is_none());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod import;
pub mod iteration;
pub mod list;
pub mod todo;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{TodoError, TodoResult, ValidationError};
pub use list::{Iter, ListSnapshot, TodoList};
pub use todo::{Todo, TodoRecord};
