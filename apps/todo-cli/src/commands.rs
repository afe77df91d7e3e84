//! # Command Execution
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       One CLI Invocation                                │
//! │                                                                         │
//! │  Commands ──► load_list(file) ──► apply(Action) ──► render(Output)     │
//! │                    │                   │                  │             │
//! │               read + parse        todo-core API     text or JSON        │
//! │               strict/lenient                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `load_list` touches the filesystem; `apply` and `render` work on
//! in-memory lists.

use std::fs;
use std::path::Path;

use serde_json::Value;
use todo_core::iteration::times;
use todo_core::{ListSnapshot, Todo, TodoList, TodoRecord};
use tracing::{debug, info, warn};

use crate::cli::Commands;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Titles cycled through by `seed`.
const SAMPLE_TASKS: &[&str] = &[
    "Buy milk",
    "Clean room",
    "Go to gym",
    "Walk dogs",
    "Drink more water",
    "Call mom",
    "Pay rent",
    "Water plants",
];

// =============================================================================
// Actions
// =============================================================================

/// Which items a mark operation applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Index(i64),
    Title(String),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    Pending,
}

/// A list operation, independent of how it was requested.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Show,
    MarkDone(Target),
    MarkUndone(Target),
    Remove(i64),
    Filter(Status),
    Find(String),
}

/// What an action produced.
#[derive(Debug)]
pub enum Output {
    List(TodoList),
    Item(Todo),
}

// =============================================================================
// Entry Point
// =============================================================================

/// Runs one parsed command and returns the text to print.
pub fn run(command: Commands, config: &CliConfig) -> CliResult<String> {
    let (file, action, json) = match command {
        Commands::Seed { count, title } => {
            let title = title.unwrap_or_else(|| config.list.default_title.clone());
            info!(count, title = %title, "Generating sample list");
            let list = seed_list(&title, count)?;
            return Ok(serde_json::to_string_pretty(&list.snapshot())?);
        }
        Commands::Show { file, json } => (file, Action::Show, json),
        Commands::Done {
            file,
            index,
            title,
            all,
            json,
        } => (file, Action::MarkDone(target(index, title, all)), json),
        Commands::Undone {
            file,
            index,
            title,
            all,
            json,
        } => (file, Action::MarkUndone(target(index, title, all)), json),
        Commands::Remove { file, index, json } => (file, Action::Remove(index), json),
        Commands::Filter {
            file, done, json, ..
        } => {
            let status = if done { Status::Done } else { Status::Pending };
            (file, Action::Filter(status), json)
        }
        Commands::Find { file, title, json } => (file, Action::Find(title), json),
    };

    let mut list = load_list(&file, config)?;
    debug!(?action, "Applying action");
    let output = apply(&mut list, action)?;
    render(&output, json)
}

// Clap's argument group guarantees exactly one of these is set.
fn target(index: Option<i64>, title: Option<String>, all: bool) -> Target {
    match (index, title) {
        (Some(index), _) => Target::Index(index),
        (None, Some(title)) => Target::Title(title),
        (None, None) => {
            debug_assert!(all);
            Target::All
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Reads a list document from disk, honoring `[import] strict`.
pub fn load_list(path: &Path, config: &CliConfig) -> CliResult<TodoList> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value = serde_json::from_str(&content).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&document, config.import.strict)
}

/// Turns a parsed document into a list.
pub fn parse_document(document: &Value, strict: bool) -> CliResult<TodoList> {
    if strict {
        let list = TodoList::from_json_value(document)?;
        debug!(title = list.title(), items = list.len(), "Loaded list");
        return Ok(list);
    }

    let (list, rejected) = TodoList::from_json_value_lenient(document)?;
    for (position, err) in &rejected {
        warn!(position, error = %err, "Skipping entry");
    }
    debug!(
        title = list.title(),
        items = list.len(),
        skipped = rejected.len(),
        "Loaded list"
    );
    Ok(list)
}

// =============================================================================
// Applying
// =============================================================================

/// Applies an action to a list.
///
/// Mutating actions return the list itself; `Filter` returns a derived list
/// and `Find` a single item.
pub fn apply(list: &mut TodoList, action: Action) -> CliResult<Output> {
    match action {
        Action::Show => {}
        Action::MarkDone(Target::Index(index)) => {
            let idx = list.resolve_index(index)?;
            list.mark_done_at(idx)?;
        }
        Action::MarkDone(Target::Title(title)) => {
            let marked = list.mark_done_by_title(&title);
            if marked == 0 {
                warn!(title = %title, "No todo with that title");
            }
        }
        Action::MarkDone(Target::All) => list.mark_all_done(),
        Action::MarkUndone(Target::Index(index)) => {
            let idx = list.resolve_index(index)?;
            list.mark_undone_at(idx)?;
        }
        Action::MarkUndone(Target::Title(title)) => {
            let marked = list.mark_undone_by_title(&title);
            if marked == 0 {
                warn!(title = %title, "No todo with that title");
            }
        }
        Action::MarkUndone(Target::All) => list.mark_all_undone(),
        Action::Remove(index) => {
            let idx = list.resolve_index(index)?;
            let removed = list.remove_at(idx)?;
            info!(index = idx, title = %removed.title(), "Removed todo");
        }
        Action::Filter(Status::Done) => return Ok(Output::List(list.all_done_items())),
        Action::Filter(Status::Pending) => return Ok(Output::List(list.all_not_done_items())),
        Action::Find(title) => {
            return list
                .find_by_title(&title)
                .cloned()
                .map(Output::Item)
                .ok_or(CliError::NotFound(title));
        }
    }

    info!(
        done = list.done_count(),
        total = list.len(),
        all_done = list.all_done(),
        "List updated"
    );
    Ok(Output::List(list.clone()))
}

// =============================================================================
// Rendering
// =============================================================================

pub fn render(output: &Output, json: bool) -> CliResult<String> {
    let text = match (output, json) {
        (Output::List(list), false) => list.to_string(),
        (Output::Item(todo), false) => todo.to_string(),
        (Output::List(list), true) => serde_json::to_string_pretty(&list.snapshot())?,
        (Output::Item(todo), true) => serde_json::to_string_pretty(&todo.snapshot())?,
    };
    Ok(text)
}

// =============================================================================
// Seeding
// =============================================================================

/// Builds a sample list of `count` todos; every third one is done.
pub fn seed_list(title: &str, count: usize) -> CliResult<TodoList> {
    let mut records = Vec::new();
    times(count, |i| {
        let base = SAMPLE_TASKS[i % SAMPLE_TASKS.len()];
        let round = i / SAMPLE_TASKS.len();
        let title = if round == 0 {
            base.to_string()
        } else {
            format!("{} ({})", base, round + 1)
        };
        records.push(TodoRecord {
            title,
            description: String::new(),
            done: i % 3 == 2,
        });
    });

    let snapshot = ListSnapshot {
        title: title.to_string(),
        todos: records,
    };

    Ok(TodoList::from_snapshot(snapshot)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use todo_core::TodoError;

    fn setup() -> TodoList {
        parse_document(
            &json!({
                "title": "Today's Todos",
                "todos": [
                    { "title": "Buy milk" },
                    { "title": "Clean room" },
                    { "title": "Go to gym" }
                ]
            }),
            true,
        )
        .unwrap()
    }

    fn render_text(output: &Output) -> String {
        render(output, false).unwrap()
    }

    #[test]
    fn test_show() {
        let mut list = setup();
        let output = apply(&mut list, Action::Show).unwrap();
        assert_eq!(
            render_text(&output),
            "---- Today's Todos ----\n[ ] Buy milk\n[ ] Clean room\n[ ] Go to gym"
        );
    }

    #[test]
    fn test_mark_done_by_index() {
        let mut list = setup();
        let output = apply(&mut list, Action::MarkDone(Target::Index(1))).unwrap();
        assert_eq!(
            render_text(&output),
            "---- Today's Todos ----\n[ ] Buy milk\n[X] Clean room\n[ ] Go to gym"
        );
    }

    #[test]
    fn test_negative_index_is_rejected() {
        let mut list = setup();
        let err = apply(&mut list, Action::MarkDone(Target::Index(-1))).unwrap_err();
        assert!(matches!(
            err,
            CliError::Todo(TodoError::IndexOutOfRange { index: -1, len: 3 })
        ));
        assert_eq!(list.done_count(), 0);
    }

    #[test]
    fn test_mark_done_by_title_and_all() {
        let mut list = setup();
        apply(&mut list, Action::MarkDone(Target::Title("Go to gym".into()))).unwrap();
        assert!(list.item_at(2).unwrap().is_done());

        apply(&mut list, Action::MarkDone(Target::All)).unwrap();
        assert!(list.all_done());

        apply(&mut list, Action::MarkUndone(Target::Index(0))).unwrap();
        assert!(!list.item_at(0).unwrap().is_done());

        apply(&mut list, Action::MarkUndone(Target::All)).unwrap();
        assert_eq!(list.done_count(), 0);
    }

    #[test]
    fn test_remove() {
        let mut list = setup();
        apply(&mut list, Action::Remove(0)).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.first().unwrap().title(), "Clean room");

        assert!(apply(&mut list, Action::Remove(2)).is_err());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_filter() {
        let mut list = setup();
        list.mark_done_at(1).unwrap();

        let done = apply(&mut list, Action::Filter(Status::Done)).unwrap();
        assert_eq!(
            render_text(&done),
            "---- Today's Todos ----\n[X] Clean room"
        );

        let pending = apply(&mut list, Action::Filter(Status::Pending)).unwrap();
        assert_eq!(
            render_text(&pending),
            "---- Today's Todos ----\n[ ] Buy milk\n[ ] Go to gym"
        );
    }

    #[test]
    fn test_find() {
        let mut list = setup();
        let found = apply(&mut list, Action::Find("Go to gym".into())).unwrap();
        assert_eq!(render_text(&found), "[ ] Go to gym");

        let err = apply(&mut list, Action::Find("missing".into())).unwrap_err();
        assert!(matches!(err, CliError::NotFound(ref t) if t == "missing"));
    }

    #[test]
    fn test_render_json() {
        let mut list = setup();
        let output = apply(&mut list, Action::MarkDone(Target::Index(0))).unwrap();
        let value: Value = serde_json::from_str(&render(&output, true).unwrap()).unwrap();
        assert_eq!(value["title"], "Today's Todos");
        assert_eq!(value["todos"][0]["done"], true);
        assert_eq!(value["todos"][1]["done"], false);
    }

    #[test]
    fn test_strict_and_lenient_parsing() {
        let document = json!({
            "title": "Mixed",
            "todos": [{ "title": "ok" }, "Hi"]
        });

        assert!(matches!(
            parse_document(&document, true),
            Err(CliError::Todo(TodoError::TypeMismatch { .. }))
        ));

        let list = parse_document(&document, false).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_load_list_missing_file() {
        let path = std::env::temp_dir().join("todo-cli-list-does-not-exist.json");
        let err = load_list(&path, &CliConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[test]
    fn test_load_list_from_disk() {
        let path = std::env::temp_dir().join(format!("todo-cli-{}.json", std::process::id()));
        fs::write(&path, r#"{"title":"Disk","todos":[{"title":"Read","done":true}]}"#).unwrap();

        let list = load_list(&path, &CliConfig::default()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.to_string(), "---- Disk ----\n[X] Read");
    }

    #[test]
    fn test_seed_list() {
        let list = seed_list("Sample", 10).unwrap();
        assert_eq!(list.len(), 10);
        assert_eq!(list.title(), "Sample");
        assert_eq!(list.item_at(0).unwrap().title(), "Buy milk");
        assert_eq!(list.item_at(8).unwrap().title(), "Buy milk (2)");
        assert_eq!(list.done_count(), 3);
        assert!(list.item_at(2).unwrap().is_done());

        assert!(seed_list("Empty", 0).unwrap().is_empty());
    }

    #[test]
    fn test_seed_list_grows_with_records() {
        // Wrapping past the sample titles several times keeps titles unique
        // and never blank.
        let count = SAMPLE_TASKS.len() * 4 + 3;
        let list = seed_list("Many", count).unwrap();
        assert_eq!(list.len(), count);
        assert_eq!(
            list.last().unwrap().title(),
            format!("{} (5)", SAMPLE_TASKS[2])
        );
        assert_eq!(list.done_count(), count / 3);
    }

    #[test]
    fn test_mark_undone_by_title() {
        let mut list = setup();
        list.mark_all_done();

        let output = apply(&mut list, Action::MarkUndone(Target::Title("Clean room".into())))
            .unwrap();
        assert_eq!(
            render_text(&output),
            "---- Today's Todos ----\n[X] Buy milk\n[ ] Clean room\n[X] Go to gym"
        );

        apply(&mut list, Action::MarkUndone(Target::Title("missing".into()))).unwrap();
        assert_eq!(list.done_count(), 2);
    }

    #[test]
    fn test_filter_with_no_matches_renders_header_line() {
        let mut list = setup();
        let done = apply(&mut list, Action::Filter(Status::Done)).unwrap();
        assert_eq!(render_text(&done), "---- Today's Todos ----\n");
    }

    #[test]
    fn test_run_seed_uses_configured_title() {
        let mut config = CliConfig::default();
        config.list.default_title = "Configured".to_string();

        let text = run(
            Commands::Seed {
                count: 2,
                title: None,
            },
            &config,
        )
        .unwrap();
        let snapshot: ListSnapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(snapshot.title, "Configured");
        assert_eq!(snapshot.todos.len(), 2);
    }
}
