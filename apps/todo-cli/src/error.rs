//! # CLI Error Type
//!
//! ```text
//! TodoError ───┐
//! ConfigError ─┼──► CliError ──► anyhow (main) ──► stderr, exit code 1
//! io / json ───┘
//! ```

use std::path::PathBuf;

use thiserror::Error;
use todo_core::TodoError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Todo(#[from] TodoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// `find` found no item with the requested title.
    #[error("No todo titled '{0}'")]
    NotFound(String),
}

pub type CliResult<T> = Result<T, CliError>;
