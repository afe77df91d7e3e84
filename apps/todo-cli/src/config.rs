//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TODO_DEFAULT_TITLE="Weekend"                                       │
//! │     TODO_IMPORT_STRICT=false                                           │
//! │     TODO_LOG=debug                                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config ./todo.toml   or   TODO_CONFIG=./todo.toml                │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [list]
//! default_title = "Today's Todos"
//!
//! [import]
//! strict = true   # false: skip malformed entries instead of failing
//!
//! [log]
//! filter = "info"
//! ```
//!
//! `RUST_LOG`, when set, takes precedence over `[log] filter`; that check
//! lives in `main`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_PATH_ENV: &str = "TODO_CONFIG";

// =============================================================================
// Settings Sections
// =============================================================================

/// Settings for newly created lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSettings {
    /// Title used by `seed` when none is given.
    #[serde(default = "default_title")]
    pub default_title: String,
}

fn default_title() -> String {
    "Today's Todos".to_string()
}

impl Default for ListSettings {
    fn default() -> Self {
        ListSettings {
            default_title: default_title(),
        }
    }
}

/// How list documents are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    /// Reject the whole document on the first malformed entry.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_strict() -> bool {
    true
}

impl Default for ImportSettings {
    fn default() -> Self {
        ImportSettings {
            strict: default_strict(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive string.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_filter(),
        }
    }
}

// =============================================================================
// CLI Config
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub list: ListSettings,

    #[serde(default)]
    pub import: ImportSettings,

    #[serde(default)]
    pub log: LogSettings,
}

impl CliConfig {
    /// Loads configuration from the file (if any) and the process
    /// environment.
    ///
    /// An explicit `path` must exist. Without one, `TODO_CONFIG` is consulted.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => CliConfig::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Reads and parses a TOML file. Missing sections and keys fall back to
    /// defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `TODO_*` overrides using `lookup` to read variables.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(title) = lookup("TODO_DEFAULT_TITLE") {
            self.list.default_title = title;
        }

        if let Some(strict) = lookup("TODO_IMPORT_STRICT") {
            self.import.strict = parse_bool(&strict)
                .ok_or_else(|| ConfigError::InvalidValue("TODO_IMPORT_STRICT".to_string()))?;
        }

        if let Some(filter) = lookup("TODO_LOG") {
            self.log.filter = filter;
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
