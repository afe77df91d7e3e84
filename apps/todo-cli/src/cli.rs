use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "todo",
    about = "Inspect and update todo list documents",
    version
)]
pub struct Cli {
    /// TOML config file (falls back to $TODO_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a list document
    Show {
        /// Path to the list JSON document
        file: PathBuf,

        /// Print the JSON snapshot instead of the text rendering
        #[arg(long)]
        json: bool,
    },

    /// Mark items as done
    #[command(group(ArgGroup::new("target").required(true).args(["index", "title", "all"])))]
    Done {
        file: PathBuf,

        /// Zero-based position of the item
        #[arg(long, allow_negative_numbers = true)]
        index: Option<i64>,

        /// Mark every item with exactly this title
        #[arg(long)]
        title: Option<String>,

        /// Mark every item
        #[arg(long)]
        all: bool,

        #[arg(long)]
        json: bool,
    },

    /// Mark items as not done
    #[command(group(ArgGroup::new("target").required(true).args(["index", "title", "all"])))]
    Undone {
        file: PathBuf,

        #[arg(long, allow_negative_numbers = true)]
        index: Option<i64>,

        /// Unmark every item with exactly this title
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        all: bool,

        #[arg(long)]
        json: bool,
    },

    /// Remove the item at a position
    Remove {
        file: PathBuf,

        #[arg(long, allow_negative_numbers = true)]
        index: i64,

        #[arg(long)]
        json: bool,
    },

    /// Print only done or only pending items
    #[command(group(ArgGroup::new("status").required(true).args(["done", "pending"])))]
    Filter {
        file: PathBuf,

        #[arg(long)]
        done: bool,

        #[arg(long)]
        pending: bool,

        #[arg(long)]
        json: bool,
    },

    /// Print the first item with the given title
    Find {
        file: PathBuf,

        /// Exact, case-sensitive title
        title: String,

        #[arg(long)]
        json: bool,
    },

    /// Print a generated list document
    Seed {
        /// Number of todos to generate
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// List title (defaults to the configured title)
        #[arg(long)]
        title: Option<String>,
    },
}
