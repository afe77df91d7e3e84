//! # todo: Command Line Driver
//!
//! Reads a todo list document, applies one operation through todo-core and
//! prints the result.
//!
//! ## Usage
//! ```bash
//! todo seed --count 4 > today.json
//! todo show today.json
//! todo done today.json --index 1
//! todo filter today.json --pending --json
//! ```
//!
//! The rendered list goes to stdout; logs go to stderr.

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::CliConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    init_tracing(&config.log.filter);
    debug!(?config, "Configuration loaded");

    let output = commands::run(cli.command, &config)?;
    println!("{}", output);

    info!("Done");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Otherwise the `[log] filter` setting (default: INFO level)
fn init_tracing(configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
