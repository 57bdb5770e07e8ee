//! Command-line force builder.
//!
//! Composition root that wires content loading, the roster engine and the
//! renderers together:
//! 1. Configuration from `.env`, the environment and flags
//! 2. Logging (stderr, optional per-session file)
//! 3. Subcommand dispatch
//!
//! # Examples
//!
//! ```bash
//! force-builder catalog --faction british_army
//! force-builder build sample --format text
//! FORCE_DATA_DIR=./data force-builder build cavalry_screen --strict
//! ```

mod commands;
mod config;
mod dirs;
mod export;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Build, ListCatalog};

use crate::config::CliConfig;

/// Napoleonic skirmish force builder
#[derive(Parser)]
#[command(name = "force-builder")]
#[command(about = "Build and check Blood & Bayonets forces", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding catalog.ron, config.toml and builds/
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Also write logs to a per-session file
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Replay a build script and print the roster
    Build(Build),

    /// List factions and their units
    Catalog(ListCatalog),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for FORCE_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if cli.log_file {
        config.log_to_file = true;
    }

    let _guard = logging::setup_logging(&config)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "configuration resolved");

    match cli.command {
        Command::Build(cmd) => cmd.execute(&config),
        Command::Catalog(cmd) => cmd.execute(&config),
    }
}
