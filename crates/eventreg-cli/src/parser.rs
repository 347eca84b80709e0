//! Main CLI parser and top-level argument handling.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface for the event registration backend.
#[derive(Parser)]
#[command(name = "eventreg")]
#[command(about = "Register people for events over a small HTTP API")]
#[command(version)]
pub struct Cli {
    /// Use this database file instead of the one in the data directory
    #[arg(long, global = true, env = "EVENTREG_DATABASE")]
    pub database: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
