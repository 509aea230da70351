//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;

/// Triage - hospital waiting room priority queue
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to state directory (holds REPL history)
    #[arg(short, long, env = config::STATE_DIR_ENV)]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start interactive REPL mode
    Repl,

    /// Execute a file of triage commands
    Run {
        /// File with one command per line
        #[arg(required = true)]
        file: PathBuf,

        /// Print the patients still waiting as JSON afterwards
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Returns the state directory path, using default if not specified.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(config::default_state_dir)
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
