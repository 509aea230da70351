//! Error types for the triage shell.

use std::io;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Problems with a command typed at the prompt or read from a file.
///
/// These never end a session; they are reported and the next line is read.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Blank line.
    #[error("no command given.")]
    NoCommand,

    /// First word is not a known command.
    #[error("unrecognized command: {0}")]
    UnrecognizedCommand(String),

    /// `add` with nothing after it.
    #[error("no priority code given.")]
    NoPriorityCode,

    /// `add` whose code is not a priority keyword.
    #[error("invalid priority code: {0}")]
    InvalidPriority(String),

    /// `add` with an empty name, or a name that is itself a priority keyword.
    #[error("no patient name given.")]
    NoPatientName,

    /// `load` with no file name.
    #[error("no file name given.")]
    NoFileName,

    /// Command file could not be opened.
    #[error("could not open file.")]
    CouldNotOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `load` chains nested past the limit.
    #[error("command files nested more than {0} deep.")]
    LoadTooDeep(usize),
}

impl CommandError {
    /// Returns the line shown to the user at the triage prompt.
    pub fn prompt_message(&self) -> String {
        match self {
            CommandError::InvalidPriority(_) => "Invalid priority code.".to_string(),
            other => format!("Error: {}", other),
        }
    }
}

/// Errors that end a CLI command or the REPL.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Line editor failure.
    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),

    /// Waiting room could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad command or unreadable command file.
    #[error("{0}")]
    Command(#[from] CommandError),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
