//! Configuration for the triage CLI.
//!
//! The only persistent state is the REPL history, kept in the state
//! directory:
//!
//! ```text
//! ~/.triage/
//! └── history.txt
//! ```
//!
//! # Environment Variables
//!
//! - `TRIAGE_STATE_DIR`: Override the state directory
//! - `RUST_LOG`: Override the log filter set by `-v`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable for custom state directory.
pub const STATE_DIR_ENV: &str = "TRIAGE_STATE_DIR";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".triage";

const HISTORY_FILE: &str = "history.txt";

/// Get the default state directory.
///
/// `~/.triage` if a home directory is available, otherwise `.triage` in the
/// current directory.
pub fn default_state_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(DEFAULT_STATE_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
}

/// Get the REPL history file inside `state_dir`.
pub fn history_path(state_dir: &Path) -> PathBuf {
    state_dir.join(HISTORY_FILE)
}

/// Create the state directory if it does not exist.
pub fn ensure_state_dir(state_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(state_dir)
}
