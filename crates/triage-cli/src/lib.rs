//! Triage CLI library.
//!
//! This crate provides the command-line interface, the interactive REPL and
//! the line-oriented command language that drive the patient queue.

pub mod cli;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod repl;
pub mod session;

pub use command::ReplCommand;
pub use error::{CliError, CommandError, Result};
pub use session::{Flow, Session};
