//! A triage session: one waiting room plus the command interpreter around it.
//!
//! The session writes everything the user sees to a caller-supplied writer,
//! so the same code drives the REPL, `run <file>` and the tests.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, info, warn};
use triage_queue::PatientQueue;

use crate::command::{help_text, ReplCommand};
use crate::error::{CliError, CommandError, Result};

/// Maximum depth of `load` commands inside loaded files.
pub const MAX_LOAD_DEPTH: usize = 8;

const NO_PATIENTS: &str = "There are no patients in the waiting area.";

const LIST_HEADER: &str = "  Arrival #   Priority Code   Patient Name\n\
                           +-----------+---------------+--------------+";

/// What the caller should do after a line has been executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// The user asked to quit.
    Quit,
}

/// Interpreter state for one waiting room.
#[derive(Debug, Default)]
pub struct Session {
    queue: PatientQueue,
}

impl Session {
    /// Creates a session with an empty waiting room.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the waiting room.
    pub fn queue(&self) -> &PatientQueue {
        &self.queue
    }

    /// Executes one line typed at the prompt.
    ///
    /// Bad input is reported to `out` and does not fail; only I/O errors on
    /// `out` or inside a loaded file are returned.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        self.execute_at_depth(line, out, 0)
    }

    /// Executes every line of a command file, echoing each one first.
    ///
    /// # Errors
    ///
    /// `CommandError::CouldNotOpen` if the file cannot be opened.
    pub fn run_file<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<()> {
        self.run_file_at_depth(path, out, 0)
    }

    fn execute_at_depth<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        depth: usize,
    ) -> Result<Flow> {
        let cmd = match ReplCommand::parse(line) {
            Ok(cmd) => cmd,
            Err(e) => {
                debug!(error = %e, "Rejected command");
                writeln!(out, "{}", e.prompt_message())?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?cmd, "Parsed command");

        match cmd {
            ReplCommand::Help => write!(out, "{}", help_text())?,

            ReplCommand::Add { priority, name } => {
                let arrival = self.queue.insert(name.as_str(), priority.code());
                info!(name = %name, %priority, arrival, "Patient added");
                writeln!(out, "\nAdded patient \"{}\" to the priority system.", name)?;
            }

            ReplCommand::Peek => match self.queue.peek() {
                Ok(patient) => writeln!(
                    out,
                    "Highest priority patient to be called next: {}",
                    patient.name()
                )?,
                Err(_) => writeln!(out, "{}", NO_PATIENTS)?,
            },

            ReplCommand::Next => match self.queue.remove() {
                Ok(patient) => {
                    info!(name = %patient.name(), "Patient called");
                    writeln!(out, "This patient will now be seen: {}", patient.name())?;
                }
                Err(_) => writeln!(out, "{}", NO_PATIENTS)?,
            },

            ReplCommand::List => {
                writeln!(out, "# patients waiting: {}", self.queue.size())?;
                writeln!(out, "{}", LIST_HEADER)?;
                write!(out, "{}", self.queue.render_all())?;
            }

            ReplCommand::Load(path) => match self.run_file_at_depth(&path, out, depth) {
                Ok(()) => {}
                Err(CliError::Command(e)) => {
                    warn!(path = %path.display(), error = %e, "Command file failed");
                    writeln!(out, "{}", e.prompt_message())?;
                }
                Err(e) => return Err(e),
            },

            ReplCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn run_file_at_depth<W: Write>(
        &mut self,
        path: &Path,
        out: &mut W,
        depth: usize,
    ) -> Result<()> {
        if depth >= MAX_LOAD_DEPTH {
            return Err(CommandError::LoadTooDeep(MAX_LOAD_DEPTH).into());
        }

        let file = File::open(path).map_err(|source| CommandError::CouldNotOpen {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), depth, "Executing command file");

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            // Bytes that are not UTF-8 become U+FFFD instead of ending the file
            let raw = String::from_utf8_lossy(&buf);
            let line = raw.trim_end_matches(|c: char| c == '\n' || c == '\r');
            writeln!(out, "\ntriage> {}", line.trim_end())?;
            if self.execute_at_depth(line, out, depth + 1)? == Flow::Quit {
                warn!(path = %path.display(), "Ignoring quit inside command file");
            }
        }

        Ok(())
    }
}
