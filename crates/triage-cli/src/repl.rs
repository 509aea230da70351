//! Interactive REPL (Read-Eval-Print Loop) for the triage shell.

use std::io;
use std::path::{Path, PathBuf};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::{debug, warn};

use crate::command::COMMAND_HELP;
use crate::config;
use crate::error::Result;
use crate::session::{Flow, Session};

const PROMPT: &str = "triage> ";

const WELCOME: &str = "\
This is a program which will simulate a Priority Queue system
in a hospital. The program will allow you to:
- add patients according to their priority order and arrival
- see who the next patient is
- remove the patient from the queue after they are seen
- allows the user to see how many patients is on the priority queue.
- type help and press enter in order to see how to use the commands for the program.
- type quit to quit the program
";

const GOODBYE: &str = "Thank you for using the program. Have a wonderful day.";

/// Tab completion for command words.
struct CommandCompleter;

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];

        // Only the first word is a command
        if prefix.contains(char::is_whitespace) {
            return Ok((0, vec![]));
        }

        let matches: Vec<Pair> = COMMAND_HELP
            .iter()
            .filter(|help| help.name.starts_with(prefix))
            .map(|help| Pair {
                display: help.name.to_string(),
                replacement: help.name.to_string(),
            })
            .collect();

        Ok((0, matches))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

/// REPL state
pub struct Repl {
    editor: Editor<CommandCompleter, DefaultHistory>,
    session: Session,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Creates a new REPL instance.
    ///
    /// History is kept under `state_dir`; if the directory cannot be created
    /// the REPL runs without saving history.
    pub fn new(state_dir: &Path) -> Result<Self> {
        let rl_config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .auto_add_history(false)
            .build();
        let mut editor = Editor::with_config(rl_config)?;
        editor.set_helper(Some(CommandCompleter));

        let history_path = match config::ensure_state_dir(state_dir) {
            Ok(()) => Some(config::history_path(state_dir)),
            Err(e) => {
                warn!(dir = %state_dir.display(), error = %e, "History disabled");
                None
            }
        };

        if let Some(path) = history_path.as_ref().filter(|p| p.exists()) {
            if let Err(e) = editor.load_history(path) {
                debug!(error = %e, "Could not load history");
            }
        }

        Ok(Self {
            editor,
            session: Session::new(),
            history_path,
        })
    }

    /// Runs the REPL loop.
    pub fn run(&mut self) -> Result<()> {
        println!("{}", WELCOME);

        let mut stdout = io::stdout();
        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str())?;
                    }

                    match self.session.execute_line(&line, &mut stdout) {
                        Ok(Flow::Quit) => break,
                        Ok(Flow::Continue) => {}
                        Err(e) => eprintln!("Error: {}", e),
                    }
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Don't exit on Ctrl+C, just clear line
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                warn!(error = %e, "Could not save history");
            }
        }

        println!("\n{}", GOODBYE);
        Ok(())
    }
}
