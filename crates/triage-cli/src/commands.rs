//! Command handlers for CLI subcommands.

use std::io::Write;
use std::path::Path;

use tracing::info;
use triage_models::Patient;

use crate::cli::Commands;
use crate::error::Result;
use crate::session::Session;

/// Execute a non-interactive CLI command, writing output to `out`.
pub fn execute<W: Write>(command: Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Run { file, json } => cmd_run(&file, json, out),
        Commands::Repl => {
            // REPL is handled separately in main
            Ok(())
        }
    }
}

fn cmd_run<W: Write>(file: &Path, json: bool, out: &mut W) -> Result<()> {
    let mut session = Session::new();
    session.run_file(file, out)?;

    info!(
        file = %file.display(),
        waiting = session.queue().size(),
        "Command file finished"
    );

    if json {
        let waiting: Vec<&Patient> = session.queue().iter().collect();
        writeln!(out)?;
        serde_json::to_writer_pretty(&mut *out, &waiting)?;
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    use crate::error::{CliError, CommandError};

    #[test]
    fn test_run_without_json() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("cmds.txt");
        fs::write(&file, "add urgent Alice\npeek\n").unwrap();

        let mut out = Vec::new();
        execute(Commands::Run { file, json: false }, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Highest priority patient to be called next: Alice"));
        assert!(!out.contains('['));
    }

    #[test]
    fn test_run_with_json_dumps_heap_order() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("cmds.txt");
        fs::write(
            &file,
            "add urgent Alice\nadd immediate Bob\nadd immediate Carol\n",
        )
        .unwrap();

        let mut out = Vec::new();
        execute(Commands::Run { file, json: true }, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let json_start = out.find('[').unwrap();
        let waiting: Vec<Patient> = serde_json::from_str(&out[json_start..]).unwrap();
        let names: Vec<&str> = waiting.iter().map(Patient::name).collect();
        assert_eq!(names, vec!["Bob", "Alice", "Carol"]);
        assert_eq!(waiting[1].arrival_sequence(), 0);
    }

    #[test]
    fn test_run_missing_file() {
        let mut out = Vec::new();
        let result = execute(
            Commands::Run {
                file: PathBuf::from("/nonexistent/triage/cmds.txt"),
                json: false,
            },
            &mut out,
        );
        assert!(matches!(
            result,
            Err(CliError::Command(CommandError::CouldNotOpen { .. }))
        ));
    }

    #[test]
    fn test_repl_is_noop_here() {
        let mut out = Vec::new();
        execute(Commands::Repl, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
