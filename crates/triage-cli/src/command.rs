//! Triage command language.
//!
//! One command per line: the first word picks the command and the rest of
//! the line, trimmed, is its argument.

use std::path::PathBuf;

use triage_models::PriorityCode;

use crate::error::CommandError;

/// Width of the usage column in the help menu.
const USAGE_WIDTH: usize = 12;

/// Help information for a command.
pub struct CommandHelp {
    /// Command word (e.g., "add").
    pub name: &'static str,
    /// Usage syntax.
    pub usage: &'static str,
    /// Description, one entry per printed line.
    pub description: &'static [&'static str],
}

/// Static help entries for all commands, in menu order.
pub static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "add",
        usage: "add <priority-code> <patient-name>",
        description: &[
            "Adds the patient to the triage system.",
            "<priority-code> must be one of the 4 accepted priority codes:",
            "    1. immediate 2. emergency 3. urgent 4. minimal",
            "<patient-name>: patient's full legal name (may contain spaces)",
        ],
    },
    CommandHelp {
        name: "next",
        usage: "next",
        description: &[
            "Announces the patient to be seen next. Takes into account the",
            "type of emergency and the patient's arrival order.",
        ],
    },
    CommandHelp {
        name: "peek",
        usage: "peek",
        description: &["Displays the patient that is next in line, but keeps in queue"],
    },
    CommandHelp {
        name: "list",
        usage: "list",
        description: &[
            "Displays the list of all patients that are still waiting",
            "in the order that they have arrived.",
        ],
    },
    CommandHelp {
        name: "load",
        usage: "load <file>",
        description: &["Reads the file and executes the command on each line"],
    },
    CommandHelp {
        name: "help",
        usage: "help",
        description: &["Displays this menu"],
    },
    CommandHelp {
        name: "quit",
        usage: "quit",
        description: &["Exits the program"],
    },
];

/// Renders the help menu.
///
/// Short usages share a line with the first description line; long ones get
/// a line of their own.
pub fn help_text() -> String {
    let indent = " ".repeat(USAGE_WIDTH);
    let mut text = String::new();

    for entry in COMMAND_HELP {
        let mut lines = entry.description.iter();
        if entry.usage.len() < USAGE_WIDTH {
            let first = lines.next().copied().unwrap_or_default();
            text.push_str(&format!("{:<width$}{}\n", entry.usage, first, width = USAGE_WIDTH));
        } else {
            text.push_str(entry.usage);
            text.push('\n');
        }
        for line in lines {
            text.push_str(&indent);
            text.push_str(line);
            text.push('\n');
        }
    }

    text
}

/// Commands understood at the triage prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Show the help menu
    Help,
    /// Add a patient to the waiting room
    Add { priority: PriorityCode, name: String },
    /// Show who is next without calling them
    Peek,
    /// Call the next patient
    Next,
    /// Show everyone still waiting
    List,
    /// Execute every line of a command file
    Load(PathBuf),
    /// End the session
    Quit,
}

impl ReplCommand {
    /// Parses one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let (cmd, arg) = split_first_word(input.trim());

        match cmd {
            "" => Err(CommandError::NoCommand),
            "help" => Ok(ReplCommand::Help),
            "add" => Self::parse_add(arg),
            "peek" => Ok(ReplCommand::Peek),
            "next" => Ok(ReplCommand::Next),
            "list" => Ok(ReplCommand::List),
            "load" => {
                if arg.is_empty() {
                    Err(CommandError::NoFileName)
                } else {
                    Ok(ReplCommand::Load(PathBuf::from(
                        shellexpand::tilde(arg).to_string(),
                    )))
                }
            }
            "quit" => Ok(ReplCommand::Quit),
            other => Err(CommandError::UnrecognizedCommand(other.to_string())),
        }
    }

    /// Parses `<priority-code> <patient-name>`.
    fn parse_add(arg: &str) -> Result<Self, CommandError> {
        let (code, name) = split_first_word(arg);

        if code.is_empty() {
            return Err(CommandError::NoPriorityCode);
        }

        // "add urgent urgent" would otherwise admit a patient named "urgent"
        if name.is_empty() || PriorityCode::is_keyword(name) {
            return Err(CommandError::NoPatientName);
        }

        let priority = code
            .parse::<PriorityCode>()
            .map_err(|e| CommandError::InvalidPriority(e.0))?;

        Ok(ReplCommand::Add {
            priority,
            name: name.to_string(),
        })
    }
}

/// Splits off the first whitespace-delimited word; the remainder is trimmed.
fn split_first_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (input, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(ReplCommand::parse("help").unwrap(), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("peek").unwrap(), ReplCommand::Peek);
        assert_eq!(ReplCommand::parse("next").unwrap(), ReplCommand::Next);
        assert_eq!(ReplCommand::parse("list").unwrap(), ReplCommand::List);
        assert_eq!(ReplCommand::parse("quit").unwrap(), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_trims_surrounding_space() {
        assert_eq!(ReplCommand::parse("   list  \r").unwrap(), ReplCommand::List);
    }

    #[test]
    fn test_parse_empty_line() {
        assert!(matches!(
            ReplCommand::parse("   "),
            Err(CommandError::NoCommand)
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        match ReplCommand::parse("dance now") {
            Err(CommandError::UnrecognizedCommand(cmd)) => assert_eq!(cmd, "dance"),
            other => panic!("Expected UnrecognizedCommand, got {:?}", other),
        }
    }

    #[test]
    fn test_commands_are_case_sensitive() {
        assert!(matches!(
            ReplCommand::parse("LIST"),
            Err(CommandError::UnrecognizedCommand(_))
        ));
    }

    #[test]
    fn test_parse_add_with_spaces_in_name() {
        let cmd = ReplCommand::parse("add   urgent    Mary  Ann Smith  ").unwrap();
        assert_eq!(
            cmd,
            ReplCommand::Add {
                priority: PriorityCode::Urgent,
                name: "Mary  Ann Smith".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add_missing_priority() {
        assert!(matches!(
            ReplCommand::parse("add"),
            Err(CommandError::NoPriorityCode)
        ));
        assert!(matches!(
            ReplCommand::parse("add    "),
            Err(CommandError::NoPriorityCode)
        ));
    }

    #[test]
    fn test_parse_add_missing_name() {
        assert!(matches!(
            ReplCommand::parse("add urgent"),
            Err(CommandError::NoPatientName)
        ));
    }

    #[test]
    fn test_parse_add_keyword_as_name() {
        assert!(matches!(
            ReplCommand::parse("add urgent minimal"),
            Err(CommandError::NoPatientName)
        ));
    }

    #[test]
    fn test_parse_add_invalid_priority() {
        match ReplCommand::parse("add severe John") {
            Err(CommandError::InvalidPriority(code)) => assert_eq!(code, "severe"),
            other => panic!("Expected InvalidPriority, got {:?}", other),
        }
    }

    #[test]
    fn test_name_checked_before_priority() {
        assert!(matches!(
            ReplCommand::parse("add severe"),
            Err(CommandError::NoPatientName)
        ));
    }

    #[test]
    fn test_parse_load() {
        assert_eq!(
            ReplCommand::parse("load cmds/day one.txt").unwrap(),
            ReplCommand::Load(PathBuf::from("cmds/day one.txt"))
        );
        assert!(matches!(
            ReplCommand::parse("load"),
            Err(CommandError::NoFileName)
        ));
    }

    #[test]
    fn test_parse_load_expands_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                ReplCommand::parse("load ~/triage.txt").unwrap(),
                ReplCommand::Load(home.join("triage.txt"))
            );
        }
    }

    #[test]
    fn test_help_text_layout() {
        let text = help_text();
        assert!(text.starts_with("add <priority-code> <patient-name>\n"));
        assert!(text.contains("            Adds the patient to the triage system.\n"));
        assert!(text.contains("load <file> Reads the file and executes the command on each line\n"));
        assert!(text.contains("help        Displays this menu\n"));
        assert!(text.ends_with("quit        Exits the program\n"));
    }

    #[test]
    fn test_every_command_has_help() {
        for name in ["add", "next", "peek", "list", "load", "help", "quit"] {
            assert!(COMMAND_HELP.iter().any(|h| h.name == name), "{}", name);
        }
    }
}
