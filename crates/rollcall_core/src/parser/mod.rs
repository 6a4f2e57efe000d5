//! Command text parsing.
//!
//! # Responsibility
//! - Split input into a command word and argument text.
//! - Route argument text to the matching command's parser.
//!
//! # Invariants
//! - Parsing never touches the model.
//! - Every returned kind-dispatched command is already resolved.

pub mod cli_syntax;
pub mod event_args;
pub mod parser_util;
pub mod tokenizer;

use crate::command::add_event::AddEventCommand;
use crate::command::delete_event::DeleteEventCommand;
use crate::command::edit_event::EditEventCommand;
use crate::command::error::CommandError;
use crate::command::event_note::EventNoteCommand;
use crate::command::event_student::{EventStudentCommand, Membership};
use crate::command::find_event::{FindEventCommand, ListEventsCommand};
use crate::command::help::HelpCommand;
use crate::command::open_file::OpenFileCommand;
use crate::command::schedule::ScheduleRecurringCommand;
use crate::command::{Command, ExitCommand};
use once_cell::sync::Lazy;
use regex::Regex;

static BASIC_COMMAND_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*(?P<word>\S+)(?P<arguments>.*)$").expect("valid command format regex")
});

/// Parses one line of user input into an executable command.
pub fn parse_command(input: &str) -> Result<Box<dyn Command>, CommandError> {
    let Some(captures) = BASIC_COMMAND_FORMAT.captures(input) else {
        return Err(CommandError::invalid_format(HelpCommand::MESSAGE_USAGE));
    };
    let word = captures.name("word").map_or("", |m| m.as_str());
    let arguments = captures.name("arguments").map_or("", |m| m.as_str());

    let command: Box<dyn Command> = match word {
        DeleteEventCommand::COMMAND_WORD => Box::new(DeleteEventCommand::parse(arguments)?),
        OpenFileCommand::COMMAND_WORD => Box::new(OpenFileCommand::parse(arguments)?),
        AddEventCommand::COMMAND_WORD | AddEventCommand::COMMAND_ALIAS => {
            Box::new(AddEventCommand::parse(arguments)?)
        }
        EditEventCommand::COMMAND_WORD => Box::new(EditEventCommand::parse(arguments)?),
        EventStudentCommand::ADD_COMMAND_WORD => {
            Box::new(EventStudentCommand::parse(arguments, Membership::Add)?)
        }
        EventStudentCommand::REMOVE_COMMAND_WORD => {
            Box::new(EventStudentCommand::parse(arguments, Membership::Remove)?)
        }
        EventNoteCommand::ADD_COMMAND_WORD => Box::new(EventNoteCommand::parse_add(arguments)?),
        EventNoteCommand::EDIT_COMMAND_WORD => Box::new(EventNoteCommand::parse_edit(arguments)?),
        EventNoteCommand::REMOVE_COMMAND_WORD => {
            Box::new(EventNoteCommand::parse_remove(arguments)?)
        }
        FindEventCommand::COMMAND_WORD => Box::new(FindEventCommand::parse(arguments)?),
        ListEventsCommand::COMMAND_WORD => Box::new(ListEventsCommand),
        ScheduleRecurringCommand::COMMAND_WORD => {
            Box::new(ScheduleRecurringCommand::parse(arguments)?)
        }
        HelpCommand::COMMAND_WORD => Box::new(HelpCommand::parse(arguments)?),
        ExitCommand::COMMAND_WORD => Box::new(ExitCommand),
        _ => return Err(CommandError::UnknownCommand),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::parse_command;
    use crate::command::error::CommandError;
    use crate::model::event::EventKind;

    #[test]
    fn blank_input_is_format_error() {
        assert!(matches!(
            parse_command("   "),
            Err(CommandError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn unknown_word_is_rejected() {
        assert_eq!(
            parse_command("rm -rf Lab/1").expect_err("unknown word"),
            CommandError::UnknownCommand
        );
    }

    #[test]
    fn routes_by_command_word() {
        let delete = parse_command("delete Consultation/3").expect("valid delete");
        assert_eq!(delete.command_word(), "delete");
        assert_eq!(delete.kind(), Some(EventKind::Consultation));

        let touch = parse_command("vim Lab/Lab 01").expect("alias of touch");
        assert_eq!(touch.command_word(), "touch");
        assert_eq!(touch.kind(), Some(EventKind::Lab));
    }
}
