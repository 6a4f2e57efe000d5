//! `touch <Kind>/NAME [-date DATE] [-file PATH]` (alias `vim`).

use crate::command::error::{CommandError, MESSAGE_CONSULTATION_HAS_NO_FILES};
use crate::command::result::CommandResult;
use crate::command::{Command, CommandOutcome};
use crate::model::event::{Event, EventKind};
use crate::parser::cli_syntax::{PREFIX_DATE, PREFIX_FILE};
use crate::parser::event_args::{EventGrammar, PreambleRule};
use crate::parser::parser_util::{parse_date, parse_event_name, parse_file_path};
use crate::repo::roster_model::RosterModel;

/// Adds one event to its kind's collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEventCommand {
    event: Event,
}

impl AddEventCommand {
    pub const COMMAND_WORD: &'static str = "touch";
    pub const COMMAND_ALIAS: &'static str = "vim";
    pub const MESSAGE_USAGE: &'static str = "touch: Adds an event.\n\
        Parameters: Tutorial/NAME | Lab/NAME | Consultation/NAME [-date YYYY-MM-DD] [-file PATH]\n\
        Example: touch Tutorial/CS2103 T01 -date 2024-05-01 -file notes/t01.pdf";
    pub const MESSAGE_SUCCESS: &'static str = "Added Event: ";

    pub const GRAMMAR: EventGrammar = EventGrammar {
        usage: Self::MESSAGE_USAGE,
        auxiliary: &[PREFIX_DATE, PREFIX_FILE],
        preamble: PreambleRule::MustBeEmpty,
        unsupported: &[],
    };

    pub fn new(event: Event) -> Self {
        Self { event }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let map = Self::GRAMMAR.tokenize(args);
        let selected = Self::GRAMMAR.resolve(&map)?;
        let kind = selected.kind;
        let name = parse_event_name(selected.value)?;

        if map.is_present(PREFIX_FILE) && !kind.supports_files() {
            return Err(CommandError::UnsupportedForKind {
                kind,
                reason: MESSAGE_CONSULTATION_HAS_NO_FILES,
            });
        }

        let mut event = Event::new(kind, name)
            .map_err(|err| CommandError::InvalidArgument(err.to_string()))?;
        if let Some(raw) = map.value(PREFIX_DATE) {
            event = event.with_date(parse_date(raw)?);
        }
        if let Some(raw) = map.value(PREFIX_FILE) {
            event = event.with_file(parse_file_path(raw)?);
        }
        Ok(Self::new(event))
    }
}

impl Command for AddEventCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn kind(&self) -> Option<EventKind> {
        Some(self.event.kind)
    }

    fn execute(self: Box<Self>, model: &mut dyn RosterModel) -> CommandOutcome {
        let feedback = format!("{}{}", Self::MESSAGE_SUCCESS, self.event);
        model.add_event(self.event)?;
        Ok(CommandResult::new(feedback))
    }
}
