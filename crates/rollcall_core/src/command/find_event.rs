//! `find-event <Kind>/KEYWORDS` and `list-events`.

use crate::command::error::CommandError;
use crate::command::result::CommandResult;
use crate::command::{Command, CommandOutcome};
use crate::model::event::EventKind;
use crate::parser::event_args::{EventGrammar, PreambleRule};
use crate::parser::parser_util::parse_keywords;
use crate::repo::roster_model::{EventFilter, RosterModel};

/// Narrows one kind's filtered view to events matching any keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindEventCommand {
    kind: EventKind,
    keywords: Vec<String>,
}

impl FindEventCommand {
    pub const COMMAND_WORD: &'static str = "find-event";
    pub const MESSAGE_USAGE: &'static str = "find-event: Shows events of one kind whose names \
        contain any of the keywords (case-insensitive).\n\
        Parameters: Tutorial/KEYWORD [MORE_KEYWORDS]... | Lab/... | Consultation/...\n\
        Example: find-event Lab/graphs trees";

    pub const GRAMMAR: EventGrammar = EventGrammar {
        usage: Self::MESSAGE_USAGE,
        auxiliary: &[],
        preamble: PreambleRule::MustBeEmpty,
        unsupported: &[],
    };

    pub fn new(kind: EventKind, keywords: Vec<String>) -> Self {
        Self { kind, keywords }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let map = Self::GRAMMAR.tokenize(args);
        let selected = Self::GRAMMAR.resolve(&map)?;
        let keywords = parse_keywords(selected.value)
            .ok_or_else(|| CommandError::invalid_format(Self::MESSAGE_USAGE))?;
        Ok(Self::new(selected.kind, keywords))
    }
}

impl Command for FindEventCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn kind(&self) -> Option<EventKind> {
        Some(self.kind)
    }

    fn execute(self: Box<Self>, model: &mut dyn RosterModel) -> CommandOutcome {
        model.update_event_filter(self.kind, EventFilter::NameContainsAny(self.keywords));
        let listed = model.filtered_events(self.kind).len();
        Ok(CommandResult::new(format!("{listed} events listed!")))
    }
}

/// Clears every kind's filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListEventsCommand;

impl ListEventsCommand {
    pub const COMMAND_WORD: &'static str = "list-events";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all events";
}

impl Command for ListEventsCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(self: Box<Self>, model: &mut dyn RosterModel) -> CommandOutcome {
        model.reset_filters();
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
