//! `delete <Kind>/INDEX`.

use crate::command::error::CommandError;
use crate::command::result::CommandResult;
use crate::command::selection::EventSelection;
use crate::command::{displayed_event, Command, CommandOutcome};
use crate::model::event::EventKind;
use crate::model::index::Index;
use crate::parser::event_args::{EventGrammar, PreambleRule};
use crate::repo::roster_model::RosterModel;

/// Deletes the event shown at a display index of one kind's filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteEventCommand {
    selection: EventSelection,
}

impl DeleteEventCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the event identified by the index \
        number used in the displayed event list.\n\
        Parameters: Tutorial/INDEX | Lab/INDEX | Consultation/INDEX (INDEX must be a positive integer)\n\
        Example: delete Tutorial/1";
    pub const MESSAGE_DELETE_EVENT_SUCCESS: &'static str = "Deleted Event: ";

    pub const GRAMMAR: EventGrammar = EventGrammar {
        usage: Self::MESSAGE_USAGE,
        auxiliary: &[],
        preamble: PreambleRule::MustBeEmpty,
        unsupported: &[],
    };

    /// Creates an unresolved command; a kind must be marked before execution.
    pub fn new(index: Index) -> Self {
        Self {
            selection: EventSelection::new(index),
        }
    }

    pub fn for_kind(index: Index, kind: EventKind) -> Self {
        Self {
            selection: EventSelection::resolved(index, kind),
        }
    }

    /// Selects the target kind, replacing any earlier selection.
    pub fn mark(&mut self, kind: EventKind) {
        self.selection.mark(kind);
    }

    pub fn selection(&self) -> EventSelection {
        self.selection
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let map = Self::GRAMMAR.tokenize(args);
        let (kind, index) = Self::GRAMMAR.resolve_index(&map)?;
        Ok(Self::for_kind(index, kind))
    }
}

impl Command for DeleteEventCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn kind(&self) -> Option<EventKind> {
        self.selection.kind()
    }

    fn execute(self: Box<Self>, model: &mut dyn RosterModel) -> CommandOutcome {
        let (kind, index) = self.selection.target(Self::COMMAND_WORD);
        let target = displayed_event(model, kind, index)?;
        let deleted = model.delete_event(kind, target.id)?;
        Ok(CommandResult::new(format!(
            "{}{deleted}",
            Self::MESSAGE_DELETE_EVENT_SUCCESS
        )))
    }
}
