//! `open-file <Kind>/INDEX`.

use crate::command::error::{CommandError, MESSAGE_CONSULTATION_HAS_NO_FILES};
use crate::command::result::CommandResult;
use crate::command::selection::EventSelection;
use crate::command::{displayed_event, Command, CommandOutcome};
use crate::model::event::EventKind;
use crate::model::index::Index;
use crate::parser::event_args::{EventGrammar, PreambleRule};
use crate::repo::roster_model::RosterModel;

/// Asks the host to open the file attached to a tutorial or lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenFileCommand {
    selection: EventSelection,
}

impl OpenFileCommand {
    pub const COMMAND_WORD: &'static str = "open-file";
    pub const MESSAGE_USAGE: &'static str = "open-file: Opens the file attached to the event \
        identified by the index number used in the displayed event list.\n\
        Parameters: Tutorial/INDEX | Lab/INDEX (INDEX must be a positive integer)\n\
        Example: open-file Lab/2";
    pub const MESSAGE_OPEN_FILE_SUCCESS: &'static str = "Opened Event: ";
    pub const MESSAGE_NO_FILE: &'static str = "This event does not have a file attached to it";

    pub const GRAMMAR: EventGrammar = EventGrammar {
        usage: Self::MESSAGE_USAGE,
        auxiliary: &[],
        preamble: PreambleRule::MustBeEmpty,
        unsupported: &[(EventKind::Consultation, MESSAGE_CONSULTATION_HAS_NO_FILES)],
    };

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

    pub fn mark(&mut self, kind: EventKind) {
        self.selection.mark(kind);
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let map = Self::GRAMMAR.tokenize(args);
        let (kind, index) = Self::GRAMMAR.resolve_index(&map)?;
        Ok(Self::for_kind(index, kind))
    }
}

impl Command for OpenFileCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn kind(&self) -> Option<EventKind> {
        self.selection.kind()
    }

    fn execute(self: Box<Self>, model: &mut dyn RosterModel) -> CommandOutcome {
        let (kind, index) = self.selection.target(Self::COMMAND_WORD);
        if !kind.supports_files() {
            return Err(CommandError::UnsupportedForKind {
                kind,
                reason: MESSAGE_CONSULTATION_HAS_NO_FILES,
            });
        }
        let event = displayed_event(model, kind, index)?;
        let Some(file) = event.file.clone() else {
            return Err(CommandError::Rejected(Self::MESSAGE_NO_FILE.to_string()));
        };
        Ok(CommandResult::open_file(
            format!("{}{event}", Self::MESSAGE_OPEN_FILE_SUCCESS),
            file,
        ))
    }
}
