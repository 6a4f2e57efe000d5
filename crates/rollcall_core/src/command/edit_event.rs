//! `editEvent INDEX <Kind>/[NEW_NAME] [-date DATE] [-file PATH]`.

use crate::command::error::{CommandError, MESSAGE_CONSULTATION_HAS_NO_FILES};
use crate::command::result::CommandResult;
use crate::command::selection::EventSelection;
use crate::command::{displayed_event, Command, CommandOutcome};
use crate::model::event::{Event, EventKind};
use crate::model::index::Index;
use crate::parser::cli_syntax::{PREFIX_DATE, PREFIX_FILE};
use crate::parser::event_args::{EventGrammar, PreambleRule};
use crate::parser::parser_util::{parse_date, parse_event_name, parse_file_path, parse_index};
use crate::repo::roster_model::RosterModel;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Fields to overwrite; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditEventDescriptor {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub file: Option<PathBuf>,
}

impl EditEventDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.date.is_some() || self.file.is_some()
    }

    fn apply(&self, event: &Event) -> Event {
        let mut edited = event.clone();
        if let Some(name) = &self.name {
            edited.name = name.clone();
        }
        if let Some(date) = self.date {
            edited.date = Some(date);
        }
        if let Some(file) = &self.file {
            edited.file = Some(file.clone());
        }
        edited
    }
}

/// Edits the event shown at a display index; identity is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEventCommand {
    selection: EventSelection,
    descriptor: EditEventDescriptor,
}

impl EditEventCommand {
    pub const COMMAND_WORD: &'static str = "editEvent";
    pub const MESSAGE_USAGE: &'static str = "editEvent: Edits the event identified by the index \
        number used in the displayed event list.\n\
        Parameters: INDEX Tutorial/[NEW_NAME] | Lab/[NEW_NAME] | Consultation/[NEW_NAME] \
        [-date YYYY-MM-DD] [-file PATH]\n\
        Example: editEvent 1 Lab/Lab 02 -date 2024-05-08";
    pub const MESSAGE_SUCCESS: &'static str = "Edited Event: ";
    pub const MESSAGE_NOT_EDITED: &'static str = "At least one field to edit must be provided.";

    pub const GRAMMAR: EventGrammar = EventGrammar {
        usage: Self::MESSAGE_USAGE,
        auxiliary: &[PREFIX_DATE, PREFIX_FILE],
        preamble: PreambleRule::Required,
        unsupported: &[],
    };

    pub fn new(selection: EventSelection, descriptor: EditEventDescriptor) -> Self {
        Self {
            selection,
            descriptor,
        }
    }

    pub fn for_kind(index: Index, kind: EventKind, descriptor: EditEventDescriptor) -> Self {
        Self::new(EventSelection::resolved(index, kind), descriptor)
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let map = Self::GRAMMAR.tokenize(args);
        let selected = Self::GRAMMAR.resolve(&map)?;
        let kind = selected.kind;
        let index = parse_index(map.preamble())?;

        let mut descriptor = EditEventDescriptor::default();
        if !selected.value.trim().is_empty() {
            descriptor.name = Some(parse_event_name(selected.value)?);
        }
        if let Some(raw) = map.value(PREFIX_DATE) {
            descriptor.date = Some(parse_date(raw)?);
        }
        if let Some(raw) = map.value(PREFIX_FILE) {
            if !kind.supports_files() {
                return Err(CommandError::UnsupportedForKind {
                    kind,
                    reason: MESSAGE_CONSULTATION_HAS_NO_FILES,
                });
            }
            descriptor.file = Some(parse_file_path(raw)?);
        }
        if !descriptor.is_any_field_edited() {
            return Err(CommandError::Rejected(Self::MESSAGE_NOT_EDITED.to_string()));
        }
        Ok(Self::for_kind(index, kind, descriptor))
    }
}

impl Command for EditEventCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn kind(&self) -> Option<EventKind> {
        self.selection.kind()
    }

    fn execute(self: Box<Self>, model: &mut dyn RosterModel) -> CommandOutcome {
        let (kind, index) = self.selection.target(Self::COMMAND_WORD);
        let target = displayed_event(model, kind, index)?;
        let edited = model.set_event(kind, target.id, self.descriptor.apply(&target))?;
        Ok(CommandResult::new(format!("{}{edited}", Self::MESSAGE_SUCCESS)))
    }
}
