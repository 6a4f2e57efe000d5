//! `add-note`, `edit-note` and `rm-note` on a displayed event.

use crate::command::error::{CommandError, IndexScope};
use crate::command::result::CommandResult;
use crate::command::selection::EventSelection;
use crate::command::{displayed_event, Command, CommandOutcome};
use crate::model::event::{Event, EventKind};
use crate::model::index::Index;
use crate::parser::cli_syntax::PREFIX_CONTENT;
use crate::parser::event_args::{EventGrammar, PreambleRule};
use crate::parser::parser_util::{parse_index, parse_note};
use crate::repo::roster_model::RosterModel;

/// What happens to the target event's note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteAction {
    Add(String),
    Edit(Index, String),
    Remove(Index),
}

/// Changes one note of the event shown at a display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventNoteCommand {
    selection: EventSelection,
    action: NoteAction,
}

impl EventNoteCommand {
    pub const ADD_COMMAND_WORD: &'static str = "add-note";
    pub const EDIT_COMMAND_WORD: &'static str = "edit-note";
    pub const REMOVE_COMMAND_WORD: &'static str = "rm-note";
    pub const ADD_USAGE: &'static str = "add-note: Adds a note to the event identified by the \
        index number used in the displayed event list.\n\
        Parameters: Tutorial/EVENT_INDEX | Lab/EVENT_INDEX | Consultation/EVENT_INDEX -content NOTE\n\
        Example: add-note Lab/2 -content bring laptops";
    pub const EDIT_USAGE: &'static str = "edit-note: Replaces the note at NOTE_INDEX of an event.\n\
        Parameters: NOTE_INDEX Tutorial/EVENT_INDEX | Lab/EVENT_INDEX | Consultation/EVENT_INDEX \
        -content NOTE\n\
        Example: edit-note 1 Lab/2 -content bring chargers";
    pub const REMOVE_USAGE: &'static str = "rm-note: Removes the note at NOTE_INDEX of an event.\n\
        Parameters: NOTE_INDEX Tutorial/EVENT_INDEX | Lab/EVENT_INDEX | Consultation/EVENT_INDEX\n\
        Example: rm-note 1 Lab/2";

    const ADD_GRAMMAR: EventGrammar = EventGrammar {
        usage: Self::ADD_USAGE,
        auxiliary: &[PREFIX_CONTENT],
        preamble: PreambleRule::MustBeEmpty,
        unsupported: &[],
    };
    const EDIT_GRAMMAR: EventGrammar = EventGrammar {
        usage: Self::EDIT_USAGE,
        auxiliary: &[PREFIX_CONTENT],
        preamble: PreambleRule::Required,
        unsupported: &[],
    };
    const REMOVE_GRAMMAR: EventGrammar = EventGrammar {
        usage: Self::REMOVE_USAGE,
        auxiliary: &[],
        preamble: PreambleRule::Required,
        unsupported: &[],
    };

    pub fn new(selection: EventSelection, action: NoteAction) -> Self {
        Self { selection, action }
    }

    pub fn parse_add(args: &str) -> Result<Self, CommandError> {
        let map = Self::ADD_GRAMMAR.tokenize(args);
        let (kind, event_index) = Self::ADD_GRAMMAR.resolve_index(&map)?;
        let raw = map
            .value(PREFIX_CONTENT)
            .ok_or(CommandError::invalid_format(Self::ADD_USAGE))?;
        Ok(Self::new(
            EventSelection::resolved(event_index, kind),
            NoteAction::Add(parse_note(raw)?),
        ))
    }

    pub fn parse_edit(args: &str) -> Result<Self, CommandError> {
        let map = Self::EDIT_GRAMMAR.tokenize(args);
        let (kind, event_index) = Self::EDIT_GRAMMAR.resolve_index(&map)?;
        let raw = map
            .value(PREFIX_CONTENT)
            .ok_or(CommandError::invalid_format(Self::EDIT_USAGE))?;
        let note_index = parse_index(map.preamble())?;
        Ok(Self::new(
            EventSelection::resolved(event_index, kind),
            NoteAction::Edit(note_index, parse_note(raw)?),
        ))
    }

    pub fn parse_remove(args: &str) -> Result<Self, CommandError> {
        let map = Self::REMOVE_GRAMMAR.tokenize(args);
        let (kind, event_index) = Self::REMOVE_GRAMMAR.resolve_index(&map)?;
        let note_index = parse_index(map.preamble())?;
        Ok(Self::new(
            EventSelection::resolved(event_index, kind),
            NoteAction::Remove(note_index),
        ))
    }
}

impl Command for EventNoteCommand {
    fn command_word(&self) -> &'static str {
        match self.action {
            NoteAction::Add(_) => Self::ADD_COMMAND_WORD,
            NoteAction::Edit(..) => Self::EDIT_COMMAND_WORD,
            NoteAction::Remove(_) => Self::REMOVE_COMMAND_WORD,
        }
    }

    fn kind(&self) -> Option<EventKind> {
        self.selection.kind()
    }

    fn execute(self: Box<Self>, model: &mut dyn RosterModel) -> CommandOutcome {
        let (kind, event_index) = self.selection.target(self.command_word());
        let event = displayed_event(model, kind, event_index)?;
        let feedback = match self.action {
            NoteAction::Add(note) => {
                let updated = model.add_note(kind, event.id, note)?;
                format!("Added Note to Event: {updated}")
            }
            NoteAction::Edit(note_index, note) => {
                ensure_note_exists(&event, note_index)?;
                let updated = model.edit_note(kind, event.id, note_index, note)?;
                format!("Edited Note {note_index} of Event: {updated}")
            }
            NoteAction::Remove(note_index) => {
                ensure_note_exists(&event, note_index)?;
                let updated = model.remove_note(kind, event.id, note_index)?;
                format!("Removed Note {note_index} from Event: {updated}")
            }
        };
        Ok(CommandResult::new(feedback))
    }
}

fn ensure_note_exists(event: &Event, note_index: Index) -> Result<(), CommandError> {
    if note_index.zero_based() < event.notes.len() {
        Ok(())
    } else {
        Err(CommandError::OutOfRange(IndexScope::Note))
    }
}
