//! Command objects and their shared execution contract.
//!
//! # Responsibility
//! - Define the unit of work produced by the parser and run by the service.
//! - Resolve display indices against filtered views, then mutate by identity.
//!
//! # Invariants
//! - A command is consumed by exactly one `execute` call.
//! - Index lookups always use the filtered view, never the backing store.
//! - A command mutates at most one event kind's storage.

pub mod add_event;
pub mod delete_event;
pub mod edit_event;
pub mod error;
pub mod event_note;
pub mod event_student;
pub mod find_event;
pub mod help;
pub mod open_file;
pub mod result;
pub mod schedule;
pub mod selection;

use crate::command::error::{CommandError, IndexScope};
use crate::command::result::CommandResult;
use crate::model::event::{Event, EventKind};
use crate::model::index::Index;
use crate::model::student::Student;
use crate::repo::roster_model::RosterModel;
use std::fmt::Debug;

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// Executable unit produced by the parser.
pub trait Command: Debug {
    /// Word that introduced this command, for diagnostics.
    fn command_word(&self) -> &'static str;

    /// Event kind this command targets, when it targets exactly one.
    fn kind(&self) -> Option<EventKind> {
        None
    }

    fn execute(self: Box<Self>, model: &mut dyn RosterModel) -> CommandOutcome;
}

/// Clones the event shown at `index` in `kind`'s filtered view.
pub(crate) fn displayed_event(
    model: &dyn RosterModel,
    kind: EventKind,
    index: Index,
) -> Result<Event, CommandError> {
    index
        .pick(&model.filtered_events(kind))
        .cloned()
        .ok_or(CommandError::OutOfRange(IndexScope::Event))
}

/// Clones the student shown at `index` in the filtered student view.
pub(crate) fn displayed_student(
    model: &dyn RosterModel,
    index: Index,
) -> Result<Student, CommandError> {
    index
        .pick(&model.filtered_students())
        .cloned()
        .ok_or(CommandError::OutOfRange(IndexScope::Student))
}

/// Stops the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_EXIT: &'static str = "Exiting as requested ...";
}

impl Command for ExitCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(self: Box<Self>, _model: &mut dyn RosterModel) -> CommandOutcome {
        Ok(CommandResult::exit(Self::MESSAGE_EXIT))
    }
}
