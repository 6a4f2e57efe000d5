//! `addStudent` / `deleteStudent STUDENT_INDEX <Kind>/EVENT_INDEX`.

use crate::command::error::CommandError;
use crate::command::result::CommandResult;
use crate::command::selection::EventSelection;
use crate::command::{displayed_event, displayed_student, Command, CommandOutcome};
use crate::model::event::EventKind;
use crate::model::index::Index;
use crate::parser::event_args::{EventGrammar, PreambleRule};
use crate::parser::parser_util::parse_index;
use crate::repo::roster_model::RosterModel;

/// Direction of a membership change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Add,
    Remove,
}

/// Adds a student to, or removes one from, a displayed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventStudentCommand {
    student_index: Index,
    selection: EventSelection,
    membership: Membership,
}

impl EventStudentCommand {
    pub const ADD_COMMAND_WORD: &'static str = "addStudent";
    pub const REMOVE_COMMAND_WORD: &'static str = "deleteStudent";
    pub const ADD_USAGE: &'static str = "addStudent: Adds the student at STUDENT_INDEX of the \
        displayed student list to an event.\n\
        Parameters: STUDENT_INDEX Tutorial/EVENT_INDEX | Lab/EVENT_INDEX | Consultation/EVENT_INDEX\n\
        Example: addStudent 1 Tutorial/2";
    pub const REMOVE_USAGE: &'static str = "deleteStudent: Removes the student at STUDENT_INDEX \
        of the displayed student list from an event.\n\
        Parameters: STUDENT_INDEX Tutorial/EVENT_INDEX | Lab/EVENT_INDEX | Consultation/EVENT_INDEX\n\
        Example: deleteStudent 1 Tutorial/2";

    pub const ADD_GRAMMAR: EventGrammar = EventGrammar {
        usage: Self::ADD_USAGE,
        auxiliary: &[],
        preamble: PreambleRule::Required,
        unsupported: &[],
    };
    pub const REMOVE_GRAMMAR: EventGrammar = EventGrammar {
        usage: Self::REMOVE_USAGE,
        auxiliary: &[],
        preamble: PreambleRule::Required,
        unsupported: &[],
    };

    pub fn new(student_index: Index, selection: EventSelection, membership: Membership) -> Self {
        Self {
            student_index,
            selection,
            membership,
        }
    }

    pub fn parse(args: &str, membership: Membership) -> Result<Self, CommandError> {
        let grammar = match membership {
            Membership::Add => Self::ADD_GRAMMAR,
            Membership::Remove => Self::REMOVE_GRAMMAR,
        };
        let map = grammar.tokenize(args);
        let (kind, event_index) = grammar.resolve_index(&map)?;
        let student_index = parse_index(map.preamble())?;
        Ok(Self::new(
            student_index,
            EventSelection::resolved(event_index, kind),
            membership,
        ))
    }
}

impl Command for EventStudentCommand {
    fn command_word(&self) -> &'static str {
        match self.membership {
            Membership::Add => Self::ADD_COMMAND_WORD,
            Membership::Remove => Self::REMOVE_COMMAND_WORD,
        }
    }

    fn kind(&self) -> Option<EventKind> {
        self.selection.kind()
    }

    fn execute(self: Box<Self>, model: &mut dyn RosterModel) -> CommandOutcome {
        let (kind, event_index) = self.selection.target(self.command_word());
        let student = displayed_student(model, self.student_index)?;
        let event = displayed_event(model, kind, event_index)?;
        let feedback = match self.membership {
            Membership::Add => {
                let updated = model.add_student_to_event(kind, event.id, student.id)?;
                format!("Added Student {student} to Event: {updated}")
            }
            Membership::Remove => {
                let updated = model.remove_student_from_event(kind, event.id, student.id)?;
                format!("Removed Student {student} from Event: {updated}")
            }
        };
        Ok(CommandResult::new(feedback))
    }
}
