//! `help [tutorial|lab|consultation]`.

use crate::command::error::CommandError;
use crate::command::result::CommandResult;
use crate::command::{Command, CommandOutcome};
use crate::model::event::EventKind;
use crate::repo::roster_model::RosterModel;

/// Shows command syntax, optionally for one event kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand {
    topic: Option<EventKind>,
}

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str = "help: Shows event command syntax.\n\
        Parameters: [tutorial | lab | consultation]\n\
        Example: help lab";

    pub fn new(topic: Option<EventKind>) -> Self {
        Self { topic }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let topic = args.trim();
        if topic.is_empty() {
            return Ok(Self::new(None));
        }
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(topic))
            .map(|kind| Self::new(Some(kind)))
            .ok_or(CommandError::invalid_format(Self::MESSAGE_USAGE))
    }

    fn overview() -> String {
        let mut text = String::from("----- Event Commands -----\n");
        for kind in EventKind::ALL {
            text.push_str(&format!("help {}\n", kind.as_str()));
        }
        text.push_str("list-events\nexit");
        text
    }

    fn kind_sheet(kind: EventKind) -> String {
        let label = kind.label();
        let upper = label.to_ascii_uppercase();
        let file_suffix = if kind.supports_files() {
            " -file PATH"
        } else {
            ""
        };
        let mut lines = vec![
            format!("----- {label} Basic Inputs -----"),
            format!("Add:             touch {label}/{upper}_NAME -date DATE{file_suffix}"),
            format!("Add Multiple:    schedule Recur/{label}/{upper}_NAME -n REPETITIONS [-date START]"),
            format!("Delete:          delete {label}/INDEX"),
            format!("Edit:            editEvent EVENT_INDEX {label}/NEW_NAME -date NEW_DATE{file_suffix}"),
            format!("Find:            find-event {label}/KEYWORD [MORE_KEYWORDS]"),
        ];
        if kind.supports_files() {
            lines.push(format!("Open File:       open-file {label}/INDEX"));
        }
        lines.push(String::new());
        lines.push("----- Student Inputs -----".to_string());
        lines.push(format!(
            "Add Student:     addStudent STUDENT_INDEX {label}/{upper}_INDEX"
        ));
        lines.push(format!(
            "Delete Student:  deleteStudent STUDENT_INDEX {label}/{upper}_INDEX"
        ));
        lines.push(String::new());
        lines.push("----- Note Inputs -----".to_string());
        lines.push(format!(
            "Add Note:        add-note {label}/{upper}_INDEX -content NOTE"
        ));
        lines.push(format!(
            "Edit Note:       edit-note NOTE_INDEX {label}/{upper}_INDEX -content NOTE"
        ));
        lines.push(format!(
            "Delete Note:     rm-note NOTE_INDEX {label}/{upper}_INDEX"
        ));
        lines.join("\n")
    }
}

impl Command for HelpCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn kind(&self) -> Option<EventKind> {
        self.topic
    }

    fn execute(self: Box<Self>, _model: &mut dyn RosterModel) -> CommandOutcome {
        let text = match self.topic {
            Some(kind) => Self::kind_sheet(kind),
            None => Self::overview(),
        };
        Ok(CommandResult::new(text))
    }
}
