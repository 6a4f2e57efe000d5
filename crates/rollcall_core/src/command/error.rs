//! User-facing command failures and their fixed messages.

use crate::model::event::EventKind;
use crate::repo::roster_model::ModelError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_INVALID_EVENT_DISPLAYED_INDEX: &str = "The event index provided is invalid";
pub const MESSAGE_INVALID_STUDENT_DISPLAYED_INDEX: &str = "The student index provided is invalid";
pub const MESSAGE_INVALID_NOTE_DISPLAYED_INDEX: &str = "The note index provided is invalid";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_CONSULTATION_HAS_NO_FILES: &str =
    "Consultation events do not have files attached to them";

/// Which filtered view a display index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexScope {
    /// Shared by all three event kinds.
    Event,
    Student,
    /// Position within one event's note list.
    Note,
}

/// Failure of one command, rendered as plain text at the invocation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong, missing or extra markers, or a forbidden preamble.
    InvalidFormat { usage: &'static str },
    /// A display index is not a positive integer.
    InvalidIndex,
    /// An auxiliary value (date, path, name, count) failed to convert.
    InvalidArgument(String),
    /// A valid display index past the end of the filtered view.
    OutOfRange(IndexScope),
    /// Well-formed but not applicable to the resolved kind.
    UnsupportedForKind {
        kind: EventKind,
        reason: &'static str,
    },
    /// Well-formed but refused given the target's current state.
    Rejected(String),
    UnknownCommand,
    Model(ModelError),
}

impl CommandError {
    pub fn invalid_format(usage: &'static str) -> Self {
        Self::InvalidFormat { usage }
    }

    /// Stable snake_case tag used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "invalid_format",
            Self::InvalidIndex => "invalid_index",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::OutOfRange(_) => "out_of_range",
            Self::UnsupportedForKind { .. } => "unsupported_for_kind",
            Self::Rejected(_) => "rejected",
            Self::UnknownCommand => "unknown_command",
            Self::Model(_) => "model",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat { usage } => write!(f, "{MESSAGE_INVALID_COMMAND_FORMAT}{usage}"),
            Self::InvalidIndex => f.write_str(MESSAGE_INVALID_INDEX),
            Self::InvalidArgument(message) => f.write_str(message),
            Self::OutOfRange(IndexScope::Event) => {
                f.write_str(MESSAGE_INVALID_EVENT_DISPLAYED_INDEX)
            }
            Self::OutOfRange(IndexScope::Student) => {
                f.write_str(MESSAGE_INVALID_STUDENT_DISPLAYED_INDEX)
            }
            Self::OutOfRange(IndexScope::Note) => f.write_str(MESSAGE_INVALID_NOTE_DISPLAYED_INDEX),
            Self::UnsupportedForKind { reason, .. } => f.write_str(reason),
            Self::Rejected(message) => f.write_str(message),
            Self::UnknownCommand => f.write_str(MESSAGE_UNKNOWN_COMMAND),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for CommandError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandError, IndexScope};
    use crate::model::event::EventKind;

    #[test]
    fn out_of_range_message_is_kind_agnostic() {
        assert_eq!(
            CommandError::OutOfRange(IndexScope::Event).to_string(),
            "The event index provided is invalid"
        );
    }

    #[test]
    fn invalid_format_embeds_usage() {
        let message = CommandError::invalid_format("delete: usage").to_string();
        assert_eq!(message, "Invalid command format! \ndelete: usage");
    }

    #[test]
    fn unsupported_for_kind_shows_reason_only() {
        let err = CommandError::UnsupportedForKind {
            kind: EventKind::Consultation,
            reason: "nope",
        };
        assert_eq!(err.to_string(), "nope");
        assert_eq!(err.code(), "unsupported_for_kind");
    }
}
