//! Successful command outcome.

use std::path::PathBuf;

/// Feedback plus the host-side actions a command requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// File the host should open; commands never open files themselves.
    pub file_to_open: Option<PathBuf>,
    /// Whether the host should end the session.
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            file_to_open: None,
            exit: false,
        }
    }

    pub fn open_file(feedback: impl Into<String>, file: PathBuf) -> Self {
        Self {
            file_to_open: Some(file),
            ..Self::new(feedback)
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}
