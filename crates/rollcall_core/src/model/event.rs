//! Event domain model.
//!
//! # Responsibility
//! - Define the record shared by tutorial/lab/consultation collections.
//! - Validate event fields before they reach the Model Facade.
//!
//! # Invariants
//! - `id` is stable across edits and never reused for another event.
//! - `name` is never blank.
//! - Consultation events never carry a file.

use crate::model::student::StudentId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use uuid::Uuid;

/// Stable identifier for one event.
pub type EventId = Uuid;

/// Which of the three event collections an event lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Tutorial,
    Lab,
    Consultation,
}

impl EventKind {
    /// All kinds in display order.
    pub const ALL: [EventKind; 3] = [Self::Tutorial, Self::Lab, Self::Consultation];

    /// Human-readable kind label, also used as the marker stem.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tutorial => "Tutorial",
            Self::Lab => "Lab",
            Self::Consultation => "Consultation",
        }
    }

    /// Stable lowercase id used in log lines and help topics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tutorial => "tutorial",
            Self::Lab => "lab",
            Self::Consultation => "consultation",
        }
    }

    /// Whether events of this kind can have a file attached.
    pub fn supports_files(self) -> bool {
        !matches!(self, Self::Consultation)
    }

    /// Position of this kind's collection in per-kind storage arrays.
    pub(crate) fn slot(self) -> usize {
        match self {
            Self::Tutorial => 0,
            Self::Lab => 1,
            Self::Consultation => 2,
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation errors for event fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    BlankName,
    FileNotSupported(EventKind),
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "Event names should not be blank"),
            Self::FileNotSupported(kind) => {
                write!(f, "{kind} events do not have files attached to them")
            }
        }
    }
}

impl Error for EventValidationError {}

/// One scheduled tutorial, lab or consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub kind: EventKind,
    pub name: String,
    pub date: Option<NaiveDate>,
    /// Attached material. Always `None` for consultations.
    pub file: Option<PathBuf>,
    /// Member students in insertion order.
    pub students: Vec<StudentId>,
    /// Free-text notes, addressed by 1-based position.
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Event {
    /// Creates an event with a generated stable ID and no date, file, students or notes.
    pub fn new(kind: EventKind, name: impl Into<String>) -> Result<Self, EventValidationError> {
        let event = Self {
            id: Uuid::new_v4(),
            kind,
            name: name.into().trim().to_string(),
            date: None,
            file: None,
            students: Vec::new(),
            notes: Vec::new(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Builder-style date setter.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Builder-style file setter.
    ///
    /// Validation of the kind/file combination is deferred to [`Event::validate`].
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Checks field invariants.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.name.trim().is_empty() {
            return Err(EventValidationError::BlankName);
        }
        if self.file.is_some() && !self.kind.supports_files() {
            return Err(EventValidationError::FileNotSupported(self.kind));
        }
        Ok(())
    }

    /// Case-insensitive name equality used for duplicate detection.
    ///
    /// Folds full Unicode case, so `École` and `école` collide.
    pub fn is_same_event(&self, other: &Event) -> bool {
        self.kind == other.kind && self.name.to_lowercase() == other.name.to_lowercase()
    }

    pub fn has_student(&self, student_id: StudentId) -> bool {
        self.students.contains(&student_id)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.name)?;
        if let Some(date) = self.date {
            write!(f, "; Date: {}", date.format("%Y-%m-%d"))?;
        }
        if let Some(file) = &self.file {
            write!(f, "; File: {}", file.display())?;
        }
        write!(f, "; Students: {}", self.students.len())?;
        if !self.notes.is_empty() {
            write!(f, "; Notes: {}", self.notes.len())?;
        }
        Ok(())
    }
}
