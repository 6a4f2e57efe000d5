//! Marker prefixes recognized in command text.
//!
//! Kind markers end in `/` and may be glued to their value (`Lab/2`).
//! Dash markers must stand alone as a word (`-date 2024-05-01`).

use crate::model::event::EventKind;
use std::fmt::{Display, Formatter};

/// A marker that introduces one argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }

    pub fn len(self) -> usize {
        self.0.len()
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Word-like markers (`-n`) need a boundary after them so that `-name`
    /// is not read as `-n` followed by `ame`.
    pub(crate) fn needs_trailing_boundary(self) -> bool {
        self.0
            .chars()
            .next_back()
            .is_some_and(|last| last.is_ascii_alphanumeric())
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_TUTORIAL: Prefix = Prefix::new("Tutorial/");
pub const PREFIX_LAB: Prefix = Prefix::new("Lab/");
pub const PREFIX_CONSULTATION: Prefix = Prefix::new("Consultation/");
pub const PREFIX_RECUR: Prefix = Prefix::new("Recur/");

pub const PREFIX_NAME: Prefix = Prefix::new("-name");
pub const PREFIX_PHONE: Prefix = Prefix::new("-phone");
pub const PREFIX_EMAIL: Prefix = Prefix::new("-email");
pub const PREFIX_PHOTO: Prefix = Prefix::new("-photo");
pub const PREFIX_DATE: Prefix = Prefix::new("-date");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("-address");
pub const PREFIX_REMARK: Prefix = Prefix::new("-remark");
pub const PREFIX_PERFORMANCE: Prefix = Prefix::new("-perf");
pub const PREFIX_TAG: Prefix = Prefix::new("-tag");

pub const PREFIX_FILE: Prefix = Prefix::new("-file");
pub const PREFIX_REPETITIONS: Prefix = Prefix::new("-n");
pub const PREFIX_CONTENT: Prefix = Prefix::new("-content");

/// Markers that select an event collection.
pub const KIND_MARKERS: [Prefix; 3] = [PREFIX_TUTORIAL, PREFIX_LAB, PREFIX_CONSULTATION];

/// Markers that belong to contact/student creation.
pub const ENTITY_MARKERS: [Prefix; 9] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_PHOTO,
    PREFIX_DATE,
    PREFIX_ADDRESS,
    PREFIX_REMARK,
    PREFIX_PERFORMANCE,
    PREFIX_TAG,
];

pub fn kind_marker(kind: EventKind) -> Prefix {
    match kind {
        EventKind::Tutorial => PREFIX_TUTORIAL,
        EventKind::Lab => PREFIX_LAB,
        EventKind::Consultation => PREFIX_CONSULTATION,
    }
}

pub fn kind_of_marker(prefix: Prefix) -> Option<EventKind> {
    EventKind::ALL
        .into_iter()
        .find(|kind| kind_marker(*kind) == prefix)
}
