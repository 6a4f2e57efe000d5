//! Kind selection state shared by index-targeted event commands.

use crate::model::event::EventKind;
use crate::model::index::Index;

/// Target display index plus the event kind it resolves against.
///
/// Starts unresolved; a mark call resolves it. Marking again replaces the
/// previous kind, so at most one kind is ever selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSelection {
    index: Index,
    kind: Option<EventKind>,
}

impl EventSelection {
    pub fn new(index: Index) -> Self {
        Self { index, kind: None }
    }

    pub fn resolved(index: Index, kind: EventKind) -> Self {
        let mut selection = Self::new(index);
        selection.mark(kind);
        selection
    }

    /// Routes to the kind-specific mark operation.
    pub fn mark(&mut self, kind: EventKind) {
        match kind {
            EventKind::Tutorial => self.mark_tutorial(),
            EventKind::Lab => self.mark_lab(),
            EventKind::Consultation => self.mark_consultation(),
        }
    }

    pub fn mark_tutorial(&mut self) {
        self.kind = Some(EventKind::Tutorial);
    }

    pub fn mark_lab(&mut self) {
        self.kind = Some(EventKind::Lab);
    }

    pub fn mark_consultation(&mut self) {
        self.kind = Some(EventKind::Consultation);
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn kind(&self) -> Option<EventKind> {
        self.kind
    }

    /// Returns the resolved target.
    ///
    /// # Panics
    /// When no kind was marked. Parsers always resolve before handing a
    /// command out, so reaching this is a caller bug.
    pub(crate) fn target(&self, command_word: &str) -> (EventKind, Index) {
        match self.kind {
            Some(kind) => (kind, self.index),
            None => panic!("`{command_word}` executed before its event kind was resolved"),
        }
    }
}
