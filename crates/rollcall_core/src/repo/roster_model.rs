//! Roster Model Facade and in-memory storage.
//!
//! # Responsibility
//! - Own all event and student storage for one session.
//! - Keep one active filter per event kind and serve filtered views.
//!
//! # Invariants
//! - Event names are unique per kind, compared case-insensitively.
//! - Filtered views preserve insertion order of the backing collection.
//! - No operation mutates more than one kind's collection.

use crate::model::event::{Event, EventId, EventKind, EventValidationError};
use crate::model::index::Index;
use crate::model::student::{Student, StudentId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Facade-level failures for roster mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    Validation(EventValidationError),
    /// Another event of the same kind already uses this name.
    DuplicateEvent { kind: EventKind, name: String },
    EventNotFound(EventId),
    StudentNotFound(StudentId),
    StudentAlreadyInEvent { student: String, event: String },
    StudentNotInEvent { student: String, event: String },
    NoteNotFound { event: String, note: Index },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateEvent { kind, name } => {
                write!(f, "This {} already exists: {name}", kind.as_str())
            }
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::StudentNotFound(id) => write!(f, "student not found: {id}"),
            Self::StudentAlreadyInEvent { student, event } => {
                write!(f, "{student} is already in {event}")
            }
            Self::StudentNotInEvent { student, event } => {
                write!(f, "{student} is not in {event}")
            }
            Self::NoteNotFound { event, note } => write!(f, "{event} has no note {note}"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EventValidationError> for ModelError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Visibility predicate applied to one kind's collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    All,
    /// Keeps events whose name has a word equal to any keyword, ignoring case.
    NameContainsAny(Vec<String>),
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::NameContainsAny(keywords) => event.name.split_whitespace().any(|word| {
                let word = word.to_lowercase();
                keywords.iter().any(|keyword| keyword.to_lowercase() == word)
            }),
        }
    }
}

/// Model Facade consumed by command objects.
///
/// Views are snapshots: callers read a view, pick an entity by display index
/// and then mutate by that entity's ID within the same call.
pub trait RosterModel {
    /// Currently visible events of one kind, in collection order.
    fn filtered_events(&self, kind: EventKind) -> Vec<&Event>;
    /// Every stored event of one kind, ignoring the active filter.
    fn all_events(&self, kind: EventKind) -> Vec<&Event>;
    fn filtered_students(&self) -> Vec<&Student>;

    fn add_event(&mut self, event: Event) -> ModelResult<()>;
    /// Removes the event with `id` from `kind`'s collection and returns it.
    fn delete_event(&mut self, kind: EventKind, id: EventId) -> ModelResult<Event>;
    /// Replaces the event with `id`, keeping its ID and kind.
    fn set_event(&mut self, kind: EventKind, id: EventId, edited: Event) -> ModelResult<Event>;

    fn add_student(&mut self, student: Student);
    fn add_student_to_event(
        &mut self,
        kind: EventKind,
        event_id: EventId,
        student_id: StudentId,
    ) -> ModelResult<Event>;
    fn remove_student_from_event(
        &mut self,
        kind: EventKind,
        event_id: EventId,
        student_id: StudentId,
    ) -> ModelResult<Event>;

    /// Appends a note to the event with `id`.
    fn add_note(&mut self, kind: EventKind, id: EventId, note: String) -> ModelResult<Event>;
    /// Replaces the note at `note_index` of the event with `id`.
    fn edit_note(
        &mut self,
        kind: EventKind,
        id: EventId,
        note_index: Index,
        note: String,
    ) -> ModelResult<Event>;
    /// Removes the note at `note_index`; later notes move up by one.
    fn remove_note(
        &mut self,
        kind: EventKind,
        id: EventId,
        note_index: Index,
    ) -> ModelResult<Event>;

    fn update_event_filter(&mut self, kind: EventKind, filter: EventFilter);
    /// Shows every event of every kind again.
    fn reset_filters(&mut self);
}

/// Single-session roster storage.
#[derive(Debug, Default)]
pub struct InMemoryRosterModel {
    events: [Vec<Event>; 3],
    filters: [EventFilter; 3],
    students: Vec<Student>,
}

impl InMemoryRosterModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn collection(&self, kind: EventKind) -> &Vec<Event> {
        &self.events[kind.slot()]
    }

    fn collection_mut(&mut self, kind: EventKind) -> &mut Vec<Event> {
        &mut self.events[kind.slot()]
    }

    fn position(&self, kind: EventKind, id: EventId) -> ModelResult<usize> {
        self.collection(kind)
            .iter()
            .position(|event| event.id == id)
            .ok_or(ModelError::EventNotFound(id))
    }

    fn student(&self, id: StudentId) -> ModelResult<&Student> {
        self.students
            .iter()
            .find(|student| student.id == id)
            .ok_or(ModelError::StudentNotFound(id))
    }
}

impl RosterModel for InMemoryRosterModel {
    fn filtered_events(&self, kind: EventKind) -> Vec<&Event> {
        let filter = &self.filters[kind.slot()];
        self.collection(kind)
            .iter()
            .filter(|event| filter.matches(event))
            .collect()
    }

    fn all_events(&self, kind: EventKind) -> Vec<&Event> {
        self.collection(kind).iter().collect()
    }

    fn filtered_students(&self) -> Vec<&Student> {
        self.students.iter().collect()
    }

    fn add_event(&mut self, event: Event) -> ModelResult<()> {
        event.validate()?;
        if self
            .collection(event.kind)
            .iter()
            .any(|existing| existing.is_same_event(&event))
        {
            return Err(ModelError::DuplicateEvent {
                kind: event.kind,
                name: event.name,
            });
        }
        self.collection_mut(event.kind).push(event);
        Ok(())
    }

    fn delete_event(&mut self, kind: EventKind, id: EventId) -> ModelResult<Event> {
        let position = self.position(kind, id)?;
        Ok(self.collection_mut(kind).remove(position))
    }

    fn set_event(&mut self, kind: EventKind, id: EventId, edited: Event) -> ModelResult<Event> {
        let position = self.position(kind, id)?;
        let replacement = Event { id, kind, ..edited };
        replacement.validate()?;
        if self
            .collection(kind)
            .iter()
            .any(|existing| existing.id != id && existing.is_same_event(&replacement))
        {
            return Err(ModelError::DuplicateEvent {
                kind,
                name: replacement.name,
            });
        }
        self.collection_mut(kind)[position] = replacement.clone();
        Ok(replacement)
    }

    fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    fn add_student_to_event(
        &mut self,
        kind: EventKind,
        event_id: EventId,
        student_id: StudentId,
    ) -> ModelResult<Event> {
        let student_name = self.student(student_id)?.name.clone();
        let position = self.position(kind, event_id)?;
        let event = &mut self.collection_mut(kind)[position];
        if event.has_student(student_id) {
            return Err(ModelError::StudentAlreadyInEvent {
                student: student_name,
                event: event.name.clone(),
            });
        }
        event.students.push(student_id);
        Ok(event.clone())
    }

    fn remove_student_from_event(
        &mut self,
        kind: EventKind,
        event_id: EventId,
        student_id: StudentId,
    ) -> ModelResult<Event> {
        let student_name = self.student(student_id)?.name.clone();
        let position = self.position(kind, event_id)?;
        let event = &mut self.collection_mut(kind)[position];
        let Some(member) = event.students.iter().position(|id| *id == student_id) else {
            return Err(ModelError::StudentNotInEvent {
                student: student_name,
                event: event.name.clone(),
            });
        };
        event.students.remove(member);
        Ok(event.clone())
    }

    fn add_note(&mut self, kind: EventKind, id: EventId, note: String) -> ModelResult<Event> {
        let position = self.position(kind, id)?;
        let event = &mut self.collection_mut(kind)[position];
        event.notes.push(note);
        Ok(event.clone())
    }

    fn edit_note(
        &mut self,
        kind: EventKind,
        id: EventId,
        note_index: Index,
        note: String,
    ) -> ModelResult<Event> {
        let position = self.position(kind, id)?;
        let event = &mut self.collection_mut(kind)[position];
        let Some(slot) = event.notes.get_mut(note_index.zero_based()) else {
            return Err(ModelError::NoteNotFound {
                event: event.name.clone(),
                note: note_index,
            });
        };
        *slot = note;
        Ok(event.clone())
    }

    fn remove_note(
        &mut self,
        kind: EventKind,
        id: EventId,
        note_index: Index,
    ) -> ModelResult<Event> {
        let position = self.position(kind, id)?;
        let event = &mut self.collection_mut(kind)[position];
        if note_index.zero_based() >= event.notes.len() {
            return Err(ModelError::NoteNotFound {
                event: event.name.clone(),
                note: note_index,
            });
        }
        event.notes.remove(note_index.zero_based());
        Ok(event.clone())
    }

    fn update_event_filter(&mut self, kind: EventKind, filter: EventFilter) {
        self.filters[kind.slot()] = filter;
    }

    fn reset_filters(&mut self) {
        self.filters = Default::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{EventFilter, InMemoryRosterModel, ModelError, RosterModel};
    use crate::model::event::{Event, EventKind};
    use crate::model::index::Index;
    use crate::model::student::Student;

    fn event(kind: EventKind, name: &str) -> Event {
        Event::new(kind, name).expect("valid event")
    }

    #[test]
    fn add_event_rejects_duplicate_name_within_kind_only() {
        let mut model = InMemoryRosterModel::new();
        model
            .add_event(event(EventKind::Tutorial, "T01"))
            .expect("first add");
        model
            .add_event(event(EventKind::Lab, "T01"))
            .expect("same name in another kind");

        let err = model
            .add_event(event(EventKind::Tutorial, "t01"))
            .expect_err("duplicate must fail");
        assert!(matches!(err, ModelError::DuplicateEvent { .. }));
    }

    #[test]
    fn filter_narrows_one_kind_only() {
        let mut model = InMemoryRosterModel::new();
        for name in ["Intro Tutorial", "Graphs", "Intro Review"] {
            model
                .add_event(event(EventKind::Tutorial, name))
                .expect("add tutorial");
        }
        model
            .add_event(event(EventKind::Lab, "Graphs"))
            .expect("add lab");

        model.update_event_filter(
            EventKind::Tutorial,
            EventFilter::NameContainsAny(vec!["intro".to_string()]),
        );
        let names = model
            .filtered_events(EventKind::Tutorial)
            .into_iter()
            .map(|event| event.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Intro Tutorial", "Intro Review"]);
        assert_eq!(model.all_events(EventKind::Tutorial).len(), 3);
        assert_eq!(model.filtered_events(EventKind::Lab).len(), 1);

        model.reset_filters();
        assert_eq!(model.filtered_events(EventKind::Tutorial).len(), 3);
    }

    #[test]
    fn delete_event_is_identity_based() {
        let mut model = InMemoryRosterModel::new();
        let first = event(EventKind::Lab, "L1");
        let second = event(EventKind::Lab, "L2");
        let second_id = second.id;
        model.add_event(first).expect("add first");
        model.add_event(second).expect("add second");

        let removed = model
            .delete_event(EventKind::Lab, second_id)
            .expect("delete by id");
        assert_eq!(removed.name, "L2");

        let err = model
            .delete_event(EventKind::Tutorial, second_id)
            .expect_err("id belongs to no tutorial");
        assert_eq!(err, ModelError::EventNotFound(second_id));
    }

    #[test]
    fn set_event_keeps_identity_and_rejects_rename_collision() {
        let mut model = InMemoryRosterModel::new();
        let first = event(EventKind::Tutorial, "T01");
        let first_id = first.id;
        model.add_event(first).expect("add first");
        model
            .add_event(event(EventKind::Tutorial, "T02"))
            .expect("add second");

        let renamed = model
            .set_event(
                EventKind::Tutorial,
                first_id,
                event(EventKind::Tutorial, "T01 renamed"),
            )
            .expect("rename");
        assert_eq!(renamed.id, first_id);

        let err = model
            .set_event(
                EventKind::Tutorial,
                first_id,
                event(EventKind::Tutorial, "t02"),
            )
            .expect_err("collision must fail");
        assert!(matches!(err, ModelError::DuplicateEvent { .. }));
    }

    #[test]
    fn student_membership_round_trip() {
        let mut model = InMemoryRosterModel::new();
        let student = Student::new("Alex Yeoh");
        let student_id = student.id;
        model.add_student(student);
        let tutorial = event(EventKind::Tutorial, "T01");
        let tutorial_id = tutorial.id;
        model.add_event(tutorial).expect("add tutorial");

        let updated = model
            .add_student_to_event(EventKind::Tutorial, tutorial_id, student_id)
            .expect("add member");
        assert!(updated.has_student(student_id));

        let err = model
            .add_student_to_event(EventKind::Tutorial, tutorial_id, student_id)
            .expect_err("second add must fail");
        assert!(matches!(err, ModelError::StudentAlreadyInEvent { .. }));

        model
            .remove_student_from_event(EventKind::Tutorial, tutorial_id, student_id)
            .expect("remove member");
        let err = model
            .remove_student_from_event(EventKind::Tutorial, tutorial_id, student_id)
            .expect_err("second remove must fail");
        assert!(matches!(err, ModelError::StudentNotInEvent { .. }));
    }

    #[test]
    fn filter_and_duplicates_fold_non_ascii_case() {
        let mut model = InMemoryRosterModel::new();
        model
            .add_event(event(EventKind::Consultation, "École prep"))
            .expect("add consultation");

        let err = model
            .add_event(event(EventKind::Consultation, "école PREP"))
            .expect_err("case-folded duplicate must fail");
        assert!(matches!(err, ModelError::DuplicateEvent { .. }));

        model.update_event_filter(
            EventKind::Consultation,
            EventFilter::NameContainsAny(vec!["ÉCOLE".to_string()]),
        );
        assert_eq!(model.filtered_events(EventKind::Consultation).len(), 1);
    }

    #[test]
    fn notes_are_edited_and_removed_by_position() {
        let mut model = InMemoryRosterModel::new();
        let lab = event(EventKind::Lab, "L1");
        let lab_id = lab.id;
        model.add_event(lab).expect("add lab");
        model
            .add_note(EventKind::Lab, lab_id, "first".to_string())
            .expect("add first note");
        model
            .add_note(EventKind::Lab, lab_id, "second".to_string())
            .expect("add second note");

        let second = Index::from_one_based(2).expect("positive index");
        let edited = model
            .edit_note(EventKind::Lab, lab_id, second, "2nd".to_string())
            .expect("edit note");
        assert_eq!(edited.notes, ["first", "2nd"]);

        let first = Index::from_one_based(1).expect("positive index");
        let trimmed = model
            .remove_note(EventKind::Lab, lab_id, first)
            .expect("remove note");
        assert_eq!(trimmed.notes, ["2nd"]);

        let err = model
            .remove_note(EventKind::Lab, lab_id, second)
            .expect_err("only one note left");
        assert!(matches!(err, ModelError::NoteNotFound { .. }));
    }
}
