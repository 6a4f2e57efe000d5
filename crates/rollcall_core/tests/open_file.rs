use rollcall_core::command::open_file::OpenFileCommand;
use rollcall_core::{
    Command, CommandError, Event, EventKind, InMemoryRosterModel, Index, RosterModel,
};
use std::path::PathBuf;

const CONSULTATION_MESSAGE: &str = "Consultation events do not have files attached to them";

fn seeded_model() -> InMemoryRosterModel {
    let mut model = InMemoryRosterModel::new();
    model
        .add_event(
            Event::new(EventKind::Tutorial, "T1")
                .unwrap()
                .with_file("notes/t1.pdf"),
        )
        .unwrap();
    model
        .add_event(Event::new(EventKind::Lab, "L1").unwrap())
        .unwrap();
    model
        .add_event(Event::new(EventKind::Lab, "L2").unwrap().with_file("labs/l2.zip"))
        .unwrap();
    model
        .add_event(Event::new(EventKind::Consultation, "C1").unwrap())
        .unwrap();
    model
}

#[test]
fn requests_host_to_open_attached_file() {
    let mut model = seeded_model();
    let result = Box::new(OpenFileCommand::parse("Lab/2").unwrap())
        .execute(&mut model)
        .unwrap();

    assert_eq!(result.file_to_open, Some(PathBuf::from("labs/l2.zip")));
    assert_eq!(
        result.feedback,
        "Opened Event: Lab: L2; File: labs/l2.zip; Students: 0"
    );
    assert_eq!(model.all_events(EventKind::Lab).len(), 2);
}

#[test]
fn consultation_is_rejected_with_fixed_message() {
    let err = OpenFileCommand::parse("Consultation/1").unwrap_err();
    assert!(matches!(
        err,
        CommandError::UnsupportedForKind {
            kind: EventKind::Consultation,
            ..
        }
    ));
    assert_eq!(err.to_string(), CONSULTATION_MESSAGE);
}

#[test]
fn consultation_is_rejected_at_execution_too() {
    let mut model = seeded_model();
    let mut command = OpenFileCommand::new(Index::from_one_based(1).unwrap());
    command.mark(EventKind::Consultation);

    let err = Box::new(command).execute(&mut model).unwrap_err();
    assert_eq!(err.to_string(), CONSULTATION_MESSAGE);
}

#[test]
fn format_errors_take_precedence_over_consultation_message() {
    for args in ["Consultation/1 Lab/1", "Consultation/1 -date 2024-05-01", "x Consultation/1"] {
        let err = OpenFileCommand::parse(args).unwrap_err();
        assert!(
            matches!(err, CommandError::InvalidFormat { .. }),
            "`{args}` gave {err:?}"
        );
    }
}

#[test]
fn event_without_file_is_rejected() {
    let mut model = seeded_model();
    let err = Box::new(OpenFileCommand::parse("Lab/1").unwrap())
        .execute(&mut model)
        .unwrap_err();
    assert_eq!(
        err,
        CommandError::Rejected("This event does not have a file attached to it".to_string())
    );
}

#[test]
fn out_of_range_index_is_reported() {
    let mut model = seeded_model();
    let err = Box::new(OpenFileCommand::parse("Tutorial/4").unwrap())
        .execute(&mut model)
        .unwrap_err();
    assert_eq!(err.to_string(), "The event index provided is invalid");
}
