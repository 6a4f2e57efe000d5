use rollcall_core::command::delete_event::DeleteEventCommand;
use rollcall_core::{
    Command, CommandError, Event, EventFilter, EventKind, InMemoryRosterModel, Index,
    IndexScope, RosterModel,
};

fn names(model: &InMemoryRosterModel, kind: EventKind) -> Vec<String> {
    model
        .filtered_events(kind)
        .into_iter()
        .map(|event| event.name.clone())
        .collect()
}

fn seeded_model() -> InMemoryRosterModel {
    let mut model = InMemoryRosterModel::new();
    for name in ["T1", "T2", "T3"] {
        model
            .add_event(Event::new(EventKind::Tutorial, name).unwrap())
            .unwrap();
    }
    for name in ["L1", "L2"] {
        model
            .add_event(Event::new(EventKind::Lab, name).unwrap())
            .unwrap();
    }
    model
        .add_event(Event::new(EventKind::Consultation, "C1").unwrap())
        .unwrap();
    model
}

fn one_based(value: usize) -> Index {
    Index::from_one_based(value).unwrap()
}

#[test]
fn deletes_only_the_targeted_kind() {
    let mut model = seeded_model();
    let command = DeleteEventCommand::parse(" Tutorial/2").unwrap();

    let result = Box::new(command).execute(&mut model).unwrap();

    assert_eq!(result.feedback, "Deleted Event: Tutorial: T2; Students: 0");
    assert_eq!(names(&model, EventKind::Tutorial), ["T1", "T3"]);
    assert_eq!(names(&model, EventKind::Lab), ["L1", "L2"]);
    assert_eq!(names(&model, EventKind::Consultation), ["C1"]);
}

#[test]
fn each_kind_uses_its_own_view() {
    let mut model = seeded_model();

    Box::new(DeleteEventCommand::parse("Lab/2").unwrap())
        .execute(&mut model)
        .unwrap();
    Box::new(DeleteEventCommand::parse("Consultation/1").unwrap())
        .execute(&mut model)
        .unwrap();

    assert_eq!(names(&model, EventKind::Tutorial), ["T1", "T2", "T3"]);
    assert_eq!(names(&model, EventKind::Lab), ["L1"]);
    assert!(names(&model, EventKind::Consultation).is_empty());
}

#[test]
fn last_mark_wins_before_execution() {
    let mut model = InMemoryRosterModel::new();
    for name in ["T1", "T2", "T3"] {
        model
            .add_event(Event::new(EventKind::Tutorial, name).unwrap())
            .unwrap();
    }
    for name in ["L1", "L2"] {
        model
            .add_event(Event::new(EventKind::Lab, name).unwrap())
            .unwrap();
    }

    let mut command = DeleteEventCommand::new(one_based(2));
    command.mark(EventKind::Tutorial);
    command.mark(EventKind::Lab);
    assert_eq!(command.selection().kind(), Some(EventKind::Lab));

    let result = Box::new(command).execute(&mut model).unwrap();
    assert!(result.feedback.ends_with("Lab: L2; Students: 0"));
    assert_eq!(names(&model, EventKind::Tutorial), ["T1", "T2", "T3"]);
    assert_eq!(names(&model, EventKind::Lab), ["L1"]);
}

#[test]
fn index_resolves_against_filtered_view() {
    let mut model = InMemoryRosterModel::new();
    for name in ["Intro A", "Graphs", "Intro B", "Trees", "Intro C"] {
        model
            .add_event(Event::new(EventKind::Tutorial, name).unwrap())
            .unwrap();
    }
    model.update_event_filter(
        EventKind::Tutorial,
        EventFilter::NameContainsAny(vec!["intro".to_string()]),
    );

    let command = DeleteEventCommand::for_kind(one_based(2), EventKind::Tutorial);
    Box::new(command).execute(&mut model).unwrap();

    let remaining = model
        .all_events(EventKind::Tutorial)
        .into_iter()
        .map(|event| event.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(remaining, ["Intro A", "Graphs", "Trees", "Intro C"]);
}

#[test]
fn out_of_range_uses_filtered_size_and_leaves_model_untouched() {
    let mut model = InMemoryRosterModel::new();
    for name in ["Intro A", "Intro B", "Intro C", "Graphs", "Trees", "Heaps"] {
        model
            .add_event(Event::new(EventKind::Lab, name).unwrap())
            .unwrap();
    }
    model.update_event_filter(
        EventKind::Lab,
        EventFilter::NameContainsAny(vec!["intro".to_string()]),
    );
    assert_eq!(model.filtered_events(EventKind::Lab).len(), 3);

    let command = DeleteEventCommand::for_kind(one_based(5), EventKind::Lab);
    let err = Box::new(command).execute(&mut model).unwrap_err();

    assert_eq!(err, CommandError::OutOfRange(IndexScope::Event));
    assert_eq!(err.to_string(), "The event index provided is invalid");
    assert_eq!(model.all_events(EventKind::Lab).len(), 6);
}

#[test]
fn out_of_range_message_is_identical_across_kinds() {
    let mut model = InMemoryRosterModel::new();
    let messages = EventKind::ALL
        .into_iter()
        .map(|kind| {
            Box::new(DeleteEventCommand::for_kind(one_based(1), kind))
                .execute(&mut model)
                .unwrap_err()
                .to_string()
        })
        .collect::<Vec<_>>();
    assert!(messages.iter().all(|message| message == &messages[0]));
}

#[test]
fn malformed_commands_fail_before_execution() {
    for args in [
        "",
        "1",
        "Tutorial/1 Lab/1",
        "Lab/1 -name Alex",
        "-tag friends Consultation/1",
        "extra Tutorial/1",
    ] {
        let err = DeleteEventCommand::parse(args).unwrap_err();
        assert!(
            matches!(err, CommandError::InvalidFormat { .. }),
            "`{args}` gave {err:?}"
        );
    }
}

#[test]
fn non_positive_index_is_invalid_index() {
    for args in ["Tutorial/0", "Lab/-2", "Consultation/two"] {
        assert_eq!(
            DeleteEventCommand::parse(args).unwrap_err(),
            CommandError::InvalidIndex,
            "input `{args}`"
        );
    }
}

#[test]
#[should_panic(expected = "before its event kind was resolved")]
fn executing_unresolved_command_panics() {
    let mut model = seeded_model();
    let _ = Box::new(DeleteEventCommand::new(one_based(1))).execute(&mut model);
}
