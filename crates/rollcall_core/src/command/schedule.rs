//! `schedule Recur/<Kind>/NAME -n REPETITIONS [-date START] [-file PATH]`.

use crate::command::error::{CommandError, MESSAGE_CONSULTATION_HAS_NO_FILES};
use crate::command::result::CommandResult;
use crate::command::{Command, CommandOutcome};
use crate::model::event::{Event, EventKind};
use crate::parser::cli_syntax::{
    Prefix, ENTITY_MARKERS, PREFIX_DATE, PREFIX_FILE, PREFIX_RECUR, PREFIX_REPETITIONS,
};
use crate::parser::event_args::{EventGrammar, PreambleRule};
use crate::parser::parser_util::{
    parse_date, parse_event_name, parse_file_path, parse_repetitions,
};
use crate::parser::tokenizer::tokenize;
use crate::repo::roster_model::{ModelError, RosterModel};
use chrono::{Days, NaiveDate};
use std::path::PathBuf;

const DAYS_BETWEEN_OCCURRENCES: u64 = 7;

/// Adds a series of events named `NAME #1..=NAME #n`, all or nothing.
///
/// With a start date the occurrences are a week apart; without one they are
/// left undated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRecurringCommand {
    kind: EventKind,
    name: String,
    start: Option<NaiveDate>,
    repetitions: u32,
    file: Option<PathBuf>,
}

impl ScheduleRecurringCommand {
    pub const COMMAND_WORD: &'static str = "schedule";
    pub const MESSAGE_USAGE: &'static str = "schedule: Adds a series of events named \
        NAME #1, NAME #2, ..., one week apart when a start date is given.\n\
        Parameters: Recur/Tutorial/NAME | Recur/Lab/NAME | Recur/Consultation/NAME \
        -n REPETITIONS [-date YYYY-MM-DD] [-file PATH]\n\
        Example: schedule Recur/Tutorial/CS2103 T01 -n 6 -date 2024-05-01";

    /// Grammar applied to the text inside `Recur/`.
    const SERIES_GRAMMAR: EventGrammar = EventGrammar {
        usage: Self::MESSAGE_USAGE,
        auxiliary: &[],
        preamble: PreambleRule::MustBeEmpty,
        unsupported: &[],
    };

    pub fn new(
        kind: EventKind,
        name: impl Into<String>,
        start: Option<NaiveDate>,
        repetitions: u32,
        file: Option<PathBuf>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            start,
            repetitions,
            file,
        }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let outer_prefixes = [PREFIX_RECUR, PREFIX_REPETITIONS, PREFIX_FILE]
            .into_iter()
            .chain(ENTITY_MARKERS)
            .collect::<Vec<Prefix>>();
        let map = tokenize(args, &outer_prefixes);
        let contact_marker_present = ENTITY_MARKERS
            .iter()
            .filter(|prefix| **prefix != PREFIX_DATE)
            .any(|prefix| map.is_present(*prefix));
        if contact_marker_present || !map.preamble().is_empty() {
            return Err(CommandError::invalid_format(Self::MESSAGE_USAGE));
        }
        let (Some(series), Some(raw_count)) =
            (map.value(PREFIX_RECUR), map.value(PREFIX_REPETITIONS))
        else {
            return Err(CommandError::invalid_format(Self::MESSAGE_USAGE));
        };

        let series_map = Self::SERIES_GRAMMAR.tokenize(series);
        let selected = Self::SERIES_GRAMMAR.resolve(&series_map)?;
        let kind = selected.kind;
        let name = parse_event_name(selected.value)?;
        let start = map.value(PREFIX_DATE).map(parse_date).transpose()?;
        let repetitions = parse_repetitions(raw_count)?;
        let file = match map.value(PREFIX_FILE) {
            Some(_) if !kind.supports_files() => {
                return Err(CommandError::UnsupportedForKind {
                    kind,
                    reason: MESSAGE_CONSULTATION_HAS_NO_FILES,
                })
            }
            Some(raw) => Some(parse_file_path(raw)?),
            None => None,
        };
        Ok(Self::new(kind, name, start, repetitions, file))
    }

    fn occurrences(&self) -> Result<Vec<Event>, CommandError> {
        (0..self.repetitions)
            .map(|offset| {
                let mut event = Event::new(self.kind, format!("{} #{}", self.name, offset + 1))
                    .map_err(|err| CommandError::InvalidArgument(err.to_string()))?;
                if let Some(start) = self.start {
                    event = event.with_date(occurrence_date(start, offset)?);
                }
                event.file = self.file.clone();
                Ok(event)
            })
            .collect()
    }
}

fn occurrence_date(start: NaiveDate, offset: u32) -> Result<NaiveDate, CommandError> {
    start
        .checked_add_days(Days::new(u64::from(offset) * DAYS_BETWEEN_OCCURRENCES))
        .ok_or_else(|| {
            CommandError::InvalidArgument(
                "Recurring dates run past the supported calendar range".to_string(),
            )
        })
}

impl Command for ScheduleRecurringCommand {
    fn command_word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn kind(&self) -> Option<EventKind> {
        Some(self.kind)
    }

    fn execute(self: Box<Self>, model: &mut dyn RosterModel) -> CommandOutcome {
        let series = self.occurrences()?;
        let existing = model.all_events(self.kind);
        if let Some(clash) = series
            .iter()
            .find(|event| existing.iter().any(|other| other.is_same_event(event)))
        {
            return Err(ModelError::DuplicateEvent {
                kind: clash.kind,
                name: clash.name.clone(),
            }
            .into());
        }

        let summary = match (series.first(), series.last()) {
            (Some(first), Some(last)) if series.len() > 1 => format!("{first} ... {last}"),
            (Some(only), _) => only.to_string(),
            _ => String::new(),
        };
        let count = series.len();
        for event in series {
            model.add_event(event)?;
        }
        Ok(CommandResult::new(format!(
            "Scheduled {count} Events: {summary}"
        )))
    }
}
