//! Raw-string to typed-value conversions shared by command parsers.

use crate::command::error::CommandError;
use crate::model::index::Index;
use chrono::NaiveDate;
use std::path::PathBuf;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const MAX_REPETITIONS: u32 = 52;

/// Parses a positive 1-based display index.
///
/// Leading/trailing whitespace is ignored; signs, zero and overflow are rejected.
pub fn parse_index(raw: &str) -> Result<Index, CommandError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(CommandError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(CommandError::InvalidIndex)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        CommandError::InvalidArgument(format!(
            "Dates should be valid and in the format YYYY-MM-DD, got `{}`",
            raw.trim()
        ))
    })
}

pub fn parse_file_path(raw: &str) -> Result<PathBuf, CommandError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommandError::InvalidArgument(
            "File paths should not be blank".to_string(),
        ));
    }
    Ok(PathBuf::from(trimmed))
}

pub fn parse_event_name(raw: &str) -> Result<String, CommandError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommandError::InvalidArgument(
            "Event names should not be blank".to_string(),
        ));
    }
    Ok(trimmed.split_whitespace().collect::<Vec<_>>().join(" "))
}

pub fn parse_student_name(raw: &str) -> Result<String, CommandError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommandError::InvalidArgument(
            "Student names should not be blank".to_string(),
        ));
    }
    Ok(trimmed.split_whitespace().collect::<Vec<_>>().join(" "))
}

pub fn parse_note(raw: &str) -> Result<String, CommandError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommandError::InvalidArgument(
            "Notes should not be blank".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

pub fn parse_repetitions(raw: &str) -> Result<u32, CommandError> {
    match raw.trim().parse::<u32>() {
        Ok(count) if (1..=MAX_REPETITIONS).contains(&count) => Ok(count),
        _ => Err(CommandError::InvalidArgument(format!(
            "Repetitions should be a whole number from 1 to {MAX_REPETITIONS}"
        ))),
    }
}

/// Splits keyword text on whitespace; `None` when nothing remains.
pub fn parse_keywords(raw: &str) -> Option<Vec<String>> {
    let keywords = raw
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();
    (!keywords.is_empty()).then_some(keywords)
}
