//! Marker-prefix tokenizer.
//!
//! # Responsibility
//! - Split argument text into a preamble and per-marker values.
//!
//! # Invariants
//! - Pure function of `(text, prefixes)`; never fails.
//! - A marker only counts at the start of the text or after whitespace.
//! - Each recognized marker carries at most one trimmed value.
//! - Marker-like tokens outside the recognized set stay literal text.

use crate::parser::cli_syntax::Prefix;
use std::collections::BTreeMap;

/// Tokenized arguments of one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    preamble: String,
    values: BTreeMap<Prefix, String>,
}

impl ArgumentMap {
    /// Free text before the first recognized marker.
    pub fn preamble(&self) -> &str {
        self.preamble.as_str()
    }

    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values.get(&prefix).map(String::as_str)
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// The subset of `prefixes` that carry a value, in the order given.
    pub fn present_among(&self, prefixes: &[Prefix]) -> Vec<Prefix> {
        prefixes
            .iter()
            .copied()
            .filter(|prefix| self.is_present(*prefix))
            .collect()
    }
}

/// Splits `args` on the first occurrence of each recognized marker.
///
/// Later repeats of the same marker stay inside the preceding value.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMap {
    let markers = find_markers(args, prefixes);
    let preamble_end = markers.first().map_or(args.len(), |(position, _)| *position);
    let mut map = ArgumentMap {
        preamble: args[..preamble_end].trim().to_string(),
        values: BTreeMap::new(),
    };

    for (current, (position, prefix)) in markers.iter().enumerate() {
        let value_start = position + prefix.len();
        let value_end = markers
            .get(current + 1)
            .map_or(args.len(), |(next, _)| *next);
        map.values
            .insert(*prefix, args[value_start..value_end].trim().to_string());
    }
    map
}

fn find_markers(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut markers = prefixes
        .iter()
        .copied()
        .filter(|prefix| !prefix.is_empty())
        .filter_map(|prefix| {
            args.match_indices(prefix.as_str())
                .map(|(position, _)| position)
                .find(|position| is_marker_at(args, *position, prefix))
                .map(|position| (position, prefix))
        })
        .collect::<Vec<_>>();
    markers.sort_by_key(|(position, _)| *position);
    markers.dedup_by_key(|(position, _)| *position);
    markers
}

fn is_marker_at(args: &str, position: usize, prefix: Prefix) -> bool {
    let starts_word = args[..position]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace);
    if !starts_word {
        return false;
    }
    if !prefix.needs_trailing_boundary() {
        return true;
    }
    args[position + prefix.len()..]
        .chars()
        .next()
        .map_or(true, char::is_whitespace)
}
