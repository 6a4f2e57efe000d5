//! Argument Resolver for kind-dispatched event commands.
//!
//! # Responsibility
//! - Validate marker combinations against one command's grammar.
//! - Select exactly one event kind from the kind markers.
//!
//! # Invariants
//! - Structural checks (forbidden markers, kind count, preamble) run before
//!   kind-specific checks, so a format error is never reported as a
//!   kind-specific one.
//! - Index conversion runs last.

use crate::command::error::CommandError;
use crate::model::event::EventKind;
use crate::model::index::Index;
use crate::parser::cli_syntax::{kind_of_marker, Prefix, ENTITY_MARKERS, KIND_MARKERS};
use crate::parser::parser_util::parse_index;
use crate::parser::tokenizer::{tokenize, ArgumentMap};

/// Whether free text before the first marker is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreambleRule {
    MustBeEmpty,
    Required,
}

/// Declared marker grammar of one event command.
#[derive(Debug, Clone, Copy)]
pub struct EventGrammar {
    pub usage: &'static str,
    /// Markers this command reads besides the kind markers. Entity markers
    /// listed here are allowed; every other entity marker is forbidden.
    pub auxiliary: &'static [Prefix],
    pub preamble: PreambleRule,
    /// Kinds the command is well-formed for but cannot act on.
    pub unsupported: &'static [(EventKind, &'static str)],
}

/// The one kind marker found in a command and its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindArgument<'a> {
    pub kind: EventKind,
    pub value: &'a str,
}

impl EventGrammar {
    /// Every marker recognized while tokenizing for this grammar.
    pub fn recognized(&self) -> Vec<Prefix> {
        let mut prefixes = KIND_MARKERS.to_vec();
        for prefix in ENTITY_MARKERS.iter().chain(self.auxiliary) {
            if !prefixes.contains(prefix) {
                prefixes.push(*prefix);
            }
        }
        prefixes
    }

    pub fn tokenize(&self, args: &str) -> ArgumentMap {
        tokenize(args, &self.recognized())
    }

    /// Checks the marker combination and selects the event kind.
    pub fn resolve<'a>(&self, args: &'a ArgumentMap) -> Result<KindArgument<'a>, CommandError> {
        let entity_marker_present = ENTITY_MARKERS
            .iter()
            .filter(|prefix| !self.auxiliary.contains(*prefix))
            .any(|prefix| args.is_present(*prefix));
        if entity_marker_present {
            return Err(CommandError::invalid_format(self.usage));
        }

        let kinds = args.present_among(&KIND_MARKERS);
        let preamble_ok = match self.preamble {
            PreambleRule::MustBeEmpty => args.preamble().is_empty(),
            PreambleRule::Required => !args.preamble().is_empty(),
        };
        let [marker] = kinds.as_slice() else {
            return Err(CommandError::invalid_format(self.usage));
        };
        if !preamble_ok {
            return Err(CommandError::invalid_format(self.usage));
        }
        let Some(kind) = kind_of_marker(*marker) else {
            return Err(CommandError::invalid_format(self.usage));
        };

        if let Some((_, reason)) = self
            .unsupported
            .iter()
            .find(|(unsupported, _)| *unsupported == kind)
        {
            return Err(CommandError::UnsupportedForKind {
                kind,
                reason: *reason,
            });
        }

        Ok(KindArgument {
            kind,
            value: args.value(*marker).unwrap_or_default(),
        })
    }

    /// Resolves the kind and parses its marker value as a display index.
    pub fn resolve_index(&self, args: &ArgumentMap) -> Result<(EventKind, Index), CommandError> {
        let selected = self.resolve(args)?;
        Ok((selected.kind, parse_index(selected.value)?))
    }
}
