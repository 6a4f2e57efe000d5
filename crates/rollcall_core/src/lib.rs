//! Core command layer for the rollcall roster tool.
//! This crate owns command parsing, event-kind dispatch and the roster model.

pub mod command;
pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod repo;
pub mod service;

pub use command::error::{CommandError, IndexScope};
pub use command::result::CommandResult;
pub use command::selection::EventSelection;
pub use command::{Command, CommandOutcome};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventId, EventKind, EventValidationError};
pub use model::index::Index;
pub use model::student::{Student, StudentId};
pub use parser::parse_command;
pub use parser::tokenizer::{tokenize, ArgumentMap};
pub use repo::roster_model::{
    EventFilter, InMemoryRosterModel, ModelError, ModelResult, RosterModel,
};
pub use service::command_service::CommandService;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
