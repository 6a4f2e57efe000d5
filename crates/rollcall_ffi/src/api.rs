//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose command execution to Dart via FRB as plain envelopes.
//! - Own the single in-memory roster session for the host process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Commands run one at a time; the session lock serializes callers.

use log::warn;
use once_cell::sync::Lazy;
use rollcall_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CommandResult, CommandService, InMemoryRosterModel,
};
use std::sync::{Mutex, MutexGuard};

static SESSION: Lazy<Mutex<CommandService<InMemoryRosterModel>>> =
    Lazy::new(|| Mutex::new(CommandService::new(InMemoryRosterModel::new())));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Outcome of one command line typed into the single entry box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    /// Whether the command succeeded.
    pub ok: bool,
    /// Feedback or error text to show the user.
    pub message: String,
    /// File the host should open, as a UTF-8 path.
    pub file_to_open: Option<String>,
    /// Whether the host should close the session.
    pub exit: bool,
}

impl EntryActionResponse {
    fn success(result: CommandResult) -> Self {
        Self {
            ok: true,
            message: result.feedback,
            file_to_open: result
                .file_to_open
                .map(|path| path.to_string_lossy().into_owned()),
            exit: result.exit,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            file_to_open: None,
            exit: false,
        }
    }
}

/// Parses and executes one command line against the session roster.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; failures are returned with `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_execute(text: String) -> EntryActionResponse {
    let mut session = lock_session();
    match session.execute(text.as_str()) {
        Ok(result) => EntryActionResponse::success(result),
        Err(err) => EntryActionResponse::failure(err.to_string()),
    }
}

/// Adds a student to the session roster so event commands can reference it.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; a blank name is returned with `ok == false`.
/// - On success `message` reads `Registered Student <INDEX>: <NAME>`.
#[flutter_rust_bridge::frb(sync)]
pub fn add_student(name: String) -> EntryActionResponse {
    let mut session = lock_session();
    match session.register_student(name.as_str()) {
        Ok(result) => EntryActionResponse::success(result),
        Err(err) => EntryActionResponse::failure(err.to_string()),
    }
}

fn lock_session() -> MutexGuard<'static, CommandService<InMemoryRosterModel>> {
    SESSION.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered");
        poisoned.into_inner()
    })
}

#[cfg(test)]
mod tests {
    use super::{add_student, core_version, entry_execute, init_logging, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn entry_execute_reports_file_to_open() {
        let added = entry_execute("touch Lab/ffi-open-check -file labs/check.zip".to_string());
        assert!(added.ok, "{}", added.message);

        let found = entry_execute("find-event Lab/ffi-open-check".to_string());
        assert!(found.ok, "{}", found.message);

        let opened = entry_execute("open-file Lab/1".to_string());
        assert!(opened.ok, "{}", opened.message);
        assert_eq!(opened.file_to_open.as_deref(), Some("labs/check.zip"));
        assert!(!opened.exit);
    }

    #[test]
    fn added_student_can_join_an_event() {
        let registered = add_student("Ffi Student".to_string());
        assert!(registered.ok, "{}", registered.message);
        let index = registered
            .message
            .strip_prefix("Registered Student ")
            .and_then(|rest| rest.split(':').next())
            .expect("index in message")
            .to_string();

        let added = entry_execute("touch Tutorial/ffi-student-check".to_string());
        assert!(added.ok, "{}", added.message);
        let found = entry_execute("find-event Tutorial/ffi-student-check".to_string());
        assert!(found.ok, "{}", found.message);

        let joined = entry_execute(format!("addStudent {index} Tutorial/1"));
        assert!(joined.ok, "{}", joined.message);
        assert_eq!(
            joined.message,
            "Added Student Ffi Student to Event: Tutorial: ffi-student-check; Students: 1"
        );
    }

    #[test]
    fn add_student_rejects_blank_name() {
        let response = add_student("   ".to_string());
        assert!(!response.ok);
        assert_eq!(response.message, "Student names should not be blank");
    }

    #[test]
    fn entry_execute_returns_failure_envelope() {
        let response = entry_execute("open-file Consultation/1".to_string());
        assert!(!response.ok);
        assert_eq!(
            response.message,
            "Consultation events do not have files attached to them"
        );
        assert_eq!(response.file_to_open, None);
    }

    #[test]
    fn exit_sets_flag() {
        let response = entry_execute("exit".to_string());
        assert!(response.ok);
        assert!(response.exit);
    }
}
