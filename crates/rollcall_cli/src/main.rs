//! Interactive command-line entry point.
//!
//! # Responsibility
//! - Load core configuration and start logging when a directory is set.
//! - Register the students named on the command line.
//! - Read one command per line from stdin and print its feedback.
//!
//! # Invariants
//! - Command failures are printed and never end the session.
//! - The session ends on `exit` or end of input.

use clap::Parser;
use log::{error, info};
use rollcall_core::{CommandService, CoreConfig, InMemoryRosterModel};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "rollcall", version, about = "Manage tutorial, lab and consultation rosters")]
struct Cli {
    /// JSON config file, read instead of ROLLCALL_LOG_LEVEL / ROLLCALL_LOG_DIR
    #[arg(long)]
    config: Option<PathBuf>,

    /// student to register before reading commands, repeatable
    #[arg(long = "student", value_name = "NAME")]
    students: Vec<String>,
}

impl Cli {
    fn load_config(&self) -> Result<CoreConfig, String> {
        match &self.config {
            Some(path) => CoreConfig::from_json_file(path),
            None => CoreConfig::from_env(),
        }
        .map_err(|err| err.to_string())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("rollcall: {message}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.apply_logging() {
        eprintln!("rollcall: {err}");
        return ExitCode::FAILURE;
    }

    match run(&cli.students, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_io module=cli status=error error={err}");
            eprintln!("rollcall: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(students: &[String], input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut service = CommandService::new(InMemoryRosterModel::new());
    info!(
        "event=cli_start module=cli status=ok version={} students={}",
        rollcall_core::core_version(),
        students.len()
    );
    writeln!(output, "rollcall {}", rollcall_core::core_version())?;
    for name in students {
        match service.register_student(name) {
            Ok(result) => writeln!(output, "{}", result.feedback)?,
            Err(err) => writeln!(output, "{err}")?,
        }
    }

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let exit = match service.execute(&line) {
            Ok(result) => {
                writeln!(output, "{}", result.feedback)?;
                if let Some(file) = &result.file_to_open {
                    writeln!(output, "open: {}", file.display())?;
                }
                result.exit
            }
            Err(err) => {
                writeln!(output, "{err}")?;
                false
            }
        };
        output.flush()?;
        if exit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, Cli};
    use clap::Parser;

    fn session(script: &str) -> String {
        seeded_session(&[], script)
    }

    fn seeded_session(students: &[&str], script: &str) -> String {
        let students = students.iter().map(|name| name.to_string()).collect::<Vec<_>>();
        let mut output = Vec::new();
        run(&students, script.as_bytes(), &mut output).expect("in-memory io");
        String::from_utf8(output).expect("utf-8 output")
    }

    #[test]
    fn prints_feedback_and_file_requests() {
        let output = session("touch Lab/L01 -file labs/l01.zip\nopen-file Lab/1\n");
        assert!(output.contains("Added Event: Lab: L01; File: labs/l01.zip; Students: 0"));
        assert!(output.contains("open: labs/l01.zip"));
    }

    #[test]
    fn errors_do_not_end_session_but_exit_does() {
        let output = session("delete Lab/1\nexit\ntouch Lab/never\n");
        assert!(output.contains("The event index provided is invalid"));
        assert!(output.contains("Exiting as requested ..."));
        assert!(!output.contains("never"));
    }

    #[test]
    fn parses_config_and_student_flags() {
        let args = Cli::try_parse_from(["rollcall"]);
        assert!(args.is_ok());

        let args = Cli::try_parse_from(["rollcall", "--config"]);
        assert!(args.is_err(), "--config needs a path");

        let args = Cli::try_parse_from(["rollcall", "--verbose"]);
        assert!(args.is_err());

        let args = Cli::try_parse_from([
            "rollcall",
            "--config",
            "rollcall.json",
            "--student",
            "Alex Yeoh",
            "--student",
            "Bernice Yu",
        ])
        .expect("valid flags");
        assert_eq!(args.config.as_deref(), Some(std::path::Path::new("rollcall.json")));
        assert_eq!(args.students, ["Alex Yeoh", "Bernice Yu"]);
    }

    #[test]
    fn help_and_version_are_handled_by_clap() {
        let err = Cli::try_parse_from(["rollcall", "--help"]).expect_err("help exits early");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        let err = Cli::try_parse_from(["rollcall", "--version"]).expect_err("version exits early");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn seeded_students_can_join_events() {
        let output = seeded_session(
            &["Alex Yeoh", "  "],
            "touch Tutorial/T01\naddStudent 1 Tutorial/1\n",
        );
        assert!(output.contains("Registered Student 1: Alex Yeoh"));
        assert!(output.contains("Student names should not be blank"));
        assert!(output.contains("Added Student Alex Yeoh to Event: Tutorial: T01; Students: 1"));
    }
}
