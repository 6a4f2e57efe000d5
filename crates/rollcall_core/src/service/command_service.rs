//! Command execution service.
//!
//! # Responsibility
//! - Parse, execute and log one command at a time.
//! - Recover every user-facing failure as a value at this boundary.
//!
//! # Invariants
//! - One command runs to completion before the next is accepted (`&mut self`).
//! - Raw command text is never logged; only the command word and kind.
//! - A parse failure never reaches the model.

use crate::command::error::{CommandError, IndexScope};
use crate::command::result::CommandResult;
use crate::model::index::Index;
use crate::model::student::Student;
use crate::parser::parse_command;
use crate::parser::parser_util::parse_student_name;
use crate::repo::roster_model::RosterModel;
use log::{debug, info, warn};

/// Service owning the roster model for one session.
pub struct CommandService<M: RosterModel> {
    model: M,
}

impl<M: RosterModel> CommandService<M> {
    /// Creates a service around the provided model implementation.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn into_model(self) -> M {
        self.model
    }

    /// Parses and executes one line of command text.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, CommandError> {
        let command = match parse_command(input) {
            Ok(command) => command,
            Err(err) => {
                warn!(
                    "event=command_parse module=service status=error code={}",
                    err.code()
                );
                return Err(err);
            }
        };

        let word = command.command_word();
        let kind = command.kind().map_or("none", |kind| kind.as_str());
        debug!("event=command_parse module=service status=ok command={word} kind={kind}");

        match command.execute(&mut self.model) {
            Ok(result) => {
                info!("event=command_execute module=service status=ok command={word} kind={kind}");
                Ok(result)
            }
            Err(err) => {
                warn!(
                    "event=command_execute module=service status=error command={word} kind={kind} code={}",
                    err.code()
                );
                Err(err)
            }
        }
    }

    /// Adds a student to the roster, reporting the index it is displayed at.
    ///
    /// Student records have no command of their own; hosts seed them here.
    pub fn register_student(&mut self, name: &str) -> Result<CommandResult, CommandError> {
        let student = Student::new(parse_student_name(name)?);
        let feedback = {
            let id = student.id;
            self.model.add_student(student);
            let students = self.model.filtered_students();
            let (position, added) = students
                .iter()
                .enumerate()
                .find(|(_, student)| student.id == id)
                .ok_or(CommandError::OutOfRange(IndexScope::Student))?;
            format!(
                "Registered Student {}: {added}",
                Index::from_zero_based(position)
            )
        };
        info!("event=student_register module=service status=ok");
        Ok(CommandResult::new(feedback))
    }

    /// Executes one line and renders the outcome as display text.
    pub fn execute_to_text(&mut self, input: &str) -> String {
        match self.execute(input) {
            Ok(result) => result.feedback,
            Err(err) => err.to_string(),
        }
    }
}
