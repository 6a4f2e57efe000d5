//! Roster domain model for events, students and display indices.
//!
//! # Responsibility
//! - Define canonical data structures consumed by the command layer.
//! - Keep one event shape for all three event kinds.
//!
//! # Invariants
//! - Every event and student is identified by a stable UUID.
//! - An event's kind never changes after creation.

pub mod event;
pub mod index;
pub mod student;
