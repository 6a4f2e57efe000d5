//! Model Facade contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Expose per-kind filtered views that display indices resolve against.
//! - Expose identity-based mutations that touch exactly one kind's storage.
//!
//! # Invariants
//! - Writes run `Event::validate()` before they reach storage.
//! - Mutations take an entity ID, never a display position.

pub mod roster_model;
