//! Core use-case services.
//!
//! # Responsibility
//! - Run command text end to end against an injected Model Facade.
//! - Keep UI/FFI layers decoupled from parsing and storage details.

pub mod command_service;
