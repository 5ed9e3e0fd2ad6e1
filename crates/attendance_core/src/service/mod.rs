//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into the add/mark/view/report use-cases.
//! - Keep the shell decoupled from storage details.

pub mod attendance_manager;
