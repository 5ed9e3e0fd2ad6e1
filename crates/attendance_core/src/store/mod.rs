//! In-memory stores synchronized with their backing repositories.
//!
//! # Responsibility
//! - Hold the full roster and attendance log in memory for the process lifetime.
//! - Persist the whole collection immediately after every mutation.
//!
//! # Invariants
//! - Collections only grow; insertion order is preserved.
//! - In-memory state is updated before `save`; a failed save leaves memory ahead of disk.

use std::fmt::{Display, Formatter};

pub mod attendance_store;
pub mod roster_store;

/// Non-fatal, user-visible message produced while loading a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadNotice {
    EmployeesFileMissing,
    AttendanceFileMissing,
}

impl Display for LoadNotice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmployeesFileMissing => {
                f.write_str("Employees file not found. No employees data available.")
            }
            Self::AttendanceFileMissing => {
                f.write_str("Attendance file not found. No attendance records available.")
            }
        }
    }
}
