//! Core domain logic for the employee attendance tracker.
//! This crate owns the records, their flat-file persistence and the use-cases.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::attendance::{AttendanceRecord, AttendanceStatus, StatusParseError};
pub use model::employee::{Employee, EmployeeId};
pub use repo::attendance_repo::{CsvAttendanceRepository, ATTENDANCE_HEADER};
pub use repo::roster_repo::{CsvRosterRepository, ROSTER_HEADER};
pub use repo::{AttendanceRepository, RosterRepository, StoreError, StoreResult, TableSnapshot};
pub use service::attendance_manager::{
    AttendanceEntry, AttendanceManager, AttendanceReport, NO_RECORDS_IN_RANGE_MESSAGE,
    NO_RECORDS_MESSAGE, UNKNOWN_EMPLOYEE_NAME,
};
pub use store::attendance_store::AttendanceStore;
pub use store::roster_store::RosterStore;
pub use store::LoadNotice;

/// Manager wired to the two CSV files.
pub type CsvAttendanceManager = AttendanceManager<CsvRosterRepository, CsvAttendanceRepository>;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
