//! CSV-backed attendance log repository (`emp_id,date,status`).
//!
//! # Invariants
//! - `emp_id` is parsed to an integer and `date` to a calendar date here, once.
//! - A status literal other than `Present`/`Absent` is a parse failure.

use super::csv_table::{load_rows, save_rows, TableSpec};
use super::{AttendanceRepository, StoreResult, TableSnapshot};
use crate::model::attendance::AttendanceRecord;
use std::path::PathBuf;

pub const ATTENDANCE_HEADER: &[&str] = &["emp_id", "date", "status"];

const ATTENDANCE_TABLE: TableSpec = TableSpec {
    name: "attendance",
    header: ATTENDANCE_HEADER,
};

/// Attendance log stored as one CSV file, rewritten on every save.
#[derive(Debug, Clone)]
pub struct CsvAttendanceRepository {
    path: PathBuf,
}

impl CsvAttendanceRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AttendanceRepository for CsvAttendanceRepository {
    fn load(&self) -> StoreResult<TableSnapshot<AttendanceRecord>> {
        load_rows(ATTENDANCE_TABLE, &self.path)
    }

    fn save(&self, records: &[AttendanceRecord]) -> StoreResult<()> {
        save_rows(ATTENDANCE_TABLE, &self.path, records)
    }
}
