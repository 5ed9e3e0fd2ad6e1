//! Attendance use-case service.
//!
//! # Responsibility
//! - Compose the roster and attendance stores for the process lifetime.
//! - Load both files on start and persist after each mutation.
//! - Join attendance records with roster names for listings and reports.
//!
//! # Invariants
//! - The manager trusts its input and accepts any `AttendanceStatus`,
//!   including unrecognized `Other` text; validation belongs to the shell.
//! - Records whose `emp_id` has no roster entry are listed as `Unknown`.

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::employee::{Employee, EmployeeId};
use crate::repo::{AttendanceRepository, RosterRepository, StoreResult};
use crate::store::attendance_store::AttendanceStore;
use crate::store::roster_store::RosterStore;
use crate::store::LoadNotice;
use chrono::NaiveDate;
use log::info;
use std::fmt::{Display, Formatter};

/// Display name used when an attendance record references no known employee.
pub const UNKNOWN_EMPLOYEE_NAME: &str = "Unknown";

/// Shown when a listing is empty.
pub const NO_RECORDS_MESSAGE: &str = "No attendance records found.";

/// Shown when a report range matches nothing.
pub const NO_RECORDS_IN_RANGE_MESSAGE: &str =
    "No attendance records found for the given date range.";

/// One attendance record joined with its resolved employee name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceEntry {
    pub employee_name: String,
    pub record: AttendanceRecord,
}

impl Display for AttendanceEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Employee: {}, ID: {}, Date: {}, Status: {}",
            self.employee_name, self.record.emp_id, self.record.date, self.record.status
        )
    }
}

/// Attendance entries within an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub entries: Vec<AttendanceEntry>,
}

impl AttendanceReport {
    /// Report header line naming the range.
    pub fn title(&self) -> String {
        format!("Attendance report from {} to {}:", self.start, self.end)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Owns both stores and exposes the shell-facing operations.
pub struct AttendanceManager<R: RosterRepository, A: AttendanceRepository> {
    roster: RosterStore<R>,
    attendance: AttendanceStore<A>,
}

impl<R: RosterRepository, A: AttendanceRepository> AttendanceManager<R, A> {
    /// Loads the roster and the attendance log.
    ///
    /// Missing files are downgraded to `notices()`; other failures are returned.
    pub fn open(roster_repo: R, attendance_repo: A) -> StoreResult<Self> {
        let roster = RosterStore::load(roster_repo)?;
        let attendance = AttendanceStore::load(attendance_repo)?;
        info!(
            "event=manager_open module=service status=ok employees={} records={}",
            roster.employees().len(),
            attendance.records().len()
        );
        Ok(Self { roster, attendance })
    }

    /// Notices collected while loading, roster first.
    pub fn notices(&self) -> Vec<LoadNotice> {
        self.roster
            .load_notice()
            .into_iter()
            .chain(self.attendance.load_notice())
            .collect()
    }

    /// Adds an employee with the next sequential id.
    pub fn add_employee(&mut self, name: impl Into<String>) -> StoreResult<Employee> {
        self.roster.add(name)
    }

    /// Marks attendance for today's local date.
    pub fn mark_attendance(
        &mut self,
        emp_id: EmployeeId,
        status: AttendanceStatus,
    ) -> StoreResult<AttendanceRecord> {
        self.attendance.mark(emp_id, status)
    }

    /// Marks attendance for an explicit date.
    pub fn mark_attendance_on(
        &mut self,
        emp_id: EmployeeId,
        status: AttendanceStatus,
        date: NaiveDate,
    ) -> StoreResult<AttendanceRecord> {
        self.attendance.mark_on(emp_id, status, date)
    }

    /// Lists records for one employee, or all records when `emp_id` is `None`.
    ///
    /// Unknown ids produce an empty list, not an error.
    pub fn view_attendance(&self, emp_id: Option<EmployeeId>) -> Vec<AttendanceEntry> {
        match emp_id {
            Some(emp_id) => self.join_names(self.attendance.filter_by_employee(emp_id)),
            None => self.join_names(self.attendance.records().iter()),
        }
    }

    /// Lists records dated in `start..=end`.
    pub fn generate_report(&self, start: NaiveDate, end: NaiveDate) -> AttendanceReport {
        let entries = self.join_names(self.attendance.filter_by_date_range(start, end));
        info!(
            "event=report_generate module=service status=ok start={} end={} entries={}",
            start,
            end,
            entries.len()
        );
        AttendanceReport {
            start,
            end,
            entries,
        }
    }

    pub fn employees(&self) -> &[Employee] {
        self.roster.employees()
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        self.attendance.records()
    }

    fn join_names<'a>(
        &self,
        records: impl IntoIterator<Item = &'a AttendanceRecord>,
    ) -> Vec<AttendanceEntry> {
        records
            .into_iter()
            .map(|record| AttendanceEntry {
                employee_name: self
                    .roster
                    .name_of(record.emp_id)
                    .unwrap_or(UNKNOWN_EMPLOYEE_NAME)
                    .to_string(),
                record: record.clone(),
            })
            .collect()
    }
}
