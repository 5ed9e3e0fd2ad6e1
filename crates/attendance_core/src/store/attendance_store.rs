//! Attendance log store.
//!
//! # Responsibility
//! - Own the in-memory attendance log and append new observations.
//! - Provide the two scan filters used by listings and reports.
//!
//! # Invariants
//! - Records keep insertion order, which is marking order, not date order.
//! - The same employee may be marked several times on one date.

use super::LoadNotice;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::employee::EmployeeId;
use crate::repo::{AttendanceRepository, StoreResult};
use chrono::{Local, NaiveDate};
use log::info;

pub struct AttendanceStore<R: AttendanceRepository> {
    repo: R,
    records: Vec<AttendanceRecord>,
    notice: Option<LoadNotice>,
}

impl<R: AttendanceRepository> AttendanceStore<R> {
    /// Loads the attendance log from `repo`.
    ///
    /// A missing file yields an empty log and `load_notice()` returns
    /// `LoadNotice::AttendanceFileMissing`.
    pub fn load(repo: R) -> StoreResult<Self> {
        let snapshot = repo.load()?;
        let notice = snapshot
            .missing
            .then_some(LoadNotice::AttendanceFileMissing);
        Ok(Self {
            repo,
            records: snapshot.rows,
            notice,
        })
    }

    pub fn save(&self) -> StoreResult<()> {
        self.repo.save(&self.records)
    }

    /// Marks `emp_id` with `status` for the current local date.
    pub fn mark(
        &mut self,
        emp_id: EmployeeId,
        status: AttendanceStatus,
    ) -> StoreResult<AttendanceRecord> {
        self.mark_on(emp_id, status, Local::now().date_naive())
    }

    /// Appends one record for `date` and persists the log.
    pub fn mark_on(
        &mut self,
        emp_id: EmployeeId,
        status: AttendanceStatus,
        date: NaiveDate,
    ) -> StoreResult<AttendanceRecord> {
        let record = AttendanceRecord::new(emp_id, date, status);
        self.records.push(record.clone());
        self.save()?;
        info!(
            "event=attendance_mark module=store status=ok emp_id={} date={} outcome={}",
            emp_id, date, record.status
        );
        Ok(record)
    }

    pub fn filter_by_employee(&self, emp_id: EmployeeId) -> Vec<&AttendanceRecord> {
        self.records
            .iter()
            .filter(|record| record.emp_id == emp_id)
            .collect()
    }

    /// Records dated in `start..=end`; empty when `start > end`.
    pub fn filter_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&AttendanceRecord> {
        self.records
            .iter()
            .filter(|record| record.is_within(start, end))
            .collect()
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn load_notice(&self) -> Option<LoadNotice> {
        self.notice
    }
}
