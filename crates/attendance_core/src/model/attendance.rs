//! Attendance domain model.
//!
//! # Responsibility
//! - Define the attendance log row and its status vocabulary.
//! - Parse user-supplied status text into a recognized `AttendanceStatus`.
//! - Carry unrecognized persisted status text through unchanged.
//!
//! # Invariants
//! - `date` renders as zero-padded `YYYY-MM-DD`, so date order and text order agree.
//! - `emp_id` is a foreign reference that is not checked against the roster.

use crate::model::employee::EmployeeId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Attendance outcome for one employee on one day.
///
/// Persisted as plain text. `Present` and `Absent` are the recognized
/// literals; any other text read from the file is kept verbatim in `Other`
/// so it lists and re-saves unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Other(String),
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Other(raw) => raw,
        }
    }

    /// Returns whether this is one of the two recognized literals.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for AttendanceStatus {
    /// Exact literal match only; everything else passes through as `Other`.
    fn from(value: String) -> Self {
        match value.as_str() {
            "Present" => Self::Present,
            "Absent" => Self::Absent,
            _ => Self::Other(value),
        }
    }
}

impl From<AttendanceStatus> for String {
    fn from(value: AttendanceStatus) -> Self {
        match value {
            AttendanceStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Rejected status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusParseError {
    pub input: String,
}

impl Display for StatusParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid attendance status `{}`; expected Present|Absent",
            self.input
        )
    }
}

impl Error for StatusParseError {}

impl FromStr for AttendanceStatus {
    type Err = StatusParseError;

    /// Strict parse for user input: case-insensitive after trimming, so
    /// `present` and ` ABSENT ` are accepted, and nothing else is.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            _ => Err(StatusParseError {
                input: value.to_string(),
            }),
        }
    }
}

/// One attendance observation.
///
/// Field names double as the CSV column names (`emp_id,date,status`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub emp_id: EmployeeId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(emp_id: EmployeeId, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            emp_id,
            date,
            status,
        }
    }

    /// Returns whether `date` falls in `start..=end`.
    ///
    /// An inverted range (`start > end`) contains nothing.
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}
