//! Repository layer abstractions and flat-file persistence implementations.
//!
//! # Responsibility
//! - Define load/save contracts for the roster and the attendance log.
//! - Isolate CSV encoding details from store/business orchestration.
//!
//! # Invariants
//! - `save` rewrites the whole file; there is no append path.
//! - A missing file is not an error: `load` reports it through `TableSnapshot::missing`.
//! - Every other read or parse failure is returned as `StoreError`.

use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod attendance_repo;
mod csv_table;
pub mod roster_repo;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for roster and attendance files.
#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    HeaderMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Short stable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io_failed",
            Self::Csv { .. } => "csv_failed",
            Self::HeaderMismatch { .. } => "header_mismatch",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Csv { path, source } => write!(f, "{}: {source}", path.display()),
            Self::HeaderMismatch {
                path,
                expected,
                found,
            } => write!(
                f,
                "{}: header `{}` lacks required columns `{}`",
                path.display(),
                found.join(","),
                expected.join(",")
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::HeaderMismatch { .. } => None,
        }
    }
}

/// Rows read from one table file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot<T> {
    /// Rows in file order.
    pub rows: Vec<T>,
    /// `true` when the file did not exist; `rows` is then empty.
    pub missing: bool,
}

impl<T> TableSnapshot<T> {
    pub fn present(rows: Vec<T>) -> Self {
        Self {
            rows,
            missing: false,
        }
    }

    pub fn missing() -> Self {
        Self {
            rows: Vec::new(),
            missing: true,
        }
    }
}

/// Persistence contract for the employee roster.
pub trait RosterRepository {
    fn load(&self) -> StoreResult<TableSnapshot<Employee>>;
    fn save(&self, employees: &[Employee]) -> StoreResult<()>;
}

/// Persistence contract for the attendance log.
pub trait AttendanceRepository {
    fn load(&self) -> StoreResult<TableSnapshot<AttendanceRecord>>;
    fn save(&self, records: &[AttendanceRecord]) -> StoreResult<()>;
}
