//! CSV-backed roster repository (`emp_id,name`).

use super::csv_table::{load_rows, save_rows, TableSpec};
use super::{RosterRepository, StoreResult, TableSnapshot};
use crate::model::employee::Employee;
use std::path::PathBuf;

pub const ROSTER_HEADER: &[&str] = &["emp_id", "name"];

const ROSTER_TABLE: TableSpec = TableSpec {
    name: "employees",
    header: ROSTER_HEADER,
};

/// Roster stored as one CSV file, rewritten on every save.
#[derive(Debug, Clone)]
pub struct CsvRosterRepository {
    path: PathBuf,
}

impl CsvRosterRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterRepository for CsvRosterRepository {
    fn load(&self) -> StoreResult<TableSnapshot<Employee>> {
        load_rows(ROSTER_TABLE, &self.path)
    }

    fn save(&self, employees: &[Employee]) -> StoreResult<()> {
        save_rows(ROSTER_TABLE, &self.path, employees)
    }
}
