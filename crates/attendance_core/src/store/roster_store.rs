//! Employee roster store.
//!
//! # Responsibility
//! - Own the in-memory roster and assign ids to new employees.
//! - Resolve display names for attendance listings.
//!
//! # Invariants
//! - New ids are `len(roster) + 1`. Existing ids are not consulted, so a
//!   hand-edited file can lead to duplicates.

use super::LoadNotice;
use crate::model::employee::{Employee, EmployeeId};
use crate::repo::{RosterRepository, StoreResult};
use log::info;

pub struct RosterStore<R: RosterRepository> {
    repo: R,
    employees: Vec<Employee>,
    notice: Option<LoadNotice>,
}

impl<R: RosterRepository> RosterStore<R> {
    /// Loads the roster from `repo`.
    ///
    /// A missing file yields an empty roster and `load_notice()` returns
    /// `LoadNotice::EmployeesFileMissing`. Any other failure is returned.
    pub fn load(repo: R) -> StoreResult<Self> {
        let snapshot = repo.load()?;
        let notice = snapshot
            .missing
            .then_some(LoadNotice::EmployeesFileMissing);
        Ok(Self {
            repo,
            employees: snapshot.rows,
            notice,
        })
    }

    /// Rewrites the backing file from the in-memory roster.
    pub fn save(&self) -> StoreResult<()> {
        self.repo.save(&self.employees)
    }

    /// Appends a new employee with the next id and persists the roster.
    pub fn add(&mut self, name: impl Into<String>) -> StoreResult<Employee> {
        let emp_id = self.next_id();
        let employee = Employee::new(emp_id, name);
        self.employees.push(employee.clone());
        self.save()?;
        info!(
            "event=employee_add module=store status=ok emp_id={} roster_size={}",
            emp_id,
            self.employees.len()
        );
        Ok(employee)
    }

    /// Returns the name of the first employee with `emp_id`.
    pub fn name_of(&self, emp_id: EmployeeId) -> Option<&str> {
        self.employees
            .iter()
            .find(|employee| employee.emp_id == emp_id)
            .map(|employee| employee.name.as_str())
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn load_notice(&self) -> Option<LoadNotice> {
        self.notice
    }

    fn next_id(&self) -> EmployeeId {
        self.employees.len() as EmployeeId + 1
    }
}
