//! Employee domain model.
//!
//! # Responsibility
//! - Define the roster row shared by the store and the CSV layer.
//!
//! # Invariants
//! - `emp_id` is assigned once by the roster store and never changes.
//! - Uniqueness of `emp_id` is a property of the generator, not of this type.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Roster identifier for one employee.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = u32;

/// One roster entry.
///
/// Field names double as the CSV column names (`emp_id,name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub emp_id: EmployeeId,
    /// Free-text display name. May contain commas; the CSV writer quotes it.
    pub name: String,
}

impl Employee {
    pub fn new(emp_id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            emp_id,
            name: name.into(),
        }
    }
}

impl Display for Employee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Employee(ID: {}, Name: {})", self.emp_id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::Employee;

    #[test]
    fn display_matches_roster_listing_format() {
        let employee = Employee::new(3, "Ana");
        assert_eq!(employee.to_string(), "Employee(ID: 3, Name: Ana)");
    }
}
