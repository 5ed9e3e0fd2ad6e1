//! Domain records for the roster and the attendance log.
//!
//! # Responsibility
//! - Define the two value types persisted by the stores.
//! - Keep parsing of persisted text at the type boundary (serde, `FromStr`).
//!
//! # Invariants
//! - Records are never mutated after creation; every edit is an append.
//! - `EmployeeId` is an integer everywhere, never compared as text.

pub mod attendance;
pub mod employee;
