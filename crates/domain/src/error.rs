// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assignment::AssignmentStatus;
use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date string could not be parsed as `YYYY-MM-DD`.
    InvalidDate {
        /// The invalid date string.
        value: String,
        /// The parsing error message.
        reason: String,
    },
    /// A month string could not be parsed as `YYYY-MM`.
    InvalidMonth(String),
    /// A date range has its start after its end.
    InvalidDateRange {
        /// The range start.
        start: Date,
        /// The range end.
        end: Date,
    },
    /// A date list that must be non-empty was empty.
    EmptyDateList,
    /// A role label is empty or invalid.
    InvalidRole(String),
    /// A user identifier is empty or invalid.
    InvalidUserId(String),
    /// A weekday number is outside `0..=6`.
    InvalidWeekday(u8),
    /// An assignment status string is not recognized.
    InvalidStatus(String),
    /// An assignment status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: AssignmentStatus,
        /// The requested status.
        to: AssignmentStatus,
    },
    /// The referenced department does not exist.
    DepartmentNotFound(i64),
    /// The referenced program does not exist.
    ProgramNotFound(i64),
    /// A program was used under a department it does not belong to.
    ScopeParentMismatch {
        /// The department the caller supplied.
        department_id: i64,
        /// The program whose parent does not match.
        program_id: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { value, reason } => {
                write!(f, "Invalid date '{value}': {reason}")
            }
            Self::InvalidMonth(value) => {
                write!(f, "Invalid month '{value}': expected YYYY-MM")
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: start {start} is after end {end}")
            }
            Self::EmptyDateList => write!(f, "Date list must not be empty"),
            Self::InvalidRole(msg) => write!(f, "Invalid role: {msg}"),
            Self::InvalidUserId(msg) => write!(f, "Invalid user id: {msg}"),
            Self::InvalidWeekday(value) => {
                write!(f, "Invalid weekday number {value}: must be 0 (Sunday) to 6")
            }
            Self::InvalidStatus(value) => {
                write!(f, "Invalid assignment status: {value}")
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Assignment status cannot change from {from} to {to}")
            }
            Self::DepartmentNotFound(id) => write!(f, "Department {id} not found"),
            Self::ProgramNotFound(id) => write!(f, "Program {id} not found"),
            Self::ScopeParentMismatch {
                department_id,
                program_id,
            } => {
                write!(
                    f,
                    "Program {program_id} does not belong to department {department_id}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
