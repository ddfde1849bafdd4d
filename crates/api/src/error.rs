// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use staff_cover_domain::DomainError;
use staff_cover_persistence::PersistenceError;

/// API-level errors.
///
/// These are the caller-visible error kinds. UI layers branch on the kind:
/// `Store` warrants a retry affordance, `NoPriorData` and `NothingToApprove`
/// are informational outcomes, the rest are caller mistakes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authorization failed - the caller's role does not permit the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// Invalid input was provided. Checked before any store access.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A referenced resource was not found.
    NotFound {
        /// The type of resource that was not found.
        resource: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Copy-previous found nothing to copy. An expected outcome, not a
    /// system fault.
    NoPriorData {
        /// The user whose prior month was empty.
        user_id: String,
        /// The month that was requested (the copy target).
        month: String,
    },
    /// Approve found no pending rows in range. An expected outcome.
    NothingToApprove {
        /// The month that was requested.
        month: String,
    },
    /// The underlying store failed. Fatal for this operation; no retry
    /// happens inside the core.
    Store {
        /// A description of the store failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::NotFound { resource, message } => {
                write!(f, "{resource} not found: {message}")
            }
            Self::NoPriorData { user_id, month } => {
                write!(f, "No prior-month data to copy for {user_id} into {month}")
            }
            Self::NothingToApprove { month } => {
                write!(f, "No pending assignments to approve in {month}")
            }
            Self::Store { message } => write!(f, "Store failure: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDate { value, reason } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("'{value}': {reason}"),
        },
        DomainError::InvalidMonth(value) => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("'{value}': expected YYYY-MM"),
        },
        DomainError::InvalidDateRange { start, end } => ApiError::InvalidInput {
            field: String::from("date_range"),
            message: format!("start {start} is after end {end}"),
        },
        DomainError::EmptyDateList => ApiError::InvalidInput {
            field: String::from("dates"),
            message: String::from("At least one date is required"),
        },
        DomainError::InvalidRole(message) => ApiError::InvalidInput {
            field: String::from("role"),
            message,
        },
        DomainError::InvalidUserId(message) => ApiError::InvalidInput {
            field: String::from("user_id"),
            message,
        },
        DomainError::InvalidWeekday(value) => ApiError::InvalidInput {
            field: String::from("weekday"),
            message: format!("{value} is not in 0..=6"),
        },
        DomainError::InvalidStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown status: {value}"),
        },
        DomainError::InvalidStatusTransition { from, to } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Cannot change status from {from} to {to}"),
        },
        DomainError::DepartmentNotFound(id) => ApiError::NotFound {
            resource: String::from("Department"),
            message: format!("Department {id} does not exist"),
        },
        DomainError::ProgramNotFound(id) => ApiError::NotFound {
            resource: String::from("Program"),
            message: format!("Program {id} does not exist"),
        },
        DomainError::ScopeParentMismatch {
            department_id,
            program_id,
        } => ApiError::InvalidInput {
            field: String::from("scope"),
            message: format!(
                "Program {program_id} does not belong to department {department_id}"
            ),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Missing-resource lookups surface as `NotFound`; every other store problem
/// is a `Store` failure the caller may retry.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::NotFound {
            resource: String::from("Record"),
            message,
        },
        other => ApiError::Store {
            message: other.to_string(),
        },
    }
}
