// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{RoleLabel, ScopeKey, UserId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The lifecycle state of an assignment.
///
/// The transition is monotonic: `Pending` → `Confirmed` only. There is no
/// reject transition; removal is deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AssignmentStatus {
    /// Drafted by a scheduler, not yet approved.
    #[default]
    Pending,
    /// Approved; the person is booked.
    Confirmed,
}

impl AssignmentStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// The only valid transition is `Pending` → `Confirmed`.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!((self, target), (Self::Pending, Self::Confirmed))
    }
}

impl FromStr for AssignmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Confirmed" => Ok(Self::Confirmed),
            _ => Err(DomainError::InvalidStatus(s.to_owned())),
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One filled (or provisionally filled) staffing slot.
///
/// Multiple assignments may exist for the same `(date, role, scope)`; each
/// represents one slot, so the row count is the fill quantity compared
/// against a requirement's `count_needed`. Assignments are the only source of
/// truth for who is actually booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the assignment has not been persisted yet.
    assignment_id: Option<i64>,
    /// The assigned user.
    user_id: UserId,
    /// The scope the slot belongs to.
    scope: ScopeKey,
    /// The working date.
    date: Date,
    /// The staffing role being filled.
    role: RoleLabel,
    /// The lifecycle state.
    status: AssignmentStatus,
}

impl Assignment {
    /// Creates a new pending `Assignment` without a persisted ID.
    #[must_use]
    pub const fn new(user_id: UserId, scope: ScopeKey, date: Date, role: RoleLabel) -> Self {
        Self {
            assignment_id: None,
            user_id,
            scope,
            date,
            role,
            status: AssignmentStatus::Pending,
        }
    }

    /// Creates an `Assignment` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        assignment_id: i64,
        user_id: UserId,
        scope: ScopeKey,
        date: Date,
        role: RoleLabel,
        status: AssignmentStatus,
    ) -> Self {
        Self {
            assignment_id: Some(assignment_id),
            user_id,
            scope,
            date,
            role,
            status,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn assignment_id(&self) -> Option<i64> {
        self.assignment_id
    }

    /// Returns the assigned user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the scope.
    #[must_use]
    pub const fn scope(&self) -> ScopeKey {
        self.scope
    }

    /// Returns the working date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the role being filled.
    #[must_use]
    pub const fn role(&self) -> &RoleLabel {
        &self.role
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn status(&self) -> AssignmentStatus {
        self.status
    }

    /// Returns this assignment with a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not `Pending` → `Confirmed`.
    pub fn transition_to(self, target: AssignmentStatus) -> Result<Self, DomainError> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status,
                to: target,
            });
        }
        Ok(Self {
            status: target,
            ..self
        })
    }
}
