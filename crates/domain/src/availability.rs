// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Supply-side declarations.
//!
//! Availability is what a person says they could work; it is never a booking.
//! Unavailability is a hard blackout, distinct from "no availability
//! submitted"; it is surfaced to schedulers as a signal but never enforced
//! as a constraint.

use crate::types::{RoleLabel, ScopeKey, UserId};
use serde::{Deserialize, Serialize};
use time::Date;

/// A declaration that a user can work a date in a scope.
///
/// At most one record exists per `(user, date, scope)`. A record without a
/// role means the user did not commit to a specific role; such records match
/// any role in ranking and date filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the record has not been persisted yet.
    availability_id: Option<i64>,
    /// The user who declared availability.
    user_id: UserId,
    /// The scope the declaration applies to.
    scope: ScopeKey,
    /// The workable date.
    date: Date,
    /// The declared role, or `None` for "any role".
    role: Option<RoleLabel>,
}

impl AvailabilityRecord {
    /// Creates a new `AvailabilityRecord` without a persisted ID.
    #[must_use]
    pub const fn new(user_id: UserId, scope: ScopeKey, date: Date, role: Option<RoleLabel>) -> Self {
        Self {
            availability_id: None,
            user_id,
            scope,
            date,
            role,
        }
    }

    /// Creates an `AvailabilityRecord` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        availability_id: i64,
        user_id: UserId,
        scope: ScopeKey,
        date: Date,
        role: Option<RoleLabel>,
    ) -> Self {
        Self {
            availability_id: Some(availability_id),
            user_id,
            scope,
            date,
            role,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn availability_id(&self) -> Option<i64> {
        self.availability_id
    }

    /// Returns the user who declared availability.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the scope.
    #[must_use]
    pub const fn scope(&self) -> ScopeKey {
        self.scope
    }

    /// Returns the workable date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the declared role, or `None` for "any role".
    #[must_use]
    pub const fn role(&self) -> Option<&RoleLabel> {
        self.role.as_ref()
    }

    /// Returns whether this record satisfies a role requirement.
    ///
    /// A record matches when its role equals the requested role exactly, or
    /// when it has no role at all.
    #[must_use]
    pub fn matches_role(&self, role: &RoleLabel) -> bool {
        self.role.as_ref().is_none_or(|own| own == role)
    }
}

/// A hard blackout date for a user.
///
/// Scope-independent and unique per `(user, date)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailabilityRecord {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the record has not been persisted yet.
    unavailability_id: Option<i64>,
    /// The user who is unavailable.
    user_id: UserId,
    /// The blackout date.
    date: Date,
}

impl UnavailabilityRecord {
    /// Creates a new `UnavailabilityRecord` without a persisted ID.
    #[must_use]
    pub const fn new(user_id: UserId, date: Date) -> Self {
        Self {
            unavailability_id: None,
            user_id,
            date,
        }
    }

    /// Creates an `UnavailabilityRecord` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(unavailability_id: i64, user_id: UserId, date: Date) -> Self {
        Self {
            unavailability_id: Some(unavailability_id),
            user_id,
            date,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn unavailability_id(&self) -> Option<i64> {
        self.unavailability_id
    }

    /// Returns the user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the blackout date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }
}
