// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demand-side records.
//!
//! Demand exists in two forms that are reconciled only at read time (or at
//! explicit materialization time): weekly recurring templates and explicit
//! per-date requirements. An explicit row always wins over a template for its
//! `(date, role)`; deleting the explicit row restores template fallback.

use crate::types::{RoleLabel, ScopeKey};
use serde::{Deserialize, Serialize};
use time::{Date, Weekday};

/// A standing weekly staffing policy.
///
/// Unique per `(weekday, role, scope)`. Templates have no expiry and are
/// deleted independently of any date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringTemplate {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the template has not been persisted yet.
    template_id: Option<i64>,
    /// The scope this template applies to.
    scope: ScopeKey,
    /// The weekday this template fires on.
    weekday: Weekday,
    /// The staffing role.
    role: RoleLabel,
    /// How many people are needed.
    count_needed: u32,
}

impl RecurringTemplate {
    /// Creates a new `RecurringTemplate` without a persisted ID.
    #[must_use]
    pub const fn new(scope: ScopeKey, weekday: Weekday, role: RoleLabel, count_needed: u32) -> Self {
        Self {
            template_id: None,
            scope,
            weekday,
            role,
            count_needed,
        }
    }

    /// Creates a `RecurringTemplate` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        template_id: i64,
        scope: ScopeKey,
        weekday: Weekday,
        role: RoleLabel,
        count_needed: u32,
    ) -> Self {
        Self {
            template_id: Some(template_id),
            scope,
            weekday,
            role,
            count_needed,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn template_id(&self) -> Option<i64> {
        self.template_id
    }

    /// Returns the scope.
    #[must_use]
    pub const fn scope(&self) -> ScopeKey {
        self.scope
    }

    /// Returns the weekday.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> &RoleLabel {
        &self.role
    }

    /// Returns how many people are needed.
    #[must_use]
    pub const fn count_needed(&self) -> u32 {
        self.count_needed
    }
}

/// A demand record pinned to one specific date.
///
/// Unique per `(date, role, scope)`. Once a row exists for a triple it
/// permanently overrides the recurring template for that triple, even if
/// later edited to a different count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplicitRequirement {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the row has not been persisted yet.
    requirement_id: Option<i64>,
    /// The scope this requirement applies to.
    scope: ScopeKey,
    /// The date the requirement is pinned to.
    date: Date,
    /// The staffing role.
    role: RoleLabel,
    /// How many people are needed.
    count_needed: u32,
}

impl ExplicitRequirement {
    /// Creates a new `ExplicitRequirement` without a persisted ID.
    #[must_use]
    pub const fn new(scope: ScopeKey, date: Date, role: RoleLabel, count_needed: u32) -> Self {
        Self {
            requirement_id: None,
            scope,
            date,
            role,
            count_needed,
        }
    }

    /// Creates an `ExplicitRequirement` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        requirement_id: i64,
        scope: ScopeKey,
        date: Date,
        role: RoleLabel,
        count_needed: u32,
    ) -> Self {
        Self {
            requirement_id: Some(requirement_id),
            scope,
            date,
            role,
            count_needed,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn requirement_id(&self) -> Option<i64> {
        self.requirement_id
    }

    /// Returns the scope.
    #[must_use]
    pub const fn scope(&self) -> ScopeKey {
        self.scope
    }

    /// Returns the date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> &RoleLabel {
        &self.role
    }

    /// Returns how many people are needed.
    #[must_use]
    pub const fn count_needed(&self) -> u32 {
        self.count_needed
    }
}

/// Where an effective requirement row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementSource {
    /// The row is an explicit per-date requirement.
    Explicit,
    /// The row was synthesized from a recurring template.
    Recurring,
}

impl RequirementSource {
    /// Converts this source to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Recurring => "recurring",
        }
    }
}

/// One row of the effective requirement set for a range and scope.
///
/// The effective set contains at most one row per `(date, role)` and only
/// rows with nonzero demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveRequirement {
    /// The date demand applies to.
    pub date: Date,
    /// The staffing role.
    pub role: RoleLabel,
    /// How many people are needed.
    pub count_needed: u32,
    /// Whether the row is explicit or template-derived.
    pub source: RequirementSource,
}
