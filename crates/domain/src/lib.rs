// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assignment;
mod availability;
mod calendar;
mod error;
mod requirement;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use assignment::{Assignment, AssignmentStatus};
pub use availability::{AvailabilityRecord, UnavailabilityRecord};
pub use calendar::{
    DateRange, MonthKey, format_date, parse_date, week_index, weekday_from_number, weekday_number,
};
pub use error::DomainError;
pub use requirement::{
    EffectiveRequirement, ExplicitRequirement, RecurringTemplate, RequirementSource,
};
pub use types::{Department, Program, RoleLabel, ScopeKey, UserId};
pub use validation::{parse_date_list, validate_optional_role, validate_scope_parent};
