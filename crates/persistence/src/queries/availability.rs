// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Supply-side queries: availability and unavailability.

use diesel::prelude::*;

use crate::data_models::{AvailabilityRow, UnavailabilityRow};
use crate::diesel_schema::{availability, unavailability};
use crate::error::PersistenceError;
use staff_cover_domain::{
    AvailabilityRecord, DateRange, RoleLabel, ScopeKey, UnavailabilityRecord, UserId, format_date,
};

/// Loads availability for a scope inside a date range, optionally narrowed to
/// one user.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row no longer parses.
pub fn availability_in_range(
    conn: &mut SqliteConnection,
    scope: &ScopeKey,
    range: &DateRange,
    user: Option<&UserId>,
) -> Result<Vec<AvailabilityRecord>, PersistenceError> {
    let mut query = availability::table
        .filter(availability::department_id.eq(scope.department_id()))
        .filter(availability::date.ge(format_date(range.start())))
        .filter(availability::date.le(format_date(range.end())))
        .order((availability::user_id.asc(), availability::date.asc()))
        .into_boxed();
    query = match scope.program_id() {
        Some(program_id) => query.filter(availability::program_id.eq(program_id)),
        None => query.filter(availability::program_id.is_null()),
    };
    if let Some(user) = user {
        query = query.filter(availability::user_id.eq(user.value().to_owned()));
    }

    let rows: Vec<AvailabilityRow> = query.load::<AvailabilityRow>(conn)?;
    rows.into_iter().map(AvailabilityRow::into_domain).collect()
}

/// Loads the availability rows of a scope whose role matches exactly or is
/// blank.
///
/// This is the candidate pool for preference ranking: a row without a role
/// means the user did not commit to one and stays eligible for every role.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row no longer parses.
pub fn availability_matching_role(
    conn: &mut SqliteConnection,
    scope: &ScopeKey,
    role: &RoleLabel,
) -> Result<Vec<AvailabilityRecord>, PersistenceError> {
    let mut query = availability::table
        .filter(availability::department_id.eq(scope.department_id()))
        .filter(
            availability::role
                .is_null()
                .or(availability::role.eq(role.value().to_owned())),
        )
        .order((availability::user_id.asc(), availability::date.asc()))
        .into_boxed();
    query = match scope.program_id() {
        Some(program_id) => query.filter(availability::program_id.eq(program_id)),
        None => query.filter(availability::program_id.is_null()),
    };

    let rows: Vec<AvailabilityRow> = query.load::<AvailabilityRow>(conn)?;
    rows.into_iter().map(AvailabilityRow::into_domain).collect()
}

/// Loads unavailability rows inside a date range, optionally narrowed to one
/// user.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row no longer parses.
pub fn unavailability_in_range(
    conn: &mut SqliteConnection,
    range: &DateRange,
    user: Option<&UserId>,
) -> Result<Vec<UnavailabilityRecord>, PersistenceError> {
    let mut query = unavailability::table
        .filter(unavailability::date.ge(format_date(range.start())))
        .filter(unavailability::date.le(format_date(range.end())))
        .order((unavailability::user_id.asc(), unavailability::date.asc()))
        .into_boxed();
    if let Some(user) = user {
        query = query.filter(unavailability::user_id.eq(user.value().to_owned()));
    }

    let rows: Vec<UnavailabilityRow> = query.load::<UnavailabilityRow>(conn)?;
    rows.into_iter()
        .map(UnavailabilityRow::into_domain)
        .collect()
}
