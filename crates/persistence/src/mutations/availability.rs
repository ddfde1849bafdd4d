// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Supply-side mutations.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{NewAvailability, NewUnavailability};
use crate::diesel_schema::{availability, unavailability};
use crate::error::PersistenceError;
use staff_cover_domain::{AvailabilityRecord, DateRange, ScopeKey, UserId, format_date};
use time::Date;

/// Replaces a user's availability for a scope inside a range.
///
/// This is the replace-range primitive: all rows for the user and scope
/// whose date falls inside the range are deleted and the new set is inserted,
/// in one transaction. Last write wins; there is no merge. The range is the
/// caller's responsibility: submit passes the min..max span of the
/// submitted dates, copy-previous passes the whole target month.
///
/// Returns the number of rows inserted.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn replace_availability_range(
    conn: &mut SqliteConnection,
    user: &UserId,
    scope: &ScopeKey,
    range: &DateRange,
    records: &[AvailabilityRecord],
) -> Result<usize, PersistenceError> {
    let new_rows: Vec<NewAvailability> =
        records.iter().map(NewAvailability::from_domain).collect();
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let deleted: usize = match scope.program_id() {
            Some(program_id) => diesel::delete(
                availability::table
                    .filter(availability::user_id.eq(user.value().to_owned()))
                    .filter(availability::department_id.eq(scope.department_id()))
                    .filter(availability::program_id.eq(program_id))
                    .filter(availability::date.ge(format_date(range.start())))
                    .filter(availability::date.le(format_date(range.end()))),
            )
            .execute(conn)?,
            None => diesel::delete(
                availability::table
                    .filter(availability::user_id.eq(user.value().to_owned()))
                    .filter(availability::department_id.eq(scope.department_id()))
                    .filter(availability::program_id.is_null())
                    .filter(availability::date.ge(format_date(range.start())))
                    .filter(availability::date.le(format_date(range.end()))),
            )
            .execute(conn)?,
        };
        let inserted: usize = if new_rows.is_empty() {
            0
        } else {
            diesel::insert_into(availability::table)
                .values(&new_rows)
                .execute(conn)?
        };
        debug!(%user, %scope, %range, deleted, inserted, "replaced availability range");
        Ok(inserted)
    })
}

/// Deletes every availability row for a scope inside a range.
///
/// Returns the deletion count and the distinct affected users, captured
/// before the delete executes; the caller notifies them afterwards.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn clear_availability_in_range(
    conn: &mut SqliteConnection,
    scope: &ScopeKey,
    range: &DateRange,
) -> Result<(usize, Vec<UserId>), PersistenceError> {
    conn.transaction::<(usize, Vec<UserId>), PersistenceError, _>(|conn| {
        let mut query = availability::table
            .filter(availability::department_id.eq(scope.department_id()))
            .filter(availability::date.ge(format_date(range.start())))
            .filter(availability::date.le(format_date(range.end())))
            .select(availability::user_id)
            .distinct()
            .order(availability::user_id.asc())
            .into_boxed();
        query = match scope.program_id() {
            Some(program_id) => query.filter(availability::program_id.eq(program_id)),
            None => query.filter(availability::program_id.is_null()),
        };
        let affected: Vec<String> = query.load::<String>(conn)?;
        let affected: Vec<UserId> = affected
            .iter()
            .map(|token| {
                UserId::new(token)
                    .map_err(|e| PersistenceError::InvalidRow(format!("user_id: {e}")))
            })
            .collect::<Result<Vec<UserId>, PersistenceError>>()?;

        let deleted: usize = match scope.program_id() {
            Some(program_id) => diesel::delete(
                availability::table
                    .filter(availability::department_id.eq(scope.department_id()))
                    .filter(availability::program_id.eq(program_id))
                    .filter(availability::date.ge(format_date(range.start())))
                    .filter(availability::date.le(format_date(range.end()))),
            )
            .execute(conn)?,
            None => diesel::delete(
                availability::table
                    .filter(availability::department_id.eq(scope.department_id()))
                    .filter(availability::program_id.is_null())
                    .filter(availability::date.ge(format_date(range.start())))
                    .filter(availability::date.le(format_date(range.end()))),
            )
            .execute(conn)?,
        };
        debug!(%scope, %range, deleted, users = affected.len(), "cleared availability");
        Ok((deleted, affected))
    })
}

/// Replaces a user's blackout dates inside a range.
///
/// Same discipline as availability: delete the span, insert the new set,
/// one transaction.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn replace_unavailability_range(
    conn: &mut SqliteConnection,
    user: &UserId,
    range: &DateRange,
    dates: &[Date],
) -> Result<usize, PersistenceError> {
    let new_rows: Vec<NewUnavailability> = dates
        .iter()
        .map(|&date| NewUnavailability {
            user_id: user.value().to_owned(),
            date: format_date(date),
        })
        .collect();
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        diesel::delete(
            unavailability::table
                .filter(unavailability::user_id.eq(user.value().to_owned()))
                .filter(unavailability::date.ge(format_date(range.start())))
                .filter(unavailability::date.le(format_date(range.end()))),
        )
        .execute(conn)?;
        let inserted: usize = if new_rows.is_empty() {
            0
        } else {
            diesel::insert_into(unavailability::table)
                .values(&new_rows)
                .execute(conn)?
        };
        debug!(%user, %range, inserted, "replaced unavailability range");
        Ok(inserted)
    })
}
