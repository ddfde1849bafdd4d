// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment lifecycle mutations.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::NewAssignment;
use crate::diesel_schema::assignments;
use crate::error::PersistenceError;
use crate::queries::assignments::assignments_in_range;
use staff_cover_domain::{
    Assignment, AssignmentStatus, DateRange, ScopeKey, format_date,
};

/// Replaces the pending roster for a scope inside a range.
///
/// Deletes every `Pending` row in the range and inserts the provided rows as
/// the new pending roster, in one transaction. `Confirmed` rows are never
/// touched, which lets a scheduler re-draft freely without disturbing
/// approved bookings.
///
/// Returns the number of rows inserted.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn replace_pending_in_range(
    conn: &mut SqliteConnection,
    scope: &ScopeKey,
    range: &DateRange,
    rows: &[Assignment],
) -> Result<usize, PersistenceError> {
    let new_rows: Vec<NewAssignment> = rows.iter().map(NewAssignment::from_domain).collect();
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let deleted: usize = match scope.program_id() {
            Some(program_id) => diesel::delete(
                assignments::table
                    .filter(assignments::department_id.eq(scope.department_id()))
                    .filter(assignments::program_id.eq(program_id))
                    .filter(assignments::status.eq(AssignmentStatus::Pending.as_str()))
                    .filter(assignments::date.ge(format_date(range.start())))
                    .filter(assignments::date.le(format_date(range.end()))),
            )
            .execute(conn)?,
            None => diesel::delete(
                assignments::table
                    .filter(assignments::department_id.eq(scope.department_id()))
                    .filter(assignments::program_id.is_null())
                    .filter(assignments::status.eq(AssignmentStatus::Pending.as_str()))
                    .filter(assignments::date.ge(format_date(range.start())))
                    .filter(assignments::date.le(format_date(range.end()))),
            )
            .execute(conn)?,
        };
        let inserted: usize = if new_rows.is_empty() {
            0
        } else {
            diesel::insert_into(assignments::table)
                .values(&new_rows)
                .execute(conn)?
        };
        debug!(%scope, %range, deleted, inserted, "replaced pending roster");
        Ok(inserted)
    })
}

/// Confirms every pending assignment for a scope inside a range.
///
/// The pending rows are captured first, then flipped to `Confirmed` in one
/// batch; the returned snapshot (with the new status) feeds per-user
/// notification grouping. An empty range returns an empty vector; the
/// caller decides whether that is an error.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn confirm_pending_in_range(
    conn: &mut SqliteConnection,
    scope: &ScopeKey,
    range: &DateRange,
) -> Result<Vec<Assignment>, PersistenceError> {
    conn.transaction::<Vec<Assignment>, PersistenceError, _>(|conn| {
        let pending: Vec<Assignment> =
            assignments_in_range(conn, scope, range, Some(AssignmentStatus::Pending))?;
        if pending.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = pending.iter().filter_map(Assignment::assignment_id).collect();
        diesel::update(assignments::table.filter(assignments::assignment_id.eq_any(&ids)))
            .set(assignments::status.eq(AssignmentStatus::Confirmed.as_str()))
            .execute(conn)?;

        let confirmed: Vec<Assignment> = pending
            .into_iter()
            .map(|assignment| {
                assignment
                    .transition_to(AssignmentStatus::Confirmed)
                    .map_err(|e| PersistenceError::InvalidRow(e.to_string()))
            })
            .collect::<Result<Vec<Assignment>, PersistenceError>>()?;
        debug!(%scope, %range, confirmed = confirmed.len(), "confirmed pending roster");
        Ok(confirmed)
    })
}
