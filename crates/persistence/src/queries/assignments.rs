// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment queries.

use diesel::prelude::*;

use crate::data_models::AssignmentRow;
use crate::diesel_schema::assignments;
use crate::error::PersistenceError;
use staff_cover_domain::{
    Assignment, AssignmentStatus, DateRange, RoleLabel, ScopeKey, format_date,
};

/// Loads every assignment for a scope inside a date range, optionally
/// narrowed to one status.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row no longer parses.
pub fn assignments_in_range(
    conn: &mut SqliteConnection,
    scope: &ScopeKey,
    range: &DateRange,
    status: Option<AssignmentStatus>,
) -> Result<Vec<Assignment>, PersistenceError> {
    let mut query = assignments::table
        .filter(assignments::department_id.eq(scope.department_id()))
        .filter(assignments::date.ge(format_date(range.start())))
        .filter(assignments::date.le(format_date(range.end())))
        .order(assignments::assignment_id.asc())
        .into_boxed();
    query = match scope.program_id() {
        Some(program_id) => query.filter(assignments::program_id.eq(program_id)),
        None => query.filter(assignments::program_id.is_null()),
    };
    if let Some(status) = status {
        query = query.filter(assignments::status.eq(status.as_str()));
    }

    let rows: Vec<AssignmentRow> = query.load::<AssignmentRow>(conn)?;
    rows.into_iter().map(AssignmentRow::into_domain).collect()
}

/// Loads the full assignment history for an exact `(scope, role)`.
///
/// Unbounded in time and status: this feeds preference ranking, where every
/// past booking counts.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row no longer parses.
pub fn history_for_scope_role(
    conn: &mut SqliteConnection,
    scope: &ScopeKey,
    role: &RoleLabel,
) -> Result<Vec<Assignment>, PersistenceError> {
    let mut query = assignments::table
        .filter(assignments::department_id.eq(scope.department_id()))
        .filter(assignments::role.eq(role.value().to_owned()))
        .order(assignments::assignment_id.asc())
        .into_boxed();
    query = match scope.program_id() {
        Some(program_id) => query.filter(assignments::program_id.eq(program_id)),
        None => query.filter(assignments::program_id.is_null()),
    };

    let rows: Vec<AssignmentRow> = query.load::<AssignmentRow>(conn)?;
    rows.into_iter().map(AssignmentRow::into_domain).collect()
}
