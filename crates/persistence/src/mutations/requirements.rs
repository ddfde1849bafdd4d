// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demand-side mutations.
//!
//! Uniqueness per `(scope, weekday, role)` for templates and per
//! `(scope, date, role)` for explicit rows is enforced here with an
//! existence check inside the transaction: SQLite UNIQUE indexes treat NULL
//! program ids as distinct and cannot express the constraint.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{NewExplicitRequirement, NewRecurringRequirement};
use crate::diesel_schema::{explicit_requirements, recurring_requirements};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use staff_cover_domain::{
    DateRange, ExplicitRequirement, RecurringTemplate, RoleLabel, ScopeKey, format_date,
    weekday_number,
};
use time::Date;

/// Inserts or updates the template for a `(scope, weekday, role)`.
///
/// Returns the template's canonical ID.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn upsert_recurring(
    conn: &mut SqliteConnection,
    template: &RecurringTemplate,
) -> Result<i64, PersistenceError> {
    let new_row: NewRecurringRequirement = NewRecurringRequirement::from_domain(template)?;
    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let scope: ScopeKey = template.scope();
        let weekday: i32 = i32::from(weekday_number(template.weekday()));
        let mut query = recurring_requirements::table
            .filter(recurring_requirements::department_id.eq(scope.department_id()))
            .filter(recurring_requirements::weekday.eq(weekday))
            .filter(recurring_requirements::role.eq(template.role().value().to_owned()))
            .select(recurring_requirements::template_id)
            .into_boxed();
        query = match scope.program_id() {
            Some(program_id) => {
                query.filter(recurring_requirements::program_id.eq(program_id))
            }
            None => query.filter(recurring_requirements::program_id.is_null()),
        };
        let existing: Option<i64> = query.first::<i64>(conn).optional()?;

        match existing {
            Some(template_id) => {
                diesel::update(
                    recurring_requirements::table
                        .filter(recurring_requirements::template_id.eq(template_id)),
                )
                .set(recurring_requirements::count_needed.eq(new_row.count_needed))
                .execute(conn)?;
                Ok(template_id)
            }
            None => {
                diesel::insert_into(recurring_requirements::table)
                    .values(&new_row)
                    .execute(conn)?;
                get_last_insert_rowid(conn)
            }
        }
    })
}

/// Deletes a template by ID.
///
/// # Errors
///
/// Returns `NotFound` if no template has that ID.
pub fn delete_recurring(
    conn: &mut SqliteConnection,
    template_id: i64,
) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(
        recurring_requirements::table
            .filter(recurring_requirements::template_id.eq(template_id)),
    )
    .execute(conn)?;
    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Template {template_id} does not exist"
        )));
    }
    Ok(())
}

/// Inserts or updates the explicit requirement for a `(scope, date, role)`.
///
/// Returns the row's canonical ID.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn upsert_explicit(
    conn: &mut SqliteConnection,
    requirement: &ExplicitRequirement,
) -> Result<i64, PersistenceError> {
    let new_row: NewExplicitRequirement = NewExplicitRequirement::from_domain(requirement)?;
    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let scope: ScopeKey = requirement.scope();
        let mut query = explicit_requirements::table
            .filter(explicit_requirements::department_id.eq(scope.department_id()))
            .filter(explicit_requirements::date.eq(format_date(requirement.date())))
            .filter(explicit_requirements::role.eq(requirement.role().value().to_owned()))
            .select(explicit_requirements::requirement_id)
            .into_boxed();
        query = match scope.program_id() {
            Some(program_id) => query.filter(explicit_requirements::program_id.eq(program_id)),
            None => query.filter(explicit_requirements::program_id.is_null()),
        };
        let existing: Option<i64> = query.first::<i64>(conn).optional()?;

        match existing {
            Some(requirement_id) => {
                diesel::update(
                    explicit_requirements::table
                        .filter(explicit_requirements::requirement_id.eq(requirement_id)),
                )
                .set(explicit_requirements::count_needed.eq(new_row.count_needed))
                .execute(conn)?;
                Ok(requirement_id)
            }
            None => {
                diesel::insert_into(explicit_requirements::table)
                    .values(&new_row)
                    .execute(conn)?;
                get_last_insert_rowid(conn)
            }
        }
    })
}

/// Deletes the explicit requirement for a `(scope, date, role)`.
///
/// The triple falls back to its recurring template afterwards.
///
/// # Errors
///
/// Returns `NotFound` if no row matches.
pub fn delete_explicit(
    conn: &mut SqliteConnection,
    scope: &ScopeKey,
    date: Date,
    role: &RoleLabel,
) -> Result<(), PersistenceError> {
    let deleted: usize = match scope.program_id() {
        Some(program_id) => diesel::delete(
            explicit_requirements::table
                .filter(explicit_requirements::department_id.eq(scope.department_id()))
                .filter(explicit_requirements::program_id.eq(program_id))
                .filter(explicit_requirements::date.eq(format_date(date)))
                .filter(explicit_requirements::role.eq(role.value().to_owned())),
        )
        .execute(conn)?,
        None => diesel::delete(
            explicit_requirements::table
                .filter(explicit_requirements::department_id.eq(scope.department_id()))
                .filter(explicit_requirements::program_id.is_null())
                .filter(explicit_requirements::date.eq(format_date(date)))
                .filter(explicit_requirements::role.eq(role.value().to_owned())),
        )
        .execute(conn)?,
    };
    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "No explicit requirement for {scope} on {} role '{role}'",
            format_date(date)
        )));
    }
    Ok(())
}

/// Inserts a batch of explicit requirements in one transaction.
///
/// Used by materialization; the planner guarantees the batch contains no
/// rows already present.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn insert_explicit_batch(
    conn: &mut SqliteConnection,
    rows: &[ExplicitRequirement],
) -> Result<usize, PersistenceError> {
    let new_rows: Vec<NewExplicitRequirement> = rows
        .iter()
        .map(NewExplicitRequirement::from_domain)
        .collect::<Result<Vec<NewExplicitRequirement>, PersistenceError>>()?;
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let inserted: usize = diesel::insert_into(explicit_requirements::table)
            .values(&new_rows)
            .execute(conn)?;
        debug!(inserted, "materialized explicit requirements");
        Ok(inserted)
    })
}

/// Deletes every explicit requirement for a scope inside a range.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_explicit_in_range(
    conn: &mut SqliteConnection,
    scope: &ScopeKey,
    range: &DateRange,
) -> Result<usize, PersistenceError> {
    let deleted: usize = match scope.program_id() {
        Some(program_id) => diesel::delete(
            explicit_requirements::table
                .filter(explicit_requirements::department_id.eq(scope.department_id()))
                .filter(explicit_requirements::program_id.eq(program_id))
                .filter(explicit_requirements::date.ge(format_date(range.start())))
                .filter(explicit_requirements::date.le(format_date(range.end()))),
        )
        .execute(conn)?,
        None => diesel::delete(
            explicit_requirements::table
                .filter(explicit_requirements::department_id.eq(scope.department_id()))
                .filter(explicit_requirements::program_id.is_null())
                .filter(explicit_requirements::date.ge(format_date(range.start())))
                .filter(explicit_requirements::date.le(format_date(range.end()))),
        )
        .execute(conn)?,
    };
    debug!(deleted, %scope, "cleared explicit requirements in range");
    Ok(deleted)
}
