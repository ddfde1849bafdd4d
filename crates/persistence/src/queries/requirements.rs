// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demand-side queries: recurring templates and explicit requirements.

use diesel::prelude::*;

use crate::data_models::{ExplicitRequirementRow, RecurringRequirementRow};
use crate::diesel_schema::{explicit_requirements, recurring_requirements};
use crate::error::PersistenceError;
use staff_cover_domain::{
    DateRange, ExplicitRequirement, RecurringTemplate, ScopeKey, format_date,
};

/// Loads every recurring template for a scope.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row no longer parses.
pub fn recurring_for_scope(
    conn: &mut SqliteConnection,
    scope: &ScopeKey,
) -> Result<Vec<RecurringTemplate>, PersistenceError> {
    let mut query = recurring_requirements::table
        .filter(recurring_requirements::department_id.eq(scope.department_id()))
        .order(recurring_requirements::template_id.asc())
        .into_boxed();
    query = match scope.program_id() {
        Some(program_id) => query.filter(recurring_requirements::program_id.eq(program_id)),
        None => query.filter(recurring_requirements::program_id.is_null()),
    };

    let rows: Vec<RecurringRequirementRow> = query.load::<RecurringRequirementRow>(conn)?;
    rows.into_iter()
        .map(RecurringRequirementRow::into_domain)
        .collect()
}

/// Loads the explicit requirements for a scope inside a date range.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row no longer parses.
pub fn explicit_in_range(
    conn: &mut SqliteConnection,
    scope: &ScopeKey,
    range: &DateRange,
) -> Result<Vec<ExplicitRequirement>, PersistenceError> {
    let mut query = explicit_requirements::table
        .filter(explicit_requirements::department_id.eq(scope.department_id()))
        .filter(explicit_requirements::date.ge(format_date(range.start())))
        .filter(explicit_requirements::date.le(format_date(range.end())))
        .order(explicit_requirements::date.asc())
        .into_boxed();
    query = match scope.program_id() {
        Some(program_id) => query.filter(explicit_requirements::program_id.eq(program_id)),
        None => query.filter(explicit_requirements::program_id.is_null()),
    };

    let rows: Vec<ExplicitRequirementRow> = query.load::<ExplicitRequirementRow>(conn)?;
    rows.into_iter()
        .map(ExplicitRequirementRow::into_domain)
        .collect()
}
