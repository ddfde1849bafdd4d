// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scope directory queries.

use diesel::prelude::*;

use crate::data_models::{DepartmentRow, ProgramRow};
use crate::diesel_schema::{departments, programs};
use crate::error::PersistenceError;
use staff_cover_domain::{Department, Program, ScopeKey};

/// Lists every department, ordered by ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_departments(
    conn: &mut SqliteConnection,
) -> Result<Vec<Department>, PersistenceError> {
    let rows: Vec<DepartmentRow> = departments::table
        .order(departments::department_id.asc())
        .load::<DepartmentRow>(conn)?;
    Ok(rows.into_iter().map(DepartmentRow::into_domain).collect())
}

/// Lists every program under a department, ordered by ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_programs(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<Vec<Program>, PersistenceError> {
    let rows: Vec<ProgramRow> = programs::table
        .filter(programs::department_id.eq(department_id))
        .order(programs::program_id.asc())
        .load::<ProgramRow>(conn)?;
    Ok(rows.into_iter().map(ProgramRow::into_domain).collect())
}

/// Fetches one department by ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<Option<Department>, PersistenceError> {
    let row: Option<DepartmentRow> = departments::table
        .filter(departments::department_id.eq(department_id))
        .first::<DepartmentRow>(conn)
        .optional()?;
    Ok(row.map(DepartmentRow::into_domain))
}

/// Fetches one program by ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_program(
    conn: &mut SqliteConnection,
    program_id: i64,
) -> Result<Option<Program>, PersistenceError> {
    let row: Option<ProgramRow> = programs::table
        .filter(programs::program_id.eq(program_id))
        .first::<ProgramRow>(conn)
        .optional()?;
    Ok(row.map(ProgramRow::into_domain))
}

/// Validates that a scope references an existing department, and an existing
/// program under that department when one is named.
///
/// # Errors
///
/// Returns `NotFound` if the department or program does not exist or the
/// program belongs to a different department.
pub fn validate_scope(
    conn: &mut SqliteConnection,
    scope: &ScopeKey,
) -> Result<(), PersistenceError> {
    if find_department(conn, scope.department_id())?.is_none() {
        return Err(PersistenceError::NotFound(format!(
            "Department {} does not exist",
            scope.department_id()
        )));
    }
    if let Some(program_id) = scope.program_id() {
        let program: Program = find_program(conn, program_id)?.ok_or_else(|| {
            PersistenceError::NotFound(format!("Program {program_id} does not exist"))
        })?;
        if program.department_id() != scope.department_id() {
            return Err(PersistenceError::NotFound(format!(
                "Program {program_id} does not belong to department {}",
                scope.department_id()
            )));
        }
    }
    Ok(())
}
