// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scope directory mutations.

use diesel::prelude::*;
use tracing::info;

use crate::data_models::{NewDepartment, NewProgram};
use crate::diesel_schema::{departments, programs};
use crate::error::PersistenceError;
use crate::queries::scopes::find_department;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a department and returns its canonical ID.
///
/// # Errors
///
/// Returns an error if the insert fails (including a duplicate name).
pub fn insert_department(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(departments::table)
        .values(NewDepartment { name })
        .execute(conn)?;
    let department_id: i64 = get_last_insert_rowid(conn)?;
    info!(department_id, name, "created department");
    Ok(department_id)
}

/// Inserts a program under a department and returns its canonical ID.
///
/// # Errors
///
/// Returns `NotFound` if the department does not exist, or an error if the
/// insert fails.
pub fn insert_program(
    conn: &mut SqliteConnection,
    department_id: i64,
    name: &str,
) -> Result<i64, PersistenceError> {
    if find_department(conn, department_id)?.is_none() {
        return Err(PersistenceError::NotFound(format!(
            "Department {department_id} does not exist"
        )));
    }
    diesel::insert_into(programs::table)
        .values(NewProgram {
            department_id,
            name,
        })
        .execute(conn)?;
    let program_id: i64 = get_last_insert_rowid(conn)?;
    info!(program_id, department_id, name, "created program");
    Ok(program_id)
}
