// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Input validation helpers used at the operation boundary.
//!
//! Validation always runs before any store access: a malformed request is
//! rejected without touching persistent state.

use crate::calendar::parse_date;
use crate::error::DomainError;
use crate::types::{Program, RoleLabel, ScopeKey};
use time::Date;

/// Parses a list of `YYYY-MM-DD` date strings.
///
/// The list must be non-empty and every entry must be a valid calendar date.
/// Duplicates are collapsed and the result is sorted ascending.
///
/// # Errors
///
/// Returns an error if the list is empty or any entry fails to parse.
pub fn parse_date_list(values: &[String]) -> Result<Vec<Date>, DomainError> {
    if values.is_empty() {
        return Err(DomainError::EmptyDateList);
    }
    let mut dates: Vec<Date> = values
        .iter()
        .map(|value| parse_date(value))
        .collect::<Result<Vec<Date>, DomainError>>()?;
    dates.sort_unstable();
    dates.dedup();
    Ok(dates)
}

/// Validates an optional role string.
///
/// An absent role is allowed (it means "any role" in availability records);
/// a present role must be non-empty.
///
/// # Errors
///
/// Returns an error if a provided role is empty or whitespace.
pub fn validate_optional_role(value: Option<&str>) -> Result<Option<RoleLabel>, DomainError> {
    value.map(RoleLabel::new).transpose()
}

/// Validates that a scope's program belongs to the scope's department.
///
/// # Errors
///
/// Returns an error if the scope names a program whose parent department
/// differs from the scope's department.
pub fn validate_scope_parent(scope: &ScopeKey, program: &Program) -> Result<(), DomainError> {
    if let Some(program_id) = scope.program_id()
        && program.department_id() != scope.department_id()
    {
        return Err(DomainError::ScopeParentMismatch {
            department_id: scope.department_id(),
            program_id,
        });
    }
    Ok(())
}
