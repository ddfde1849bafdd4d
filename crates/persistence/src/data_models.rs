// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs mapping between the database and domain types.
//!
//! Queryable structs mirror their `diesel_schema` column order exactly.
//! Conversions back to domain types are fallible: a row that no longer parses
//! (bad date text, unknown status) surfaces as `InvalidRow` rather than a
//! panic.

use crate::diesel_schema::{
    assignments, availability, departments, explicit_requirements, programs,
    recurring_requirements, unavailability,
};
use crate::error::PersistenceError;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use staff_cover_domain::{
    Assignment, AssignmentStatus, AvailabilityRecord, Department, ExplicitRequirement, Program,
    RecurringTemplate, RoleLabel, ScopeKey, UnavailabilityRecord, UserId, format_date, parse_date,
    weekday_from_number, weekday_number,
};
use std::str::FromStr;
use time::Date;

fn invalid<E: std::fmt::Display>(context: &str) -> impl FnOnce(E) -> PersistenceError + '_ {
    move |e| PersistenceError::InvalidRow(format!("{context}: {e}"))
}

#[derive(Debug, Queryable)]
pub struct DepartmentRow {
    pub department_id: i64,
    pub name: String,
}

impl DepartmentRow {
    pub fn into_domain(self) -> Department {
        Department::with_id(self.department_id, self.name)
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = departments)]
pub struct NewDepartment<'a> {
    pub name: &'a str,
}

#[derive(Debug, Queryable)]
pub struct ProgramRow {
    pub program_id: i64,
    pub department_id: i64,
    pub name: String,
}

impl ProgramRow {
    pub fn into_domain(self) -> Program {
        Program::with_id(self.program_id, self.department_id, self.name)
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = programs)]
pub struct NewProgram<'a> {
    pub department_id: i64,
    pub name: &'a str,
}

#[derive(Debug, Queryable)]
pub struct RecurringRequirementRow {
    pub template_id: i64,
    pub department_id: i64,
    pub program_id: Option<i64>,
    pub weekday: i32,
    pub role: String,
    pub count_needed: i32,
}

impl RecurringRequirementRow {
    pub fn into_domain(self) -> Result<RecurringTemplate, PersistenceError> {
        let weekday_value: u8 = self
            .weekday
            .to_u8()
            .ok_or_else(|| PersistenceError::InvalidRow(format!("weekday {}", self.weekday)))?;
        let weekday: time::Weekday =
            weekday_from_number(weekday_value).map_err(invalid("weekday"))?;
        let role: RoleLabel = RoleLabel::new(&self.role).map_err(invalid("role"))?;
        let count_needed: u32 = self.count_needed.to_u32().ok_or_else(|| {
            PersistenceError::InvalidRow(format!("count_needed {}", self.count_needed))
        })?;
        Ok(RecurringTemplate::with_id(
            self.template_id,
            ScopeKey::new(self.department_id, self.program_id),
            weekday,
            role,
            count_needed,
        ))
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = recurring_requirements)]
pub struct NewRecurringRequirement {
    pub department_id: i64,
    pub program_id: Option<i64>,
    pub weekday: i32,
    pub role: String,
    pub count_needed: i32,
}

impl NewRecurringRequirement {
    pub fn from_domain(template: &RecurringTemplate) -> Result<Self, PersistenceError> {
        let count_needed: i32 = template.count_needed().to_i32().ok_or_else(|| {
            PersistenceError::InvalidRow(format!("count_needed {}", template.count_needed()))
        })?;
        Ok(Self {
            department_id: template.scope().department_id(),
            program_id: template.scope().program_id(),
            weekday: i32::from(weekday_number(template.weekday())),
            role: template.role().value().to_owned(),
            count_needed,
        })
    }
}

#[derive(Debug, Queryable)]
pub struct ExplicitRequirementRow {
    pub requirement_id: i64,
    pub department_id: i64,
    pub program_id: Option<i64>,
    pub date: String,
    pub role: String,
    pub count_needed: i32,
}

impl ExplicitRequirementRow {
    pub fn into_domain(self) -> Result<ExplicitRequirement, PersistenceError> {
        let date: Date = parse_date(&self.date).map_err(invalid("date"))?;
        let role: RoleLabel = RoleLabel::new(&self.role).map_err(invalid("role"))?;
        let count_needed: u32 = self.count_needed.to_u32().ok_or_else(|| {
            PersistenceError::InvalidRow(format!("count_needed {}", self.count_needed))
        })?;
        Ok(ExplicitRequirement::with_id(
            self.requirement_id,
            ScopeKey::new(self.department_id, self.program_id),
            date,
            role,
            count_needed,
        ))
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = explicit_requirements)]
pub struct NewExplicitRequirement {
    pub department_id: i64,
    pub program_id: Option<i64>,
    pub date: String,
    pub role: String,
    pub count_needed: i32,
}

impl NewExplicitRequirement {
    pub fn from_domain(requirement: &ExplicitRequirement) -> Result<Self, PersistenceError> {
        let count_needed: i32 = requirement.count_needed().to_i32().ok_or_else(|| {
            PersistenceError::InvalidRow(format!("count_needed {}", requirement.count_needed()))
        })?;
        Ok(Self {
            department_id: requirement.scope().department_id(),
            program_id: requirement.scope().program_id(),
            date: format_date(requirement.date()),
            role: requirement.role().value().to_owned(),
            count_needed,
        })
    }
}

#[derive(Debug, Queryable)]
pub struct AvailabilityRow {
    pub availability_id: i64,
    pub user_id: String,
    pub department_id: i64,
    pub program_id: Option<i64>,
    pub date: String,
    pub role: Option<String>,
}

impl AvailabilityRow {
    pub fn into_domain(self) -> Result<AvailabilityRecord, PersistenceError> {
        let user_id: UserId = UserId::new(&self.user_id).map_err(invalid("user_id"))?;
        let date: Date = parse_date(&self.date).map_err(invalid("date"))?;
        let role: Option<RoleLabel> = self
            .role
            .as_deref()
            .map(RoleLabel::new)
            .transpose()
            .map_err(invalid("role"))?;
        Ok(AvailabilityRecord::with_id(
            self.availability_id,
            user_id,
            ScopeKey::new(self.department_id, self.program_id),
            date,
            role,
        ))
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = availability)]
pub struct NewAvailability {
    pub user_id: String,
    pub department_id: i64,
    pub program_id: Option<i64>,
    pub date: String,
    pub role: Option<String>,
}

impl NewAvailability {
    pub fn from_domain(record: &AvailabilityRecord) -> Self {
        Self {
            user_id: record.user_id().value().to_owned(),
            department_id: record.scope().department_id(),
            program_id: record.scope().program_id(),
            date: format_date(record.date()),
            role: record.role().map(|role| role.value().to_owned()),
        }
    }
}

#[derive(Debug, Queryable)]
pub struct UnavailabilityRow {
    pub unavailability_id: i64,
    pub user_id: String,
    pub date: String,
}

impl UnavailabilityRow {
    pub fn into_domain(self) -> Result<UnavailabilityRecord, PersistenceError> {
        let user_id: UserId = UserId::new(&self.user_id).map_err(invalid("user_id"))?;
        let date: Date = parse_date(&self.date).map_err(invalid("date"))?;
        Ok(UnavailabilityRecord::with_id(
            self.unavailability_id,
            user_id,
            date,
        ))
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = unavailability)]
pub struct NewUnavailability {
    pub user_id: String,
    pub date: String,
}

#[derive(Debug, Queryable)]
pub struct AssignmentRow {
    pub assignment_id: i64,
    pub user_id: String,
    pub department_id: i64,
    pub program_id: Option<i64>,
    pub date: String,
    pub role: String,
    pub status: String,
}

impl AssignmentRow {
    pub fn into_domain(self) -> Result<Assignment, PersistenceError> {
        let user_id: UserId = UserId::new(&self.user_id).map_err(invalid("user_id"))?;
        let date: Date = parse_date(&self.date).map_err(invalid("date"))?;
        let role: RoleLabel = RoleLabel::new(&self.role).map_err(invalid("role"))?;
        let status: AssignmentStatus =
            AssignmentStatus::from_str(&self.status).map_err(invalid("status"))?;
        Ok(Assignment::with_id(
            self.assignment_id,
            user_id,
            ScopeKey::new(self.department_id, self.program_id),
            date,
            role,
            status,
        ))
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = assignments)]
pub struct NewAssignment {
    pub user_id: String,
    pub department_id: i64,
    pub program_id: Option<i64>,
    pub date: String,
    pub role: String,
    pub status: String,
}

impl NewAssignment {
    pub fn from_domain(assignment: &Assignment) -> Self {
        Self {
            user_id: assignment.user_id().value().to_owned(),
            department_id: assignment.scope().department_id(),
            program_id: assignment.scope().program_id(),
            date: format_date(assignment.date()),
            role: assignment.role().value().to_owned(),
            status: assignment.status().as_str().to_owned(),
        }
    }
}
