// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod coverage_tests;
mod ranking_tests;
mod requirement_tests;

use crate::{
    AssignmentInput, Caller, CallerRole, CreateDepartmentRequest, CreateProgramRequest,
    SaveAssignmentsRequest, ScopeRef, SubmitAvailabilityRequest, UpsertExplicitRequest,
    UpsertTemplateRequest, create_department, create_program, save_assignments,
    submit_availability, upsert_explicit_requirement, upsert_recurring_template,
};
use staff_cover_domain::UserId;
use staff_cover_persistence::Persistence;

pub fn admin() -> Caller {
    Caller::new(UserId::new("admin-1").unwrap(), CallerRole::Admin)
}

pub fn operations() -> Caller {
    Caller::new(UserId::new("ops-1").unwrap(), CallerRole::Operations)
}

pub fn manager() -> Caller {
    Caller::new(UserId::new("mgr-1").unwrap(), CallerRole::Manager)
}

pub fn member(token: &str) -> Caller {
    Caller::new(UserId::new(token).unwrap(), CallerRole::Member)
}

/// Creates an in-memory store with one department and one program; returns
/// the store plus the department-wide and per-program scope refs.
pub fn setup() -> (Persistence, ScopeRef, ScopeRef) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let department_id: i64 = create_department(
        &mut persistence,
        &admin(),
        CreateDepartmentRequest {
            name: String::from("Field Ops"),
        },
    )
    .unwrap()
    .department_id;
    let program_id: i64 = create_program(
        &mut persistence,
        &admin(),
        CreateProgramRequest {
            department_id,
            name: String::from("Night Shift"),
        },
    )
    .unwrap()
    .program_id;
    (
        persistence,
        ScopeRef {
            department_id,
            program_id: None,
        },
        ScopeRef {
            department_id,
            program_id: Some(program_id),
        },
    )
}

pub fn seed_template(
    persistence: &mut Persistence,
    scope: ScopeRef,
    weekday: u8,
    role: &str,
    count_needed: u32,
) -> i64 {
    upsert_recurring_template(
        persistence,
        &manager(),
        UpsertTemplateRequest {
            scope,
            weekday,
            role: String::from(role),
            count_needed,
        },
    )
    .unwrap()
    .template_id
}

pub fn seed_explicit(
    persistence: &mut Persistence,
    scope: ScopeRef,
    date: &str,
    role: &str,
    count_needed: u32,
) -> i64 {
    upsert_explicit_requirement(
        persistence,
        &manager(),
        UpsertExplicitRequest {
            scope,
            date: String::from(date),
            role: String::from(role),
            count_needed,
        },
    )
    .unwrap()
    .requirement_id
}

pub fn seed_availability(
    persistence: &mut Persistence,
    scope: ScopeRef,
    user: &str,
    dates: &[&str],
    role: Option<&str>,
) -> u32 {
    submit_availability(
        persistence,
        &manager(),
        SubmitAvailabilityRequest {
            user_id: String::from(user),
            scope,
            dates: dates.iter().map(|d| String::from(*d)).collect(),
            role: role.map(String::from),
        },
    )
    .unwrap()
    .saved
}

pub fn seed_roster(
    persistence: &mut Persistence,
    scope: ScopeRef,
    month: &str,
    rows: &[(&str, &str, &str)],
) -> u32 {
    save_assignments(
        persistence,
        &manager(),
        SaveAssignmentsRequest {
            scope,
            month: String::from(month),
            assignments: rows
                .iter()
                .map(|(user, date, role)| AssignmentInput {
                    user_id: String::from(*user),
                    date: String::from(*date),
                    role: String::from(*role),
                })
                .collect(),
        },
    )
    .unwrap()
    .saved
}
