// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod assignment_tests;

use crate::Persistence;
use staff_cover_domain::{
    Assignment, AvailabilityRecord, DateRange, MonthKey, RoleLabel, ScopeKey, UserId, parse_date,
};
use time::Date;

/// Creates an in-memory store with one department (id from the insert) and
/// one program under it. Returns the store plus both scopes.
pub fn setup() -> (Persistence, ScopeKey, ScopeKey) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let department_id: i64 = persistence.create_department("Field Ops").unwrap();
    let program_id: i64 = persistence
        .create_program(department_id, "Night Shift")
        .unwrap();
    (
        persistence,
        ScopeKey::department(department_id),
        ScopeKey::program(department_id, program_id),
    )
}

pub fn role(label: &str) -> RoleLabel {
    RoleLabel::new(label).unwrap()
}

pub fn user(token: &str) -> UserId {
    UserId::new(token).unwrap()
}

pub fn date(value: &str) -> Date {
    parse_date(value).unwrap()
}

pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(date(start), date(end)).unwrap()
}

pub fn month(value: &str) -> DateRange {
    MonthKey::parse(value).unwrap().as_range().unwrap()
}

pub fn available(
    token: &str,
    scope: ScopeKey,
    day: &str,
    label: Option<&str>,
) -> AvailabilityRecord {
    AvailabilityRecord::new(user(token), scope, date(day), label.map(role))
}

pub fn pending(token: &str, scope: ScopeKey, day: &str, label: &str) -> Assignment {
    Assignment::new(user(token), scope, date(day), role(label))
}
