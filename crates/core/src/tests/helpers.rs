// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staff_cover_domain::{
    Assignment, AssignmentStatus, AvailabilityRecord, DateRange, ExplicitRequirement,
    RecurringTemplate, RoleLabel, ScopeKey, UserId, parse_date,
};
use time::{Date, Weekday};

pub fn scope() -> ScopeKey {
    ScopeKey::department(1)
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

pub fn explicit(day: &str, label: &str, count: u32) -> ExplicitRequirement {
    ExplicitRequirement::new(scope(), date(day), role(label), count)
}

pub fn template(weekday: Weekday, label: &str, count: u32) -> RecurringTemplate {
    RecurringTemplate::new(scope(), weekday, role(label), count)
}

pub fn pending(token: &str, day: &str, label: &str) -> Assignment {
    Assignment::new(user(token), scope(), date(day), role(label))
}

pub fn confirmed(token: &str, day: &str, label: &str) -> Assignment {
    Assignment::with_id(
        0,
        user(token),
        scope(),
        date(day),
        role(label),
        AssignmentStatus::Confirmed,
    )
}

pub fn available(token: &str, day: &str, label: Option<&str>) -> AvailabilityRecord {
    AvailabilityRecord::new(user(token), scope(), date(day), label.map(role))
}
