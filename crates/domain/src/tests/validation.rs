// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{test_program_scope, test_scope};
use crate::{
    AvailabilityRecord, DomainError, Program, RoleLabel, format_date, parse_date, parse_date_list,
    validate_optional_role, validate_scope_parent,
};
use crate::{ScopeKey, UserId};
use time::Date;

#[test]
fn test_parse_date_list_sorts_and_dedupes() {
    let dates: Vec<Date> = parse_date_list(&[
        String::from("2025-03-20"),
        String::from("2025-03-10"),
        String::from("2025-03-10"),
    ])
    .unwrap();
    let formatted: Vec<String> = dates.into_iter().map(format_date).collect();
    assert_eq!(formatted, vec!["2025-03-10", "2025-03-20"]);
}

#[test]
fn test_parse_date_list_rejects_empty_and_malformed() {
    assert!(matches!(
        parse_date_list(&[]),
        Err(DomainError::EmptyDateList)
    ));
    assert!(matches!(
        parse_date_list(&[String::from("2025-03-10"), String::from("bogus")]),
        Err(DomainError::InvalidDate { .. })
    ));
}

#[test]
fn test_validate_optional_role() {
    assert_eq!(validate_optional_role(None).unwrap(), None);
    assert_eq!(
        validate_optional_role(Some("Output")).unwrap(),
        Some(RoleLabel::new("Output").unwrap())
    );
    assert!(matches!(
        validate_optional_role(Some("")),
        Err(DomainError::InvalidRole(_))
    ));
}

#[test]
fn test_scope_parent_must_match() {
    let program: Program = Program::with_id(10, 1, String::from("Night Shift"));
    assert!(validate_scope_parent(&test_program_scope(), &program).is_ok());

    let foreign: Program = Program::with_id(10, 2, String::from("Night Shift"));
    assert!(matches!(
        validate_scope_parent(&test_program_scope(), &foreign),
        Err(DomainError::ScopeParentMismatch {
            department_id: 1,
            program_id: 10,
        })
    ));

    // A department-wide scope has no program to validate.
    assert!(validate_scope_parent(&test_scope(), &foreign).is_ok());
}

#[test]
fn test_blank_role_availability_matches_any_role() {
    let user: UserId = UserId::new("usr-1").unwrap();
    let scope: ScopeKey = test_scope();
    let date: Date = parse_date("2025-03-10").unwrap();

    let any_role: AvailabilityRecord = AvailabilityRecord::new(user.clone(), scope, date, None);
    assert!(any_role.matches_role(&RoleLabel::new("Output").unwrap()));
    assert!(any_role.matches_role(&RoleLabel::new("Intake").unwrap()));

    let specific: AvailabilityRecord = AvailabilityRecord::new(
        user,
        scope,
        date,
        Some(RoleLabel::new("Output").unwrap()),
    );
    assert!(specific.matches_role(&RoleLabel::new("Output").unwrap()));
    assert!(!specific.matches_role(&RoleLabel::new("Intake").unwrap()));
}
