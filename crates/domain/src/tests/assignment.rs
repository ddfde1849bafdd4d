// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{test_role, test_scope, test_user};
use crate::{Assignment, AssignmentStatus, DomainError, parse_date};
use std::str::FromStr;

#[test]
fn test_status_string_round_trip() {
    assert_eq!(AssignmentStatus::Pending.as_str(), "Pending");
    assert_eq!(AssignmentStatus::Confirmed.as_str(), "Confirmed");
    assert_eq!(
        AssignmentStatus::from_str("Pending").unwrap(),
        AssignmentStatus::Pending
    );
    assert_eq!(
        AssignmentStatus::from_str("Confirmed").unwrap(),
        AssignmentStatus::Confirmed
    );
    assert!(matches!(
        AssignmentStatus::from_str("Rejected"),
        Err(DomainError::InvalidStatus(_))
    ));
}

#[test]
fn test_only_pending_to_confirmed_is_valid() {
    assert!(AssignmentStatus::Pending.can_transition_to(AssignmentStatus::Confirmed));
    assert!(!AssignmentStatus::Confirmed.can_transition_to(AssignmentStatus::Pending));
    assert!(!AssignmentStatus::Pending.can_transition_to(AssignmentStatus::Pending));
    assert!(!AssignmentStatus::Confirmed.can_transition_to(AssignmentStatus::Confirmed));
}

#[test]
fn test_new_assignments_start_pending() {
    let assignment: Assignment = Assignment::new(
        test_user("usr-1"),
        test_scope(),
        parse_date("2025-03-10").unwrap(),
        test_role(),
    );
    assert_eq!(assignment.status(), AssignmentStatus::Pending);
    assert_eq!(assignment.assignment_id(), None);
}

#[test]
fn test_transition_to_confirmed() {
    let assignment: Assignment = Assignment::new(
        test_user("usr-1"),
        test_scope(),
        parse_date("2025-03-10").unwrap(),
        test_role(),
    );
    let confirmed: Assignment = assignment.transition_to(AssignmentStatus::Confirmed).unwrap();
    assert_eq!(confirmed.status(), AssignmentStatus::Confirmed);
}

#[test]
fn test_confirmed_assignment_cannot_go_back_to_pending() {
    let assignment: Assignment = Assignment::with_id(
        1,
        test_user("usr-1"),
        test_scope(),
        parse_date("2025-03-10").unwrap(),
        test_role(),
        AssignmentStatus::Confirmed,
    );
    assert!(matches!(
        assignment.transition_to(AssignmentStatus::Pending),
        Err(DomainError::InvalidStatusTransition { .. })
    ));
}
