// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{month, pending, role, setup, user};
use staff_cover_domain::{Assignment, AssignmentStatus, format_date};

#[test]
fn test_replace_pending_swaps_the_draft_roster() {
    let (mut persistence, scope, _) = setup();
    persistence
        .replace_pending_assignments(
            &scope,
            &month("2025-03"),
            &[
                pending("usr-1", scope, "2025-03-10", "Output"),
                pending("usr-2", scope, "2025-03-10", "Output"),
            ],
        )
        .unwrap();

    // Re-draft: a completely different roster for the same month.
    let inserted: usize = persistence
        .replace_pending_assignments(
            &scope,
            &month("2025-03"),
            &[pending("usr-3", scope, "2025-03-17", "Output")],
        )
        .unwrap();
    assert_eq!(inserted, 1);

    let rows: Vec<Assignment> = persistence
        .assignments_in_range(&scope, &month("2025-03"), None)
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id().value(), "usr-3");
    assert_eq!(rows[0].status(), AssignmentStatus::Pending);
}

#[test]
fn test_replace_pending_never_touches_confirmed_rows() {
    let (mut persistence, scope, _) = setup();
    persistence
        .replace_pending_assignments(
            &scope,
            &month("2025-03"),
            &[pending("usr-1", scope, "2025-03-10", "Output")],
        )
        .unwrap();
    persistence
        .confirm_pending_assignments(&scope, &month("2025-03"))
        .unwrap();

    // The next draft replaces nothing confirmed.
    persistence
        .replace_pending_assignments(
            &scope,
            &month("2025-03"),
            &[pending("usr-2", scope, "2025-03-17", "Output")],
        )
        .unwrap();

    let rows: Vec<Assignment> = persistence
        .assignments_in_range(&scope, &month("2025-03"), None)
        .unwrap();
    assert_eq!(rows.len(), 2);
    let confirmed: Vec<&Assignment> = rows
        .iter()
        .filter(|row| row.status() == AssignmentStatus::Confirmed)
        .collect();
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].user_id().value(), "usr-1");
}

#[test]
fn test_confirm_returns_the_pre_mutation_snapshot() {
    let (mut persistence, scope, _) = setup();
    persistence
        .replace_pending_assignments(
            &scope,
            &month("2025-03"),
            &[
                pending("usr-1", scope, "2025-03-10", "Output"),
                pending("usr-1", scope, "2025-03-17", "Output"),
                pending("usr-2", scope, "2025-03-10", "Intake"),
            ],
        )
        .unwrap();

    let confirmed: Vec<Assignment> = persistence
        .confirm_pending_assignments(&scope, &month("2025-03"))
        .unwrap();
    assert_eq!(confirmed.len(), 3);
    assert!(
        confirmed
            .iter()
            .all(|row| row.status() == AssignmentStatus::Confirmed)
    );

    // Nothing pending remains; a second confirm sees an empty range.
    let second: Vec<Assignment> = persistence
        .confirm_pending_assignments(&scope, &month("2025-03"))
        .unwrap();
    assert!(second.is_empty());
}

#[test]
fn test_confirm_is_bounded_by_the_range() {
    let (mut persistence, scope, _) = setup();
    persistence
        .replace_pending_assignments(
            &scope,
            &month("2025-03"),
            &[pending("usr-1", scope, "2025-03-10", "Output")],
        )
        .unwrap();
    persistence
        .replace_pending_assignments(
            &scope,
            &month("2025-04"),
            &[pending("usr-1", scope, "2025-04-07", "Output")],
        )
        .unwrap();

    persistence
        .confirm_pending_assignments(&scope, &month("2025-03"))
        .unwrap();

    let april: Vec<Assignment> = persistence
        .assignments_in_range(&scope, &month("2025-04"), None)
        .unwrap();
    assert_eq!(april[0].status(), AssignmentStatus::Pending);
}

#[test]
fn test_assignments_are_scope_disjoint() {
    let (mut persistence, scope, program_scope) = setup();
    persistence
        .replace_pending_assignments(
            &scope,
            &month("2025-03"),
            &[pending("usr-1", scope, "2025-03-10", "Output")],
        )
        .unwrap();

    let per_program: Vec<Assignment> = persistence
        .assignments_in_range(&program_scope, &month("2025-03"), None)
        .unwrap();
    assert!(per_program.is_empty());

    // Saving under the program scope must not clear the department draft.
    persistence
        .replace_pending_assignments(
            &program_scope,
            &month("2025-03"),
            &[pending("usr-2", program_scope, "2025-03-10", "Output")],
        )
        .unwrap();
    let department_wide: Vec<Assignment> = persistence
        .assignments_in_range(&scope, &month("2025-03"), None)
        .unwrap();
    assert_eq!(department_wide.len(), 1);
    assert_eq!(department_wide[0].user_id().value(), "usr-1");
}

#[test]
fn test_history_is_unbounded_and_role_exact() {
    let (mut persistence, scope, _) = setup();
    persistence
        .replace_pending_assignments(
            &scope,
            &month("2025-01"),
            &[
                pending("usr-1", scope, "2025-01-06", "Output"),
                pending("usr-2", scope, "2025-01-06", "Intake"),
            ],
        )
        .unwrap();
    persistence
        .confirm_pending_assignments(&scope, &month("2025-01"))
        .unwrap();
    persistence
        .replace_pending_assignments(
            &scope,
            &month("2025-03"),
            &[pending("usr-1", scope, "2025-03-10", "Output")],
        )
        .unwrap();

    // Both the old confirmed row and the fresh pending row count.
    let history: Vec<Assignment> = persistence
        .assignment_history(&scope, &role("Output"))
        .unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|row| row.role().value() == "Output"));
    assert_eq!(format_date(history[0].date()), "2025-01-06");
    assert_eq!(format_date(history[1].date()), "2025-03-10");
    assert_eq!(history[0].user_id(), &user("usr-1"));
}
