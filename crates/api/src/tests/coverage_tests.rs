// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{manager, seed_explicit, seed_roster, seed_template, setup};
use crate::{
    ApproveAssignmentsRequest, ComputeCoverageRequest, CoverageOverviewRequest,
    approve_assignments, compute_coverage, coverage_overview,
};
use staff_cover_events::RecordingSink;

fn coverage_march(
    persistence: &mut staff_cover_persistence::Persistence,
    scope: crate::ScopeRef,
) -> crate::CoverageResponse {
    compute_coverage(
        persistence,
        &manager(),
        ComputeCoverageRequest {
            scope,
            start_date: String::from("2025-03-01"),
            end_date: String::from("2025-03-31"),
        },
    )
    .unwrap()
}

#[test]
fn test_pending_and_confirmed_fill_slots() {
    let (mut persistence, scope, _) = setup();
    seed_explicit(&mut persistence, scope, "2025-03-10", "Output", 3);

    // One confirmed booking and one pending draft for the same slot.
    seed_roster(
        &mut persistence,
        scope,
        "2025-03",
        &[("usr-a", "2025-03-10", "Output")],
    );
    approve_assignments(
        &mut persistence,
        &manager(),
        &RecordingSink::new(),
        ApproveAssignmentsRequest {
            scope,
            month: String::from("2025-03"),
        },
    )
    .unwrap();
    seed_roster(
        &mut persistence,
        scope,
        "2025-03",
        &[("usr-b", "2025-03-10", "Output")],
    );

    let response = coverage_march(&mut persistence, scope);
    assert_eq!(response.rows.len(), 1);
    assert_eq!(response.rows[0].needed, 3);
    assert_eq!(response.rows[0].filled, 2);
    assert_eq!(response.rows[0].short, 1);
    assert!(response.rows[0].is_short);
    assert_eq!(response.slots_filled, 2);
    assert_eq!(response.slots_short, 1);
}

#[test]
fn test_overfilled_slots_inflate_slots_filled() {
    let (mut persistence, scope, _) = setup();
    seed_explicit(&mut persistence, scope, "2025-03-10", "Output", 1);
    seed_roster(
        &mut persistence,
        scope,
        "2025-03",
        &[
            ("usr-a", "2025-03-10", "Output"),
            ("usr-b", "2025-03-10", "Output"),
            ("usr-c", "2025-03-10", "Output"),
        ],
    );

    let response = coverage_march(&mut persistence, scope);
    // Raw counts, not clipped to needed.
    assert_eq!(response.slots_filled, 3);
    assert_eq!(response.slots_short, 0);
    assert!(!response.rows[0].is_short);
}

#[test]
fn test_coverage_joins_templates_with_assignments() {
    let (mut persistence, scope, _) = setup();
    // Monday template needing 1; only one Monday staffed.
    seed_template(&mut persistence, scope, 1, "Output", 1);
    seed_roster(
        &mut persistence,
        scope,
        "2025-03",
        &[("usr-a", "2025-03-10", "Output")],
    );

    let response = coverage_march(&mut persistence, scope);
    assert_eq!(response.rows.len(), 5);
    assert_eq!(response.slots_filled, 1);
    assert_eq!(response.slots_short, 4);
}

#[test]
fn test_overview_reports_only_short_combinations() {
    let (mut persistence, scope, program_scope) = setup();
    // Department-wide: needs 2 on the 2nd Monday of March, fully staffed.
    seed_explicit(&mut persistence, scope, "2025-03-10", "Output", 2);
    seed_roster(
        &mut persistence,
        scope,
        "2025-03",
        &[
            ("usr-a", "2025-03-10", "Output"),
            ("usr-b", "2025-03-10", "Output"),
        ],
    );
    // Program scope: needs 1 in April, unstaffed.
    seed_explicit(&mut persistence, program_scope, "2025-04-07", "Intake", 1);

    let response = coverage_overview(
        &mut persistence,
        &manager(),
        CoverageOverviewRequest {
            from_month: String::from("2025-03"),
            months_ahead: Some(3),
        },
    )
    .unwrap();

    // The fully covered department-wide March combination is omitted.
    assert_eq!(response.rows.len(), 1);
    let row = &response.rows[0];
    assert_eq!(row.month, "2025-04");
    assert_eq!(row.department_name, "Field Ops");
    assert_eq!(row.program_name.as_deref(), Some("Night Shift"));
    assert_eq!(row.role, "Intake");
    assert_eq!(row.slots_short, 1);
}

#[test]
fn test_overview_spans_the_requested_window() {
    let (mut persistence, scope, _) = setup();
    seed_explicit(&mut persistence, scope, "2025-03-10", "Output", 1);
    seed_explicit(&mut persistence, scope, "2025-05-12", "Output", 2);
    // June is outside a 3-month window starting in March.
    seed_explicit(&mut persistence, scope, "2025-06-09", "Output", 4);

    let response = coverage_overview(
        &mut persistence,
        &manager(),
        CoverageOverviewRequest {
            from_month: String::from("2025-03"),
            months_ahead: None,
        },
    )
    .unwrap();

    let months: Vec<&str> = response.rows.iter().map(|row| row.month.as_str()).collect();
    assert_eq!(months, vec!["2025-03", "2025-05"]);
    assert_eq!(response.rows[1].slots_short, 2);
}

#[test]
fn test_overview_clamps_months_ahead() {
    let (mut persistence, scope, _) = setup();
    // Nine months out; even a huge request is clamped to six.
    seed_explicit(&mut persistence, scope, "2025-12-08", "Output", 1);
    seed_explicit(&mut persistence, scope, "2025-03-10", "Output", 1);

    let response = coverage_overview(
        &mut persistence,
        &manager(),
        CoverageOverviewRequest {
            from_month: String::from("2025-03"),
            months_ahead: Some(12),
        },
    )
    .unwrap();

    assert_eq!(response.rows.len(), 1);
    assert_eq!(response.rows[0].month, "2025-03");
}

#[test]
fn test_overview_aggregates_shortfall_per_role_within_a_month() {
    let (mut persistence, scope, _) = setup();
    seed_explicit(&mut persistence, scope, "2025-03-10", "Output", 2);
    seed_explicit(&mut persistence, scope, "2025-03-17", "Output", 1);
    seed_explicit(&mut persistence, scope, "2025-03-10", "Intake", 1);

    let response = coverage_overview(
        &mut persistence,
        &manager(),
        CoverageOverviewRequest {
            from_month: String::from("2025-03"),
            months_ahead: Some(1),
        },
    )
    .unwrap();

    // One row per (month, scope, role); Output's two dates sum to 3.
    assert_eq!(response.rows.len(), 2);
    assert_eq!(response.rows[0].role, "Intake");
    assert_eq!(response.rows[0].slots_short, 1);
    assert_eq!(response.rows[1].role, "Output");
    assert_eq!(response.rows[1].slots_short, 3);
}
