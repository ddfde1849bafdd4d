// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{confirmed, date, explicit, pending, range, role};
use crate::{CoverageReport, compute_coverage, resolve_requirements, shortfall_by_role};
use staff_cover_domain::{Assignment, EffectiveRequirement, RoleLabel};

fn resolve(explicit_rows: &[staff_cover_domain::ExplicitRequirement]) -> Vec<EffectiveRequirement> {
    resolve_requirements(&range("2025-03-01", "2025-03-31"), explicit_rows, &[])
}

#[test]
fn test_pending_and_confirmed_both_count_as_filled() {
    let requirements: Vec<EffectiveRequirement> = resolve(&[explicit("2025-03-10", "Output", 3)]);
    let assignments: Vec<Assignment> = vec![
        pending("usr-a", "2025-03-10", "Output"),
        confirmed("usr-b", "2025-03-10", "Output"),
    ];
    let report: CoverageReport = compute_coverage(&requirements, &assignments);

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].needed, 3);
    assert_eq!(report.rows[0].filled, 2);
    assert_eq!(report.rows[0].short(), 1);
    assert!(report.rows[0].is_short());
    assert_eq!(report.slots_filled, 2);
    assert_eq!(report.slots_short, 1);
}

#[test]
fn test_overfilled_rows_are_not_clipped() {
    let requirements: Vec<EffectiveRequirement> = resolve(&[
        explicit("2025-03-10", "Output", 1),
        explicit("2025-03-11", "Output", 2),
    ]);
    let assignments: Vec<Assignment> = vec![
        confirmed("usr-a", "2025-03-10", "Output"),
        confirmed("usr-b", "2025-03-10", "Output"),
        confirmed("usr-c", "2025-03-10", "Output"),
    ];
    let report: CoverageReport = compute_coverage(&requirements, &assignments);

    // The over-staffed 10th contributes all three assignments to the
    // aggregate even though only one was needed; the 11th is fully short.
    assert_eq!(report.slots_filled, 3);
    assert_eq!(report.slots_short, 2);
}

#[test]
fn test_assignments_without_a_requirement_row_count_nothing() {
    let requirements: Vec<EffectiveRequirement> = resolve(&[explicit("2025-03-10", "Output", 1)]);
    let assignments: Vec<Assignment> = vec![
        confirmed("usr-a", "2025-03-10", "Output"),
        confirmed("usr-b", "2025-03-12", "Output"),
        confirmed("usr-c", "2025-03-10", "Intake"),
    ];
    let report: CoverageReport = compute_coverage(&requirements, &assignments);

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].filled, 1);
    assert_eq!(report.slots_filled, 1);
}

#[test]
fn test_role_matching_is_case_sensitive() {
    let requirements: Vec<EffectiveRequirement> = resolve(&[explicit("2025-03-10", "Output", 1)]);
    let assignments: Vec<Assignment> = vec![confirmed("usr-a", "2025-03-10", "output")];
    let report: CoverageReport = compute_coverage(&requirements, &assignments);

    assert_eq!(report.rows[0].filled, 0);
    assert_eq!(report.slots_short, 1);
}

#[test]
fn test_empty_requirements_produce_empty_report() {
    let report: CoverageReport =
        compute_coverage(&[], &[confirmed("usr-a", "2025-03-10", "Output")]);
    assert!(report.rows.is_empty());
    assert_eq!(report.slots_filled, 0);
    assert_eq!(report.slots_short, 0);
}

#[test]
fn test_shortfall_by_role_sums_and_omits_covered() {
    let requirements: Vec<EffectiveRequirement> = resolve(&[
        explicit("2025-03-10", "Output", 3),
        explicit("2025-03-11", "Output", 2),
        explicit("2025-03-10", "Intake", 1),
    ]);
    let assignments: Vec<Assignment> = vec![
        confirmed("usr-a", "2025-03-10", "Output"),
        confirmed("usr-b", "2025-03-10", "Intake"),
    ];
    let report: CoverageReport = compute_coverage(&requirements, &assignments);
    let shortfall: Vec<(RoleLabel, u32)> = shortfall_by_role(&report);

    // Intake is covered; Output is short 2 on the 10th and 2 on the 11th.
    assert_eq!(shortfall, vec![(role("Output"), 4)]);
}

#[test]
fn test_coverage_rows_follow_requirement_order() {
    let requirements: Vec<EffectiveRequirement> = resolve(&[
        explicit("2025-03-11", "Output", 1),
        explicit("2025-03-10", "Output", 1),
    ]);
    let report: CoverageReport = compute_coverage(&requirements, &[]);
    assert_eq!(report.rows[0].date, date("2025-03-10"));
    assert_eq!(report.rows[1].date, date("2025-03-11"));
}
