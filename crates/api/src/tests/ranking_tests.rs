// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{manager, seed_availability, seed_roster, setup};
use crate::{RankCandidatesRequest, rank_candidates};

fn rank(
    persistence: &mut staff_cover_persistence::Persistence,
    scope: crate::ScopeRef,
    role: &str,
    on_date: Option<&str>,
) -> crate::RankCandidatesResponse {
    rank_candidates(
        persistence,
        &manager(),
        RankCandidatesRequest {
            scope,
            role: String::from(role),
            on_date: on_date.map(String::from),
        },
    )
    .unwrap()
}

#[test]
fn test_history_ranking_counts_all_statuses() {
    let (mut persistence, scope, _) = setup();
    // usr-b has two pending rows, usr-a one; pending history still counts.
    seed_roster(
        &mut persistence,
        scope,
        "2025-03",
        &[
            ("usr-a", "2025-03-10", "Output"),
            ("usr-b", "2025-03-10", "Output"),
            ("usr-b", "2025-03-17", "Output"),
        ],
    );

    let response = rank(&mut persistence, scope, "Output", None);
    assert_eq!(response.candidates.len(), 2);
    assert_eq!(response.candidates[0].user_id, "usr-b");
    assert_eq!(response.candidates[0].assignment_count, 2);
    assert_eq!(response.candidates[1].user_id, "usr-a");
    assert_eq!(response.candidates[1].assignment_count, 1);
}

#[test]
fn test_history_is_scope_and_role_exact() {
    let (mut persistence, scope, program_scope) = setup();
    seed_roster(
        &mut persistence,
        program_scope,
        "2025-03",
        &[("usr-a", "2025-03-10", "Output")],
    );
    seed_roster(
        &mut persistence,
        scope,
        "2025-03",
        &[("usr-b", "2025-03-10", "Intake")],
    );

    // Department-wide Output: no history in that exact (scope, role) and no
    // availability either.
    let response = rank(&mut persistence, scope, "Output", None);
    assert!(response.candidates.is_empty());
}

#[test]
fn test_fallback_to_availability_with_zero_counts() {
    let (mut persistence, scope, _) = setup();
    seed_availability(&mut persistence, scope, "usr-b", &["2025-03-10"], Some("Output"));
    seed_availability(&mut persistence, scope, "usr-a", &["2025-03-12"], None);
    // A different role: excluded from the Output pool.
    seed_availability(&mut persistence, scope, "usr-c", &["2025-03-14"], Some("Intake"));

    let response = rank(&mut persistence, scope, "Output", None);
    assert_eq!(response.candidates.len(), 2);
    assert!(
        response
            .candidates
            .iter()
            .all(|candidate| candidate.assignment_count == 0)
    );
    assert_eq!(response.candidates[0].user_id, "usr-a");
    assert_eq!(response.candidates[1].user_id, "usr-b");
}

#[test]
fn test_date_filter_narrows_the_fallback() {
    let (mut persistence, scope, _) = setup();
    seed_availability(&mut persistence, scope, "usr-a", &["2025-03-10"], Some("Output"));
    seed_availability(&mut persistence, scope, "usr-b", &["2025-03-12"], Some("Output"));

    let response = rank(&mut persistence, scope, "Output", Some("2025-03-10"));
    assert_eq!(response.candidates.len(), 1);
    assert_eq!(response.candidates[0].user_id, "usr-a");
    assert_eq!(response.candidates[0].assignment_count, 0);
}

#[test]
fn test_date_filter_applies_to_ranked_history_too() {
    let (mut persistence, scope, _) = setup();
    seed_roster(
        &mut persistence,
        scope,
        "2025-02",
        &[
            ("usr-a", "2025-02-03", "Output"),
            ("usr-b", "2025-02-03", "Output"),
        ],
    );
    // Only usr-b is available on the requested date.
    seed_availability(&mut persistence, scope, "usr-b", &["2025-03-10"], None);

    let response = rank(&mut persistence, scope, "Output", Some("2025-03-10"));
    assert_eq!(response.candidates.len(), 1);
    assert_eq!(response.candidates[0].user_id, "usr-b");
    assert_eq!(response.candidates[0].assignment_count, 1);
}
