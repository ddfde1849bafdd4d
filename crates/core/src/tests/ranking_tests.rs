// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{available, confirmed, date, pending};
use crate::{RankedCandidate, rank_candidates};
use staff_cover_domain::{Assignment, AvailabilityRecord};

#[test]
fn test_ranking_is_descending_by_assignment_count() {
    let history: Vec<Assignment> = vec![
        confirmed("usr-a", "2025-01-06", "Output"),
        confirmed("usr-b", "2025-01-06", "Output"),
        confirmed("usr-b", "2025-01-13", "Output"),
        pending("usr-b", "2025-02-03", "Output"),
    ];
    let ranked: Vec<RankedCandidate> = rank_candidates(&history, &[], None);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].user_id.value(), "usr-b");
    assert_eq!(ranked[0].assignment_count, 3);
    assert_eq!(ranked[1].user_id.value(), "usr-a");
    assert_eq!(ranked[1].assignment_count, 1);
}

#[test]
fn test_ties_break_ascending_by_user_id() {
    let history: Vec<Assignment> = vec![
        confirmed("usr-b", "2025-01-06", "Output"),
        confirmed("usr-a", "2025-01-13", "Output"),
    ];
    let ranked: Vec<RankedCandidate> = rank_candidates(&history, &[], None);

    assert_eq!(ranked[0].user_id.value(), "usr-a");
    assert_eq!(ranked[1].user_id.value(), "usr-b");
}

#[test]
fn test_fallback_to_available_users_with_zero_counts() {
    let availability: Vec<AvailabilityRecord> = vec![
        available("usr-b", "2025-03-10", Some("Output")),
        available("usr-a", "2025-03-12", None),
        available("usr-b", "2025-03-12", Some("Output")),
    ];
    let ranked: Vec<RankedCandidate> = rank_candidates(&[], &availability, None);

    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|c| c.assignment_count == 0));
    assert_eq!(ranked[0].user_id.value(), "usr-a");
    assert_eq!(ranked[1].user_id.value(), "usr-b");
}

#[test]
fn test_date_filter_narrows_fallback() {
    let availability: Vec<AvailabilityRecord> = vec![
        available("usr-a", "2025-03-10", Some("Output")),
        available("usr-b", "2025-03-12", Some("Output")),
    ];
    let ranked: Vec<RankedCandidate> =
        rank_candidates(&[], &availability, Some(date("2025-03-10")));

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].user_id.value(), "usr-a");
    assert_eq!(ranked[0].assignment_count, 0);
}

#[test]
fn test_date_filter_also_applies_to_ranked_history() {
    let history: Vec<Assignment> = vec![
        confirmed("usr-a", "2025-01-06", "Output"),
        confirmed("usr-b", "2025-01-06", "Output"),
    ];
    let availability: Vec<AvailabilityRecord> =
        vec![available("usr-b", "2025-03-10", Some("Output"))];
    let ranked: Vec<RankedCandidate> =
        rank_candidates(&history, &availability, Some(date("2025-03-10")));

    // usr-a has history but no availability on the requested date.
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].user_id.value(), "usr-b");
    assert_eq!(ranked[0].assignment_count, 1);
}

#[test]
fn test_no_history_and_no_availability_yields_empty() {
    assert!(rank_candidates(&[], &[], None).is_empty());
}
