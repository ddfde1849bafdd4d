// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Preference ranking of candidate users for a scope and role.

use staff_cover_domain::{Assignment, AvailabilityRecord, UserId};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use time::Date;

/// A candidate user with their historical assignment count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    /// The candidate.
    pub user_id: UserId,
    /// Total historical assignments (any status, all time) for the scope
    /// and role under consideration. Zero in the availability fallback.
    pub assignment_count: u32,
}

/// Ranks candidates by historical assignment frequency.
///
/// `history` must hold every assignment row for the exact `(scope, role)`
/// being ranked, unbounded in time and status; `availability` must hold the
/// scope's availability rows whose role matches exactly or is blank. Both are
/// filtered at the query layer.
///
/// With history, users are ordered descending by count, ties ascending by
/// user id. Without any history the distinct available users are returned
/// with a count of zero, ascending by user id. Either way the output is
/// deterministic for the same input.
///
/// A supplied `on_date` narrows the result to users with an availability row
/// on that exact date.
#[must_use]
pub fn rank_candidates(
    history: &[Assignment],
    availability: &[AvailabilityRecord],
    on_date: Option<Date>,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = if history.is_empty() {
        let distinct: BTreeSet<&UserId> = availability
            .iter()
            .map(AvailabilityRecord::user_id)
            .collect();
        distinct
            .into_iter()
            .map(|user_id| RankedCandidate {
                user_id: user_id.clone(),
                assignment_count: 0,
            })
            .collect()
    } else {
        let mut counts: BTreeMap<&UserId, u32> = BTreeMap::new();
        for assignment in history {
            *counts.entry(assignment.user_id()).or_insert(0) += 1;
        }
        let mut ranked: Vec<RankedCandidate> = counts
            .into_iter()
            .map(|(user_id, assignment_count)| RankedCandidate {
                user_id: user_id.clone(),
                assignment_count,
            })
            .collect();
        // BTreeMap iteration is ascending by user id; the stable sort keeps
        // that order within equal counts.
        ranked.sort_by(|a, b| b.assignment_count.cmp(&a.assignment_count));
        ranked
    };

    if let Some(date) = on_date {
        let available_on_date: HashSet<&UserId> = availability
            .iter()
            .filter(|record| record.date() == date)
            .map(AvailabilityRecord::user_id)
            .collect();
        ranked.retain(|candidate| available_on_date.contains(&candidate.user_id));
    }

    ranked
}
