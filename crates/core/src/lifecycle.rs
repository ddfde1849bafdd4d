// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event construction for the assignment lifecycle.
//!
//! Approve and clear-month capture their affected rows before mutating, then
//! turn the pre-mutation snapshot into notification events here. Grouping is
//! per recipient: one event per user regardless of how many rows were
//! touched.

use staff_cover_domain::{Assignment, MonthKey, UserId};
use staff_cover_events::NotificationEvent;
use std::collections::BTreeMap;
use time::Date;

/// Builds one `AssignmentsConfirmed` event per user in a confirmed batch.
///
/// Dates within an event are sorted ascending and deduplicated; events are
/// ordered ascending by user id.
#[must_use]
pub fn confirmation_events(confirmed: &[Assignment]) -> Vec<NotificationEvent> {
    let mut by_user: BTreeMap<&UserId, Vec<Date>> = BTreeMap::new();
    for assignment in confirmed {
        by_user
            .entry(assignment.user_id())
            .or_default()
            .push(assignment.date());
    }
    by_user
        .into_iter()
        .map(|(user_id, mut dates)| {
            dates.sort_unstable();
            dates.dedup();
            NotificationEvent::AssignmentsConfirmed {
                user_id: user_id.clone(),
                dates,
            }
        })
        .collect()
}

/// Builds one `AvailabilityCleared` event per affected user.
///
/// Users are deduplicated and events ordered ascending by user id.
#[must_use]
pub fn clearance_events(users: &[UserId], month: MonthKey) -> Vec<NotificationEvent> {
    let mut distinct: Vec<&UserId> = users.iter().collect();
    distinct.sort_unstable();
    distinct.dedup();
    distinct
        .into_iter()
        .map(|user_id| NotificationEvent::AvailabilityCleared {
            user_id: user_id.clone(),
            month,
        })
        .collect()
}
