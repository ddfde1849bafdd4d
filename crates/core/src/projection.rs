// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staff_cover_domain::{MonthKey, week_index};
use time::Date;

/// Projects a set of dates onto another month by weekday and week-of-month.
///
/// Each input date maps to the target month's date with the same weekday and
/// the same zero-based week index (`(day - 1) / 7`): the 2nd Monday of March
/// lands on the 2nd Monday of April, wherever in the month that falls. Dates
/// whose slot does not exist in the target month (a week-4 weekday that the
/// shorter month lacks) are dropped. The result is sorted and deduplicated.
#[must_use]
pub fn project_month(prior_dates: &[Date], target: MonthKey) -> Vec<Date> {
    let target_dates: Vec<Date> = target.dates();
    let mut projected: Vec<Date> = prior_dates
        .iter()
        .filter_map(|&prior| {
            target_dates
                .iter()
                .copied()
                .find(|&candidate| {
                    candidate.weekday() == prior.weekday()
                        && week_index(candidate) == week_index(prior)
                })
        })
        .collect();
    projected.sort_unstable();
    projected.dedup();
    projected
}
