// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Requirement resolution and materialization planning.
//!
//! Demand for a `(date, role)` comes from at most one place: an explicit
//! per-date requirement if one exists, otherwise the recurring template whose
//! weekday matches the date. Explicit rows always win, including rows whose
//! count differs from (or zeroes out) the template they replaced.

use staff_cover_domain::{
    DateRange, EffectiveRequirement, ExplicitRequirement, MonthKey, RecurringTemplate,
    RequirementSource,
};
use std::collections::HashSet;
use time::Date;

/// Produces the effective requirement set for a range.
///
/// Both input slices must already be filtered to the scope under
/// consideration; scope matching is exact and happens at the query layer.
/// The result contains at most one row per `(date, role)`, only rows with
/// nonzero demand, and is ordered ascending by `(date, role)`.
///
/// An explicit row with `count_needed = 0` emits nothing but still covers its
/// `(date, role)`, so the template is suppressed for that date.
#[must_use]
pub fn resolve_requirements(
    range: &DateRange,
    explicit: &[ExplicitRequirement],
    templates: &[RecurringTemplate],
) -> Vec<EffectiveRequirement> {
    let mut covered: HashSet<(Date, String)> = HashSet::new();
    let mut resolved: Vec<EffectiveRequirement> = Vec::new();

    for row in explicit {
        if !range.contains(row.date()) {
            continue;
        }
        covered.insert((row.date(), row.role().value().to_owned()));
        if row.count_needed() > 0 {
            resolved.push(EffectiveRequirement {
                date: row.date(),
                role: row.role().clone(),
                count_needed: row.count_needed(),
                source: RequirementSource::Explicit,
            });
        }
    }

    for date in range.days() {
        for template in templates {
            if template.weekday() != date.weekday() || template.count_needed() == 0 {
                continue;
            }
            let key: (Date, String) = (date, template.role().value().to_owned());
            if covered.contains(&key) {
                continue;
            }
            covered.insert(key);
            resolved.push(EffectiveRequirement {
                date,
                role: template.role().clone(),
                count_needed: template.count_needed(),
                source: RequirementSource::Recurring,
            });
        }
    }

    resolved.sort_by(|a, b| (a.date, &a.role).cmp(&(b.date, &b.role)));
    resolved
}

/// Plans the explicit rows materializing a month's recurring templates.
///
/// For every date in the month and every template matching that date's
/// weekday, one explicit row is planned iff no explicit row already covers
/// the `(date, role)`, checked against rows present before the run plus
/// rows planned earlier in the same run. Existing rows are never overwritten,
/// so running the plan twice yields an empty second plan.
#[must_use]
pub fn plan_materialization(
    month: MonthKey,
    existing: &[ExplicitRequirement],
    templates: &[RecurringTemplate],
) -> Vec<ExplicitRequirement> {
    let mut covered: HashSet<(Date, String)> = existing
        .iter()
        .map(|row| (row.date(), row.role().value().to_owned()))
        .collect();
    let mut planned: Vec<ExplicitRequirement> = Vec::new();

    for date in month.dates() {
        for template in templates {
            if template.weekday() != date.weekday() {
                continue;
            }
            let key: (Date, String) = (date, template.role().value().to_owned());
            if covered.contains(&key) {
                continue;
            }
            covered.insert(key);
            planned.push(ExplicitRequirement::new(
                template.scope(),
                date,
                template.role().clone(),
                template.count_needed(),
            ));
        }
    }

    planned
}
