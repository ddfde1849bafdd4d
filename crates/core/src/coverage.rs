// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Coverage aggregation: demand joined with assignments.

use staff_cover_domain::{Assignment, EffectiveRequirement, RoleLabel};
use std::collections::HashMap;
use time::Date;

/// Coverage for one `(date, role)` of the effective requirement set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRow {
    /// The date demand applies to.
    pub date: Date,
    /// The staffing role.
    pub role: RoleLabel,
    /// How many people are needed.
    pub needed: u32,
    /// How many assignments (pending or confirmed) exist for the slot.
    pub filled: u32,
}

impl CoverageRow {
    /// Returns the unmet demand for this row.
    #[must_use]
    pub const fn short(&self) -> u32 {
        self.needed.saturating_sub(self.filled)
    }

    /// Returns whether the row is under-filled.
    #[must_use]
    pub const fn is_short(&self) -> bool {
        self.filled < self.needed
    }
}

/// Coverage for a full range and scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// One row per `(date, role)` with nonzero demand, ascending.
    pub rows: Vec<CoverageRow>,
    /// Sum of raw filled counts across all rows.
    ///
    /// Filled counts are not clipped to `needed`: an over-staffed row
    /// contributes its full assignment count. This matches the observed
    /// behavior of the metric as reported upstream.
    pub slots_filled: u32,
    /// Sum of `max(0, needed - filled)` across all rows.
    pub slots_short: u32,
}

/// Joins the effective requirement set with assignment rows.
///
/// Both pending and confirmed assignments count toward `filled`; a pending
/// draft occupies its slot until it is deleted or confirmed. Assignments for
/// a `(date, role)` with no requirement row contribute to nothing.
#[must_use]
pub fn compute_coverage(
    requirements: &[EffectiveRequirement],
    assignments: &[Assignment],
) -> CoverageReport {
    let mut fill: HashMap<(Date, String), u32> = HashMap::new();
    for assignment in assignments {
        let key: (Date, String) = (assignment.date(), assignment.role().value().to_owned());
        *fill.entry(key).or_insert(0) += 1;
    }

    let rows: Vec<CoverageRow> = requirements
        .iter()
        .map(|requirement| {
            let key: (Date, String) =
                (requirement.date, requirement.role.value().to_owned());
            CoverageRow {
                date: requirement.date,
                role: requirement.role.clone(),
                needed: requirement.count_needed,
                filled: fill.get(&key).copied().unwrap_or(0),
            }
        })
        .collect();

    let slots_filled: u32 = rows.iter().map(|row| row.filled).sum();
    let slots_short: u32 = rows.iter().map(CoverageRow::short).sum();

    CoverageReport {
        rows,
        slots_filled,
        slots_short,
    }
}

/// Collapses a report into per-role shortfall totals.
///
/// Fully covered roles are omitted; the result is ordered ascending by role.
#[must_use]
pub fn shortfall_by_role(report: &CoverageReport) -> Vec<(RoleLabel, u32)> {
    let mut totals: HashMap<RoleLabel, u32> = HashMap::new();
    for row in &report.rows {
        let short: u32 = row.short();
        if short > 0 {
            *totals.entry(row.role.clone()).or_insert(0) += short;
        }
    }
    let mut collapsed: Vec<(RoleLabel, u32)> = totals.into_iter().collect();
    collapsed.sort_by(|a, b| a.0.cmp(&b.0));
    collapsed
}
