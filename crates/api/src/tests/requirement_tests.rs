// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{manager, seed_explicit, seed_template, setup};
use crate::{
    ApiError, DeleteExplicitRequest, DeleteTemplateRequest, ListTemplatesRequest,
    MaterializeRecurringRequest, ResolveRequirementsRequest, delete_explicit_requirement,
    delete_recurring_template, list_recurring_templates, materialize_recurring,
    resolve_requirements,
};

fn resolve_march(
    persistence: &mut staff_cover_persistence::Persistence,
    scope: crate::ScopeRef,
) -> crate::ResolveRequirementsResponse {
    resolve_requirements(
        persistence,
        &manager(),
        ResolveRequirementsRequest {
            scope,
            start_date: String::from("2025-03-01"),
            end_date: String::from("2025-03-31"),
        },
    )
    .unwrap()
}

#[test]
fn test_explicit_rows_override_templates_end_to_end() {
    let (mut persistence, scope, _) = setup();
    // Monday template (weekday 1) needing 2; the 2nd Monday pinned to 5.
    seed_template(&mut persistence, scope, 1, "Output", 2);
    seed_explicit(&mut persistence, scope, "2025-03-10", "Output", 5);

    let response = resolve_march(&mut persistence, scope);
    // Five Mondays in March 2025.
    assert_eq!(response.rows.len(), 5);

    let pinned = response
        .rows
        .iter()
        .find(|row| row.date == "2025-03-10")
        .unwrap();
    assert_eq!(pinned.count_needed, 5);
    assert_eq!(pinned.source, "explicit");
    assert!(
        response
            .rows
            .iter()
            .filter(|row| row.date != "2025-03-10")
            .all(|row| row.count_needed == 2 && row.source == "recurring")
    );
}

#[test]
fn test_materialization_is_idempotent_end_to_end() {
    let (mut persistence, scope, _) = setup();
    seed_template(&mut persistence, scope, 1, "Output", 2);

    let first = materialize_recurring(
        &mut persistence,
        &manager(),
        MaterializeRecurringRequest {
            scope,
            month: String::from("2025-03"),
        },
    )
    .unwrap();
    assert_eq!(first.inserted, 5);

    let second = materialize_recurring(
        &mut persistence,
        &manager(),
        MaterializeRecurringRequest {
            scope,
            month: String::from("2025-03"),
        },
    )
    .unwrap();
    assert_eq!(second.inserted, 0);

    // The effective set is unchanged: five explicit rows now.
    let response = resolve_march(&mut persistence, scope);
    assert_eq!(response.rows.len(), 5);
    assert!(response.rows.iter().all(|row| row.source == "explicit"));
}

#[test]
fn test_materialization_never_overwrites_existing_counts() {
    let (mut persistence, scope, _) = setup();
    seed_template(&mut persistence, scope, 1, "Output", 2);
    seed_explicit(&mut persistence, scope, "2025-03-10", "Output", 7);

    materialize_recurring(
        &mut persistence,
        &manager(),
        MaterializeRecurringRequest {
            scope,
            month: String::from("2025-03"),
        },
    )
    .unwrap();

    let response = resolve_march(&mut persistence, scope);
    let pinned = response
        .rows
        .iter()
        .find(|row| row.date == "2025-03-10")
        .unwrap();
    assert_eq!(pinned.count_needed, 7);
}

#[test]
fn test_deleting_explicit_row_restores_template_fallback() {
    let (mut persistence, scope, _) = setup();
    seed_template(&mut persistence, scope, 1, "Output", 2);
    seed_explicit(&mut persistence, scope, "2025-03-10", "Output", 0);

    // The zero-count explicit row suppresses the Monday template.
    let suppressed = resolve_march(&mut persistence, scope);
    assert_eq!(suppressed.rows.len(), 4);

    delete_explicit_requirement(
        &mut persistence,
        &manager(),
        DeleteExplicitRequest {
            scope,
            date: String::from("2025-03-10"),
            role: String::from("Output"),
        },
    )
    .unwrap();

    let restored = resolve_march(&mut persistence, scope);
    assert_eq!(restored.rows.len(), 5);
    let row = restored
        .rows
        .iter()
        .find(|row| row.date == "2025-03-10")
        .unwrap();
    assert_eq!(row.source, "recurring");
    assert_eq!(row.count_needed, 2);
}

#[test]
fn test_scope_disjointness_end_to_end() {
    let (mut persistence, scope, program_scope) = setup();
    seed_explicit(&mut persistence, scope, "2025-03-10", "Output", 3);

    // The department-wide requirement must not leak into the program scope.
    let per_program = resolve_march(&mut persistence, program_scope);
    assert!(per_program.rows.is_empty());

    seed_explicit(&mut persistence, program_scope, "2025-03-10", "Output", 1);
    let department_wide = resolve_march(&mut persistence, scope);
    assert_eq!(department_wide.rows.len(), 1);
    assert_eq!(department_wide.rows[0].count_needed, 3);
}

#[test]
fn test_template_listing_and_deletion() {
    let (mut persistence, scope, _) = setup();
    let template_id: i64 = seed_template(&mut persistence, scope, 1, "Output", 2);
    seed_template(&mut persistence, scope, 5, "Intake", 1);

    let listed = list_recurring_templates(
        &mut persistence,
        &manager(),
        ListTemplatesRequest { scope },
    )
    .unwrap();
    assert_eq!(listed.templates.len(), 2);
    assert_eq!(listed.templates[0].weekday, 1);
    assert_eq!(listed.templates[0].role, "Output");

    delete_recurring_template(
        &mut persistence,
        &manager(),
        DeleteTemplateRequest { template_id },
    )
    .unwrap();
    let listed = list_recurring_templates(
        &mut persistence,
        &manager(),
        ListTemplatesRequest { scope },
    )
    .unwrap();
    assert_eq!(listed.templates.len(), 1);
    assert_eq!(listed.templates[0].role, "Intake");
}

#[test]
fn test_unknown_scope_is_not_found() {
    let (mut persistence, scope, _) = setup();
    let result = resolve_requirements(
        &mut persistence,
        &manager(),
        ResolveRequirementsRequest {
            scope: crate::ScopeRef {
                department_id: scope.department_id,
                program_id: Some(999),
            },
            start_date: String::from("2025-03-01"),
            end_date: String::from("2025-03-31"),
        },
    );
    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[test]
fn test_malformed_dates_fail_before_store_access() {
    let (mut persistence, scope, _) = setup();
    let result = resolve_requirements(
        &mut persistence,
        &manager(),
        ResolveRequirementsRequest {
            scope,
            start_date: String::from("2025-3-1"),
            end_date: String::from("2025-03-31"),
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "date"
    ));
}
