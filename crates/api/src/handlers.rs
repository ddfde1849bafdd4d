// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The coverage engine's operations.
//!
//! Every handler follows the same shape: authorize the caller, validate the
//! request into domain types (before any store access), execute against
//! persistence and the pure core, translate the result into a response DTO.
//! Handlers that owe users a message dispatch notification events after the
//! mutation has committed.

use num_traits::ToPrimitive;
use tracing::warn;

use crate::auth::{AuthorizationService, Caller};
use crate::directory::Directory;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::notify::dispatch_notifications;
use crate::request_response::{
    ApproveAssignmentsRequest, ApproveAssignmentsResponse, AvailabilityRecordDto,
    CandidateDto, ClearMonthRequest, ClearMonthResponse, ComputeCoverageRequest,
    CopyPreviousMonthRequest, CopyPreviousMonthResponse, CoverageOverviewRequest,
    CoverageOverviewResponse, CoverageResponse, CoverageRowDto, CreateDepartmentRequest,
    CreateDepartmentResponse, CreateProgramRequest, CreateProgramResponse,
    DeleteExplicitRequest, DeleteTemplateRequest, DepartmentDto, FetchAvailabilityRequest,
    FetchAvailabilityResponse, FetchUnavailabilityRequest, FetchUnavailabilityResponse,
    ListScopesResponse, ListTemplatesRequest, ListTemplatesResponse,
    MaterializeRecurringRequest, MaterializeRecurringResponse, ProgramDto,
    RankCandidatesRequest, RankCandidatesResponse, RequirementRowDto,
    ResolveRequirementsRequest, ResolveRequirementsResponse, SaveAssignmentsRequest,
    SaveAssignmentsResponse, ScopeRef, ShortfallRowDto, SubmitAvailabilityRequest,
    SubmitAvailabilityResponse, SubmitUnavailabilityRequest, SubmitUnavailabilityResponse,
    TemplateDto, UnavailabilityRecordDto, UpsertExplicitRequest, UpsertExplicitResponse,
    UpsertTemplateRequest, UpsertTemplateResponse,
};
use staff_cover::{
    clearance_events, compute_coverage as core_compute_coverage, confirmation_events,
    plan_materialization, project_month, rank_candidates as core_rank_candidates,
    resolve_requirements as core_resolve_requirements, shortfall_by_role,
};
use staff_cover_domain::{
    Assignment, AvailabilityRecord, DateRange, ExplicitRequirement, MonthKey, RecurringTemplate,
    RoleLabel, ScopeKey, UserId, format_date, parse_date, parse_date_list, validate_optional_role,
    weekday_from_number, weekday_number,
};
use staff_cover_events::{NotificationEvent, NotificationSink};
use staff_cover_persistence::Persistence;
use time::Date;

/// Default forward window for the coverage overview, in whole months.
const DEFAULT_OVERVIEW_MONTHS: u32 = 3;
/// Bounds for the coverage overview window.
const MIN_OVERVIEW_MONTHS: u32 = 1;
const MAX_OVERVIEW_MONTHS: u32 = 6;

fn count_u32(count: usize) -> u32 {
    count.to_u32().unwrap_or(u32::MAX)
}

fn parse_user(value: &str) -> Result<UserId, ApiError> {
    UserId::new(value).map_err(translate_domain_error)
}

fn parse_role(value: &str) -> Result<RoleLabel, ApiError> {
    RoleLabel::new(value).map_err(translate_domain_error)
}

fn parse_range(start: &str, end: &str) -> Result<DateRange, ApiError> {
    let start: Date = parse_date(start).map_err(translate_domain_error)?;
    let end: Date = parse_date(end).map_err(translate_domain_error)?;
    DateRange::new(start, end).map_err(translate_domain_error)
}

fn parse_month(value: &str) -> Result<(MonthKey, DateRange), ApiError> {
    let month: MonthKey = MonthKey::parse(value).map_err(translate_domain_error)?;
    let range: DateRange = month.as_range().map_err(translate_domain_error)?;
    Ok((month, range))
}

/// Validates a scope reference against the scope directory.
///
/// Scope checks run after string validation but before the operation's own
/// store work; a dangling or mismatched reference is `NotFound`.
fn validated_scope(
    persistence: &mut Persistence,
    scope: ScopeRef,
) -> Result<ScopeKey, ApiError> {
    let key: ScopeKey = ScopeKey::new(scope.department_id, scope.program_id);
    persistence
        .validate_scope(&key)
        .map_err(translate_persistence_error)?;
    Ok(key)
}

/// What a month clear should delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClearKind {
    Availability,
    Requirements,
    Both,
}

impl ClearKind {
    fn parse(value: &str) -> Result<Self, ApiError> {
        match value {
            "availability" => Ok(Self::Availability),
            "requirements" => Ok(Self::Requirements),
            "both" => Ok(Self::Both),
            _ => Err(ApiError::InvalidInput {
                field: String::from("kind"),
                message: format!(
                    "Unknown kind '{value}': expected availability, requirements, or both"
                ),
            }),
        }
    }

    const fn clears_availability(self) -> bool {
        matches!(self, Self::Availability | Self::Both)
    }

    const fn clears_requirements(self) -> bool {
        matches!(self, Self::Requirements | Self::Both)
    }
}

/// Resolves the effective requirement set for a range and scope.
///
/// Explicit rows win over recurring templates; see the core resolver for the
/// merge contract.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed,
/// the scope is unknown, or the store fails.
pub fn resolve_requirements(
    persistence: &mut Persistence,
    caller: &Caller,
    request: ResolveRequirementsRequest,
) -> Result<ResolveRequirementsResponse, ApiError> {
    AuthorizationService::authorize_view_coverage(caller)?;
    let range: DateRange = parse_range(&request.start_date, &request.end_date)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let explicit: Vec<ExplicitRequirement> = persistence
        .explicit_requirements_in_range(&scope, &range)
        .map_err(translate_persistence_error)?;
    let templates: Vec<RecurringTemplate> = persistence
        .recurring_templates(&scope)
        .map_err(translate_persistence_error)?;

    let rows: Vec<RequirementRowDto> = core_resolve_requirements(&range, &explicit, &templates)
        .into_iter()
        .map(|row| RequirementRowDto {
            date: format_date(row.date),
            role: row.role.value().to_owned(),
            count_needed: row.count_needed,
            source: row.source.as_str().to_owned(),
        })
        .collect();

    Ok(ResolveRequirementsResponse { rows })
}

/// Materializes a scope's recurring templates onto a month.
///
/// Idempotent: already-covered `(date, role)` slots are skipped, so a second
/// run inserts nothing.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed,
/// the scope is unknown, or the store fails.
pub fn materialize_recurring(
    persistence: &mut Persistence,
    caller: &Caller,
    request: MaterializeRecurringRequest,
) -> Result<MaterializeRecurringResponse, ApiError> {
    AuthorizationService::authorize_manage_requirements(caller)?;
    let (month, range): (MonthKey, DateRange) = parse_month(&request.month)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let existing: Vec<ExplicitRequirement> = persistence
        .explicit_requirements_in_range(&scope, &range)
        .map_err(translate_persistence_error)?;
    let templates: Vec<RecurringTemplate> = persistence
        .recurring_templates(&scope)
        .map_err(translate_persistence_error)?;

    let planned: Vec<ExplicitRequirement> = plan_materialization(month, &existing, &templates);
    let inserted: usize = if planned.is_empty() {
        0
    } else {
        persistence
            .insert_explicit_requirements(&planned)
            .map_err(translate_persistence_error)?
    };

    Ok(MaterializeRecurringResponse {
        inserted: count_u32(inserted),
    })
}

/// Creates or updates the recurring template for a `(scope, weekday, role)`.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed,
/// the scope is unknown, or the store fails.
pub fn upsert_recurring_template(
    persistence: &mut Persistence,
    caller: &Caller,
    request: UpsertTemplateRequest,
) -> Result<UpsertTemplateResponse, ApiError> {
    AuthorizationService::authorize_manage_requirements(caller)?;
    let weekday: time::Weekday =
        weekday_from_number(request.weekday).map_err(translate_domain_error)?;
    let role: RoleLabel = parse_role(&request.role)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let template: RecurringTemplate =
        RecurringTemplate::new(scope, weekday, role, request.count_needed);
    let template_id: i64 = persistence
        .upsert_recurring_template(&template)
        .map_err(translate_persistence_error)?;

    Ok(UpsertTemplateResponse { template_id })
}

/// Deletes a recurring template.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized or the template is
/// unknown.
pub fn delete_recurring_template(
    persistence: &mut Persistence,
    caller: &Caller,
    request: DeleteTemplateRequest,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_manage_requirements(caller)?;
    persistence
        .delete_recurring_template(request.template_id)
        .map_err(translate_persistence_error)
}

/// Lists a scope's recurring templates.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the scope is unknown, or
/// the store fails.
pub fn list_recurring_templates(
    persistence: &mut Persistence,
    caller: &Caller,
    request: ListTemplatesRequest,
) -> Result<ListTemplatesResponse, ApiError> {
    AuthorizationService::authorize_view_coverage(caller)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let templates: Vec<TemplateDto> = persistence
        .recurring_templates(&scope)
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|template| TemplateDto {
            template_id: template.template_id().unwrap_or_default(),
            weekday: weekday_number(template.weekday()),
            role: template.role().value().to_owned(),
            count_needed: template.count_needed(),
        })
        .collect();

    Ok(ListTemplatesResponse { templates })
}

/// Creates or updates the explicit requirement for a `(scope, date, role)`.
///
/// Once present, the row permanently overrides the recurring template for
/// its triple.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed,
/// the scope is unknown, or the store fails.
pub fn upsert_explicit_requirement(
    persistence: &mut Persistence,
    caller: &Caller,
    request: UpsertExplicitRequest,
) -> Result<UpsertExplicitResponse, ApiError> {
    AuthorizationService::authorize_manage_requirements(caller)?;
    let date: Date = parse_date(&request.date).map_err(translate_domain_error)?;
    let role: RoleLabel = parse_role(&request.role)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let requirement: ExplicitRequirement =
        ExplicitRequirement::new(scope, date, role, request.count_needed);
    let requirement_id: i64 = persistence
        .upsert_explicit_requirement(&requirement)
        .map_err(translate_persistence_error)?;

    Ok(UpsertExplicitResponse { requirement_id })
}

/// Deletes the explicit requirement for a `(scope, date, role)`, restoring
/// recurring-template fallback for that triple.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the row is unknown, or
/// the store fails.
pub fn delete_explicit_requirement(
    persistence: &mut Persistence,
    caller: &Caller,
    request: DeleteExplicitRequest,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_manage_requirements(caller)?;
    let date: Date = parse_date(&request.date).map_err(translate_domain_error)?;
    let role: RoleLabel = parse_role(&request.role)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    persistence
        .delete_explicit_requirement(&scope, date, &role)
        .map_err(translate_persistence_error)
}

/// Submits a user's availability for a scope.
///
/// The replace window is the min..max span of the submitted dates: previously
/// submitted dates inside the span that are not in the new set are dropped,
/// dates outside the span survive. This exact semantics is contractual.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed,
/// the scope is unknown, or the store fails.
pub fn submit_availability(
    persistence: &mut Persistence,
    caller: &Caller,
    request: SubmitAvailabilityRequest,
) -> Result<SubmitAvailabilityResponse, ApiError> {
    let user: UserId = parse_user(&request.user_id)?;
    AuthorizationService::authorize_write_for_user(caller, &user)?;
    let dates: Vec<Date> = parse_date_list(&request.dates).map_err(translate_domain_error)?;
    let role: Option<RoleLabel> =
        validate_optional_role(request.role.as_deref()).map_err(translate_domain_error)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let span: DateRange = DateRange::enclosing(&dates).map_err(translate_domain_error)?;
    let records: Vec<AvailabilityRecord> = dates
        .into_iter()
        .map(|date| AvailabilityRecord::new(user.clone(), scope, date, role.clone()))
        .collect();

    let saved: usize = persistence
        .replace_availability_range(&user, &scope, &span, &records)
        .map_err(translate_persistence_error)?;

    Ok(SubmitAvailabilityResponse {
        saved: count_u32(saved),
    })
}

/// Fetches availability for a scope and range.
///
/// Members see only their own rows; display names resolve through the
/// directory, falling back to the raw token if a lookup fails.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed,
/// the scope is unknown, or the store fails.
pub fn fetch_availability(
    persistence: &mut Persistence,
    caller: &Caller,
    directory: &dyn Directory,
    request: FetchAvailabilityRequest,
) -> Result<FetchAvailabilityResponse, ApiError> {
    let requested: Option<UserId> = request
        .user_id
        .as_deref()
        .map(parse_user)
        .transpose()?;
    let filter: Option<UserId> = AuthorizationService::authorize_fetch_filter(caller, requested)?;
    let range: DateRange = parse_range(&request.start_date, &request.end_date)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let records: Vec<AvailabilityRecord> = persistence
        .availability_in_range(&scope, &range, filter.as_ref())
        .map_err(translate_persistence_error)?;

    let records: Vec<AvailabilityRecordDto> = records
        .into_iter()
        .map(|record| {
            let display_name: String = directory.display_name(record.user_id()).unwrap_or_else(
                |e| {
                    warn!(user = %record.user_id(), error = %e, "directory lookup failed");
                    record.user_id().value().to_owned()
                },
            );
            AvailabilityRecordDto {
                user_id: record.user_id().value().to_owned(),
                display_name,
                date: format_date(record.date()),
                role: record.role().map(|role| role.value().to_owned()),
            }
        })
        .collect();

    Ok(FetchAvailabilityResponse { records })
}

/// Submits a user's blackout dates.
///
/// Same span-scoped replace discipline as availability submission.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed,
/// or the store fails.
pub fn submit_unavailability(
    persistence: &mut Persistence,
    caller: &Caller,
    request: SubmitUnavailabilityRequest,
) -> Result<SubmitUnavailabilityResponse, ApiError> {
    let user: UserId = parse_user(&request.user_id)?;
    AuthorizationService::authorize_write_for_user(caller, &user)?;
    let dates: Vec<Date> = parse_date_list(&request.dates).map_err(translate_domain_error)?;
    let span: DateRange = DateRange::enclosing(&dates).map_err(translate_domain_error)?;

    let saved: usize = persistence
        .replace_unavailability_range(&user, &span, &dates)
        .map_err(translate_persistence_error)?;

    Ok(SubmitUnavailabilityResponse {
        saved: count_u32(saved),
    })
}

/// Fetches blackout dates for a range.
///
/// Blackouts are informational: they are surfaced to schedulers but never
/// enforced against assignment creation.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed,
/// or the store fails.
pub fn fetch_unavailability(
    persistence: &mut Persistence,
    caller: &Caller,
    request: FetchUnavailabilityRequest,
) -> Result<FetchUnavailabilityResponse, ApiError> {
    let requested: Option<UserId> = request
        .user_id
        .as_deref()
        .map(parse_user)
        .transpose()?;
    let filter: Option<UserId> = AuthorizationService::authorize_fetch_filter(caller, requested)?;
    let range: DateRange = parse_range(&request.start_date, &request.end_date)?;

    let records: Vec<UnavailabilityRecordDto> = persistence
        .unavailability_in_range(&range, filter.as_ref())
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|record| UnavailabilityRecordDto {
            user_id: record.user_id().value().to_owned(),
            date: format_date(record.date()),
        })
        .collect();

    Ok(FetchUnavailabilityResponse { records })
}

/// Copies a user's previous-month availability onto a target month.
///
/// Each prior date is projected by `(weekday, week-of-month)`; slots the
/// target month lacks are dropped. The target month is fully replaced for
/// the user and scope, unlike submission's span-based replace.
///
/// # Errors
///
/// Returns `NoPriorData` if the previous month holds no records for the user
/// and scope; otherwise errors mirror the other supply operations.
pub fn copy_previous_month(
    persistence: &mut Persistence,
    caller: &Caller,
    request: CopyPreviousMonthRequest,
) -> Result<CopyPreviousMonthResponse, ApiError> {
    let user: UserId = parse_user(&request.user_id)?;
    AuthorizationService::authorize_write_for_user(caller, &user)?;
    let (month, target_range): (MonthKey, DateRange) = parse_month(&request.month)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let prior_range: DateRange = month
        .previous()
        .as_range()
        .map_err(translate_domain_error)?;
    let prior: Vec<AvailabilityRecord> = persistence
        .availability_in_range(&scope, &prior_range, Some(&user))
        .map_err(translate_persistence_error)?;
    if prior.is_empty() {
        return Err(ApiError::NoPriorData {
            user_id: user.value().to_owned(),
            month: month.to_string(),
        });
    }

    // Project record by record so each projected date keeps its role.
    let records: Vec<AvailabilityRecord> = prior
        .iter()
        .flat_map(|record| {
            project_month(&[record.date()], month)
                .into_iter()
                .map(|date| {
                    AvailabilityRecord::new(user.clone(), scope, date, record.role().cloned())
                })
                .collect::<Vec<AvailabilityRecord>>()
        })
        .collect();

    let copied: usize = persistence
        .replace_availability_range(&user, &scope, &target_range, &records)
        .map_err(translate_persistence_error)?;

    Ok(CopyPreviousMonthResponse {
        copied: count_u32(copied),
    })
}

/// Bulk-clears a month's availability and/or explicit requirements.
///
/// Affected users are captured before the availability delete and notified
/// afterwards, one event per user, best-effort.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed,
/// the scope is unknown, or the store fails. Notification failures never
/// fail the operation.
pub fn clear_month(
    persistence: &mut Persistence,
    caller: &Caller,
    sink: &dyn NotificationSink,
    request: ClearMonthRequest,
) -> Result<ClearMonthResponse, ApiError> {
    AuthorizationService::authorize_clear_month(caller)?;
    let kind: ClearKind = ClearKind::parse(&request.kind)?;
    let (month, range): (MonthKey, DateRange) = parse_month(&request.month)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let mut availability_deleted: usize = 0;
    let mut notified: u32 = 0;
    if kind.clears_availability() {
        let (deleted, affected): (usize, Vec<UserId>) = persistence
            .clear_availability_in_range(&scope, &range)
            .map_err(translate_persistence_error)?;
        availability_deleted = deleted;
        let events: Vec<NotificationEvent> = clearance_events(&affected, month);
        notified = dispatch_notifications(sink, &events);
    }

    let mut requirements_deleted: usize = 0;
    if kind.clears_requirements() {
        requirements_deleted = persistence
            .delete_explicit_requirements_in_range(&scope, &range)
            .map_err(translate_persistence_error)?;
    }

    Ok(ClearMonthResponse {
        availability_deleted: count_u32(availability_deleted),
        requirements_deleted: count_u32(requirements_deleted),
        notified,
    })
}

/// Replaces a month's pending roster for a scope.
///
/// Confirmed rows are never touched; only the pending draft is swapped.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed
/// (including roster dates outside the month), the scope is unknown, or the
/// store fails.
pub fn save_assignments(
    persistence: &mut Persistence,
    caller: &Caller,
    request: SaveAssignmentsRequest,
) -> Result<SaveAssignmentsResponse, ApiError> {
    AuthorizationService::authorize_manage_assignments(caller)?;
    let (month, range): (MonthKey, DateRange) = parse_month(&request.month)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let mut rows: Vec<Assignment> = Vec::with_capacity(request.assignments.len());
    for input in &request.assignments {
        let user: UserId = parse_user(&input.user_id)?;
        let date: Date = parse_date(&input.date).map_err(translate_domain_error)?;
        if !month.contains(date) {
            return Err(ApiError::InvalidInput {
                field: String::from("assignments"),
                message: format!("Date {} is outside month {month}", format_date(date)),
            });
        }
        let role: RoleLabel = parse_role(&input.role)?;
        rows.push(Assignment::new(user, scope, date, role));
    }

    let saved: usize = persistence
        .replace_pending_assignments(&scope, &range, &rows)
        .map_err(translate_persistence_error)?;

    Ok(SaveAssignmentsResponse {
        saved: count_u32(saved),
    })
}

/// Approves a month's pending roster for a scope.
///
/// All pending rows in range flip to confirmed in one batch; each affected
/// user receives a single notification listing their confirmed dates.
///
/// # Errors
///
/// Returns `NothingToApprove` if no pending rows exist in range; otherwise
/// errors mirror the other roster operations. Notification failures never
/// fail the operation.
pub fn approve_assignments(
    persistence: &mut Persistence,
    caller: &Caller,
    sink: &dyn NotificationSink,
    request: ApproveAssignmentsRequest,
) -> Result<ApproveAssignmentsResponse, ApiError> {
    AuthorizationService::authorize_manage_assignments(caller)?;
    let (month, range): (MonthKey, DateRange) = parse_month(&request.month)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let confirmed: Vec<Assignment> = persistence
        .confirm_pending_assignments(&scope, &range)
        .map_err(translate_persistence_error)?;
    if confirmed.is_empty() {
        return Err(ApiError::NothingToApprove {
            month: month.to_string(),
        });
    }

    let events: Vec<NotificationEvent> = confirmation_events(&confirmed);
    let notified: u32 = dispatch_notifications(sink, &events);

    Ok(ApproveAssignmentsResponse {
        approved: count_u32(confirmed.len()),
        notified,
    })
}

/// Computes coverage for a range and scope.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed,
/// the scope is unknown, or the store fails.
pub fn compute_coverage(
    persistence: &mut Persistence,
    caller: &Caller,
    request: ComputeCoverageRequest,
) -> Result<CoverageResponse, ApiError> {
    AuthorizationService::authorize_view_coverage(caller)?;
    let range: DateRange = parse_range(&request.start_date, &request.end_date)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let explicit: Vec<ExplicitRequirement> = persistence
        .explicit_requirements_in_range(&scope, &range)
        .map_err(translate_persistence_error)?;
    let templates: Vec<RecurringTemplate> = persistence
        .recurring_templates(&scope)
        .map_err(translate_persistence_error)?;
    let assignments: Vec<Assignment> = persistence
        .assignments_in_range(&scope, &range, None)
        .map_err(translate_persistence_error)?;

    let requirements = core_resolve_requirements(&range, &explicit, &templates);
    let report = core_compute_coverage(&requirements, &assignments);

    Ok(CoverageResponse {
        rows: report
            .rows
            .iter()
            .map(|row| CoverageRowDto {
                date: format_date(row.date),
                role: row.role.value().to_owned(),
                needed: row.needed,
                filled: row.filled,
                short: row.short(),
                is_short: row.is_short(),
            })
            .collect(),
        slots_filled: report.slots_filled,
        slots_short: report.slots_short,
    })
}

/// Computes the multi-scope shortfall overview over a forward month window.
///
/// Every department contributes its whole-department pseudo-scope plus each
/// of its programs. Fetches happen once per scope for the whole window and
/// the resolver runs once per `(scope, month)`; only combinations with
/// `slots_short > 0` are emitted.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed,
/// or the store fails.
pub fn coverage_overview(
    persistence: &mut Persistence,
    caller: &Caller,
    request: CoverageOverviewRequest,
) -> Result<CoverageOverviewResponse, ApiError> {
    AuthorizationService::authorize_view_coverage(caller)?;
    let from: MonthKey = MonthKey::parse(&request.from_month).map_err(translate_domain_error)?;
    let months_ahead: u32 = request
        .months_ahead
        .unwrap_or(DEFAULT_OVERVIEW_MONTHS)
        .clamp(MIN_OVERVIEW_MONTHS, MAX_OVERVIEW_MONTHS);

    let mut months: Vec<MonthKey> = Vec::new();
    let mut cursor: MonthKey = from;
    for _ in 0..months_ahead {
        months.push(cursor);
        cursor = cursor.next();
    }
    let window: DateRange = DateRange::new(
        months[0].as_range().map_err(translate_domain_error)?.start(),
        months[months.len() - 1]
            .as_range()
            .map_err(translate_domain_error)?
            .end(),
    )
    .map_err(translate_domain_error)?;

    let departments = persistence
        .list_departments()
        .map_err(translate_persistence_error)?;

    let mut rows: Vec<ShortfallRowDto> = Vec::new();
    for department in departments {
        let Some(department_id) = department.department_id() else {
            continue;
        };
        let programs = persistence
            .list_programs(department_id)
            .map_err(translate_persistence_error)?;

        let mut scopes: Vec<(ScopeKey, Option<String>)> =
            vec![(ScopeKey::department(department_id), None)];
        for program in programs {
            if let Some(program_id) = program.program_id() {
                scopes.push((
                    ScopeKey::program(department_id, program_id),
                    Some(program.name().to_owned()),
                ));
            }
        }

        for (scope, program_name) in scopes {
            let explicit: Vec<ExplicitRequirement> = persistence
                .explicit_requirements_in_range(&scope, &window)
                .map_err(translate_persistence_error)?;
            let templates: Vec<RecurringTemplate> = persistence
                .recurring_templates(&scope)
                .map_err(translate_persistence_error)?;
            if explicit.is_empty() && templates.is_empty() {
                continue;
            }
            let assignments: Vec<Assignment> = persistence
                .assignments_in_range(&scope, &window, None)
                .map_err(translate_persistence_error)?;

            for month in &months {
                let month_range: DateRange =
                    month.as_range().map_err(translate_domain_error)?;
                // The resolver range-filters explicit rows itself, and
                // out-of-month assignments match no requirement row, so the
                // per-scope window fetches are reused as-is.
                let requirements =
                    core_resolve_requirements(&month_range, &explicit, &templates);
                let report = core_compute_coverage(&requirements, &assignments);
                for (role, slots_short) in shortfall_by_role(&report) {
                    rows.push(ShortfallRowDto {
                        month: month.to_string(),
                        department_id,
                        department_name: department.name().to_owned(),
                        program_id: scope.program_id(),
                        program_name: program_name.clone(),
                        role: role.value().to_owned(),
                        slots_short,
                    });
                }
            }
        }
    }

    Ok(CoverageOverviewResponse { rows })
}

/// Ranks candidate users for a scope and role.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the request is malformed,
/// the scope is unknown, or the store fails.
pub fn rank_candidates(
    persistence: &mut Persistence,
    caller: &Caller,
    request: RankCandidatesRequest,
) -> Result<RankCandidatesResponse, ApiError> {
    AuthorizationService::authorize_rank_candidates(caller)?;
    let role: RoleLabel = parse_role(&request.role)?;
    let on_date: Option<Date> = request
        .on_date
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(translate_domain_error)?;
    let scope: ScopeKey = validated_scope(persistence, request.scope)?;

    let history: Vec<Assignment> = persistence
        .assignment_history(&scope, &role)
        .map_err(translate_persistence_error)?;
    let availability: Vec<AvailabilityRecord> = persistence
        .availability_matching_role(&scope, &role)
        .map_err(translate_persistence_error)?;

    let candidates: Vec<CandidateDto> = core_rank_candidates(&history, &availability, on_date)
        .into_iter()
        .map(|candidate| CandidateDto {
            user_id: candidate.user_id.value().to_owned(),
            assignment_count: candidate.assignment_count,
        })
        .collect();

    Ok(RankCandidatesResponse { candidates })
}

/// Creates a department.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the name is empty, or the
/// store fails.
pub fn create_department(
    persistence: &mut Persistence,
    caller: &Caller,
    request: CreateDepartmentRequest,
) -> Result<CreateDepartmentResponse, ApiError> {
    AuthorizationService::authorize_manage_scopes(caller)?;
    if request.name.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Department name must not be empty"),
        });
    }
    let department_id: i64 = persistence
        .create_department(&request.name)
        .map_err(translate_persistence_error)?;
    Ok(CreateDepartmentResponse { department_id })
}

/// Creates a program under a department.
///
/// # Errors
///
/// Returns an error if the caller is unauthorized, the name is empty, the
/// department is unknown, or the store fails.
pub fn create_program(
    persistence: &mut Persistence,
    caller: &Caller,
    request: CreateProgramRequest,
) -> Result<CreateProgramResponse, ApiError> {
    AuthorizationService::authorize_manage_scopes(caller)?;
    if request.name.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Program name must not be empty"),
        });
    }
    let program_id: i64 = persistence
        .create_program(request.department_id, &request.name)
        .map_err(translate_persistence_error)?;
    Ok(CreateProgramResponse { program_id })
}

/// Lists the scope directory.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_scopes(persistence: &mut Persistence) -> Result<ListScopesResponse, ApiError> {
    let departments = persistence
        .list_departments()
        .map_err(translate_persistence_error)?;

    let mut out: Vec<DepartmentDto> = Vec::with_capacity(departments.len());
    for department in departments {
        let Some(department_id) = department.department_id() else {
            continue;
        };
        let programs: Vec<ProgramDto> = persistence
            .list_programs(department_id)
            .map_err(translate_persistence_error)?
            .into_iter()
            .filter_map(|program| {
                program.program_id().map(|program_id| ProgramDto {
                    program_id,
                    name: program.name().to_owned(),
                })
            })
            .collect();
        out.push(DepartmentDto {
            department_id,
            name: department.name().to_owned(),
            programs,
        });
    }

    Ok(ListScopesResponse { departments: out })
}
