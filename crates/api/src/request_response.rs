// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs.
//!
//! DTOs are string-typed at the wire (dates `YYYY-MM-DD`, months `YYYY-MM`,
//! roles plain text) and distinct from domain types; handlers validate them
//! into the domain before touching the store.

use serde::{Deserialize, Serialize};

/// A scope reference: department plus optional program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeRef {
    /// The department's canonical ID.
    pub department_id: i64,
    /// The program's canonical ID, absent for department-wide scope.
    pub program_id: Option<i64>,
}

/// Request to resolve the effective requirement set for a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequirementsRequest {
    /// The scope to resolve for.
    pub scope: ScopeRef,
    /// First date of the range (`YYYY-MM-DD`).
    pub start_date: String,
    /// Last date of the range (`YYYY-MM-DD`).
    pub end_date: String,
}

/// One row of the effective requirement set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRowDto {
    /// The date (`YYYY-MM-DD`).
    pub date: String,
    /// The staffing role.
    pub role: String,
    /// How many people are needed.
    pub count_needed: u32,
    /// `"explicit"` or `"recurring"`.
    pub source: String,
}

/// Response for requirement resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequirementsResponse {
    /// The effective requirement rows, ascending by `(date, role)`.
    pub rows: Vec<RequirementRowDto>,
}

/// Request to materialize recurring templates onto a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializeRecurringRequest {
    /// The scope to materialize for.
    pub scope: ScopeRef,
    /// The target month (`YYYY-MM`).
    pub month: String,
}

/// Response for materialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializeRecurringResponse {
    /// How many explicit rows were newly created.
    pub inserted: u32,
}

/// Request to create or update a recurring template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertTemplateRequest {
    /// The scope the template applies to.
    pub scope: ScopeRef,
    /// The weekday number, `0 = Sunday` through `6 = Saturday`.
    pub weekday: u8,
    /// The staffing role.
    pub role: String,
    /// How many people are needed.
    pub count_needed: u32,
}

/// Response for a template upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertTemplateResponse {
    /// The template's canonical ID.
    pub template_id: i64,
}

/// Request to delete a recurring template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTemplateRequest {
    /// The template's canonical ID.
    pub template_id: i64,
}

/// Request to list a scope's recurring templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTemplatesRequest {
    /// The scope to list for.
    pub scope: ScopeRef,
}

/// One recurring template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDto {
    /// The template's canonical ID.
    pub template_id: i64,
    /// The weekday number, `0 = Sunday` through `6 = Saturday`.
    pub weekday: u8,
    /// The staffing role.
    pub role: String,
    /// How many people are needed.
    pub count_needed: u32,
}

/// Response listing a scope's recurring templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTemplatesResponse {
    /// The templates, in creation order.
    pub templates: Vec<TemplateDto>,
}

/// Request to create or update an explicit requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertExplicitRequest {
    /// The scope the requirement applies to.
    pub scope: ScopeRef,
    /// The date (`YYYY-MM-DD`).
    pub date: String,
    /// The staffing role.
    pub role: String,
    /// How many people are needed.
    pub count_needed: u32,
}

/// Response for an explicit requirement upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertExplicitResponse {
    /// The row's canonical ID.
    pub requirement_id: i64,
}

/// Request to delete an explicit requirement, restoring template fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteExplicitRequest {
    /// The scope the requirement applies to.
    pub scope: ScopeRef,
    /// The date (`YYYY-MM-DD`).
    pub date: String,
    /// The staffing role.
    pub role: String,
}

/// Request to submit availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAvailabilityRequest {
    /// The user declaring availability.
    pub user_id: String,
    /// The scope the declaration applies to.
    pub scope: ScopeRef,
    /// The workable dates (`YYYY-MM-DD`).
    pub dates: Vec<String>,
    /// The declared role; absent means "any role".
    pub role: Option<String>,
}

/// Response for an availability submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAvailabilityResponse {
    /// How many records were saved.
    pub saved: u32,
}

/// Request to fetch availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchAvailabilityRequest {
    /// The scope to fetch for.
    pub scope: ScopeRef,
    /// First date of the range (`YYYY-MM-DD`).
    pub start_date: String,
    /// Last date of the range (`YYYY-MM-DD`).
    pub end_date: String,
    /// Restrict to one user. Members are always restricted to themselves.
    pub user_id: Option<String>,
}

/// One availability record with its resolved display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecordDto {
    /// The user's directory token.
    pub user_id: String,
    /// The user's display name, or the raw token if the directory could not
    /// resolve it.
    pub display_name: String,
    /// The workable date (`YYYY-MM-DD`).
    pub date: String,
    /// The declared role; absent means "any role".
    pub role: Option<String>,
}

/// Response for an availability fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchAvailabilityResponse {
    /// The records, ascending by `(user, date)`.
    pub records: Vec<AvailabilityRecordDto>,
}

/// Request to submit blackout dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitUnavailabilityRequest {
    /// The user declaring the blackout.
    pub user_id: String,
    /// The blackout dates (`YYYY-MM-DD`).
    pub dates: Vec<String>,
}

/// Response for a blackout submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitUnavailabilityResponse {
    /// How many records were saved.
    pub saved: u32,
}

/// Request to fetch blackout dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchUnavailabilityRequest {
    /// First date of the range (`YYYY-MM-DD`).
    pub start_date: String,
    /// Last date of the range (`YYYY-MM-DD`).
    pub end_date: String,
    /// Restrict to one user. Members are always restricted to themselves.
    pub user_id: Option<String>,
}

/// One blackout record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailabilityRecordDto {
    /// The user's directory token.
    pub user_id: String,
    /// The blackout date (`YYYY-MM-DD`).
    pub date: String,
}

/// Response for a blackout fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchUnavailabilityResponse {
    /// The records, ascending by `(user, date)`.
    pub records: Vec<UnavailabilityRecordDto>,
}

/// Request to copy the previous month's availability forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPreviousMonthRequest {
    /// The user whose availability is copied.
    pub user_id: String,
    /// The scope to copy within.
    pub scope: ScopeRef,
    /// The target month (`YYYY-MM`); the source is the month before it.
    pub month: String,
}

/// Response for a copy-previous operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPreviousMonthResponse {
    /// How many records landed in the target month.
    pub copied: u32,
}

/// Request to bulk-clear a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearMonthRequest {
    /// The scope to clear.
    pub scope: ScopeRef,
    /// The month to clear (`YYYY-MM`).
    pub month: String,
    /// `"availability"`, `"requirements"`, or `"both"`.
    pub kind: String,
}

/// Response for a month clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearMonthResponse {
    /// How many availability rows were deleted.
    pub availability_deleted: u32,
    /// How many explicit requirement rows were deleted.
    pub requirements_deleted: u32,
    /// How many affected users were successfully notified.
    pub notified: u32,
}

/// One row of an assignment roster being saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentInput {
    /// The assigned user.
    pub user_id: String,
    /// The working date (`YYYY-MM-DD`), inside the request month.
    pub date: String,
    /// The staffing role being filled.
    pub role: String,
}

/// Request to replace a month's pending roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveAssignmentsRequest {
    /// The scope the roster belongs to.
    pub scope: ScopeRef,
    /// The roster month (`YYYY-MM`).
    pub month: String,
    /// The new pending roster. Confirmed rows are untouched.
    pub assignments: Vec<AssignmentInput>,
}

/// Response for a roster save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveAssignmentsResponse {
    /// How many pending rows were saved.
    pub saved: u32,
}

/// Request to approve a month's pending roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveAssignmentsRequest {
    /// The scope to approve.
    pub scope: ScopeRef,
    /// The month to approve (`YYYY-MM`).
    pub month: String,
}

/// Response for an approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveAssignmentsResponse {
    /// How many rows were confirmed.
    pub approved: u32,
    /// How many users were successfully notified.
    pub notified: u32,
}

/// Request to compute coverage for a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeCoverageRequest {
    /// The scope to compute for.
    pub scope: ScopeRef,
    /// First date of the range (`YYYY-MM-DD`).
    pub start_date: String,
    /// Last date of the range (`YYYY-MM-DD`).
    pub end_date: String,
}

/// Coverage for one `(date, role)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRowDto {
    /// The date (`YYYY-MM-DD`).
    pub date: String,
    /// The staffing role.
    pub role: String,
    /// How many people are needed.
    pub needed: u32,
    /// How many assignments exist (pending or confirmed).
    pub filled: u32,
    /// Unmet demand: `max(0, needed - filled)`.
    pub short: u32,
    /// Whether the row is under-filled.
    pub is_short: bool,
}

/// Response for a coverage computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageResponse {
    /// One row per `(date, role)` with nonzero demand.
    pub rows: Vec<CoverageRowDto>,
    /// Sum of raw filled counts (not clipped to needed).
    pub slots_filled: u32,
    /// Sum of per-row shortfall.
    pub slots_short: u32,
}

/// Request for the multi-scope coverage overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageOverviewRequest {
    /// First month of the forward window (`YYYY-MM`).
    pub from_month: String,
    /// How many whole months to cover. Defaults to 3, clamped to 1..=6.
    pub months_ahead: Option<u32>,
}

/// One under-covered `(month, scope, role)` combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortfallRowDto {
    /// The month (`YYYY-MM`).
    pub month: String,
    /// The department's canonical ID.
    pub department_id: i64,
    /// The department's display name.
    pub department_name: String,
    /// The program's canonical ID, absent for the whole-department scope.
    pub program_id: Option<i64>,
    /// The program's display name, absent for the whole-department scope.
    pub program_name: Option<String>,
    /// The staffing role.
    pub role: String,
    /// Total unmet demand for the combination.
    pub slots_short: u32,
}

/// Response for the coverage overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageOverviewResponse {
    /// Every combination with `slots_short > 0`; fully covered and
    /// demand-free combinations are omitted.
    pub rows: Vec<ShortfallRowDto>,
}

/// Request to rank candidates for a scope and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankCandidatesRequest {
    /// The scope to rank for.
    pub scope: ScopeRef,
    /// The staffing role.
    pub role: String,
    /// Restrict to users available on this date (`YYYY-MM-DD`).
    pub on_date: Option<String>,
}

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDto {
    /// The candidate's directory token.
    pub user_id: String,
    /// Historical assignment count for the scope and role; zero in the
    /// availability fallback.
    pub assignment_count: u32,
}

/// Response for candidate ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankCandidatesResponse {
    /// Candidates, descending by count, ties ascending by user id.
    pub candidates: Vec<CandidateDto>,
}

/// Request to create a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    /// The department's display name.
    pub name: String,
}

/// Response for a department creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDepartmentResponse {
    /// The department's canonical ID.
    pub department_id: i64,
}

/// Request to create a program under a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProgramRequest {
    /// The parent department's canonical ID.
    pub department_id: i64,
    /// The program's display name.
    pub name: String,
}

/// Response for a program creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProgramResponse {
    /// The program's canonical ID.
    pub program_id: i64,
}

/// One program in the scope listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDto {
    /// The program's canonical ID.
    pub program_id: i64,
    /// The program's display name.
    pub name: String,
}

/// One department with its programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDto {
    /// The department's canonical ID.
    pub department_id: i64,
    /// The department's display name.
    pub name: String,
    /// The department's programs.
    pub programs: Vec<ProgramDto>,
}

/// Response listing the scope directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListScopesResponse {
    /// Every department with its programs.
    pub departments: Vec<DepartmentDto>,
}
