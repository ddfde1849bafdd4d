// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! API boundary layer for the Staff-Cover coverage engine.
//!
//! Every operation takes an explicit [`Caller`]; authorization is a pure
//! predicate over `(caller, operation)` evaluated before any store access.
//! Requests arrive as string-typed DTOs, are validated into domain types,
//! executed against persistence and the pure core, and answered with DTOs.
//! Notification delivery is dispatched here and is fire-and-forget relative
//! to the data mutation.

mod auth;
mod directory;
mod error;
mod handlers;
mod notify;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthorizationService, Caller, CallerRole};
pub use directory::{Directory, DirectoryError, StaticDirectory};
pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    approve_assignments, clear_month, compute_coverage, copy_previous_month, coverage_overview,
    create_department, create_program, delete_explicit_requirement, delete_recurring_template,
    fetch_availability, fetch_unavailability, list_recurring_templates, list_scopes,
    materialize_recurring, rank_candidates, resolve_requirements, save_assignments,
    submit_availability, submit_unavailability, upsert_explicit_requirement,
    upsert_recurring_template,
};
pub use notify::{TracingSink, dispatch_notifications};
pub use request_response::{
    ApproveAssignmentsRequest, ApproveAssignmentsResponse, AssignmentInput,
    AvailabilityRecordDto, CandidateDto, ClearMonthRequest, ClearMonthResponse,
    ComputeCoverageRequest, CoverageOverviewRequest, CoverageOverviewResponse, CoverageResponse,
    CoverageRowDto, CopyPreviousMonthRequest, CopyPreviousMonthResponse, CreateDepartmentRequest,
    CreateDepartmentResponse, CreateProgramRequest, CreateProgramResponse, DeleteExplicitRequest,
    DeleteTemplateRequest, DepartmentDto, FetchAvailabilityRequest, FetchAvailabilityResponse,
    FetchUnavailabilityRequest, FetchUnavailabilityResponse, ListScopesResponse,
    ListTemplatesRequest, ListTemplatesResponse, MaterializeRecurringRequest,
    MaterializeRecurringResponse, ProgramDto, RankCandidatesRequest, RankCandidatesResponse,
    RequirementRowDto, ResolveRequirementsRequest, ResolveRequirementsResponse,
    SaveAssignmentsRequest, SaveAssignmentsResponse, ScopeRef, ShortfallRowDto,
    SubmitAvailabilityRequest, SubmitAvailabilityResponse, SubmitUnavailabilityRequest,
    SubmitUnavailabilityResponse, TemplateDto, UnavailabilityRecordDto, UpsertExplicitRequest,
    UpsertExplicitResponse, UpsertTemplateRequest, UpsertTemplateResponse,
};
