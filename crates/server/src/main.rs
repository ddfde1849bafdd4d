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
#![allow(clippy::multiple_crate_versions)]

//! HTTP server for the Staff-Cover coverage engine.
//!
//! Routes are thin JSON shims over the API operations: each request body
//! carries the caller identity (`caller_user_id`, `caller_role`) alongside
//! the operation's own fields, and each response is either the operation's
//! DTO or an error envelope with a machine-readable kind.

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use staff_cover_api::{
    ApiError, ApproveAssignmentsRequest, Caller, CallerRole, ClearMonthRequest,
    ComputeCoverageRequest, CopyPreviousMonthRequest, CoverageOverviewRequest,
    CreateDepartmentRequest, CreateProgramRequest, DeleteExplicitRequest, DeleteTemplateRequest,
    FetchAvailabilityRequest, FetchUnavailabilityRequest, ListTemplatesRequest,
    MaterializeRecurringRequest, RankCandidatesRequest, ResolveRequirementsRequest,
    SaveAssignmentsRequest, StaticDirectory, SubmitAvailabilityRequest,
    SubmitUnavailabilityRequest, TracingSink, UpsertExplicitRequest, UpsertTemplateRequest,
    approve_assignments, clear_month, compute_coverage, copy_previous_month, coverage_overview,
    create_department, create_program, delete_explicit_requirement, delete_recurring_template,
    fetch_availability, fetch_unavailability, list_recurring_templates, list_scopes,
    materialize_recurring, rank_candidates, resolve_requirements, save_assignments,
    submit_availability, submit_unavailability, translate_domain_error,
    upsert_explicit_requirement, upsert_recurring_template,
};
use staff_cover_domain::UserId;
use staff_cover_persistence::Persistence;

/// Staff-Cover Server - HTTP server for the coverage engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer, serialized behind a mutex.
    persistence: Arc<Mutex<Persistence>>,
    /// The directory collaborator for display-name resolution.
    directory: Arc<StaticDirectory>,
    /// The notification transport.
    sink: Arc<TracingSink>,
}

/// Caller identity carried by every request body.
#[derive(Debug, Deserialize)]
struct CallerEnvelope<T> {
    /// The caller's directory user id.
    caller_user_id: String,
    /// The caller's role: Admin, Operations, Manager, or Member.
    caller_role: String,
    /// The operation's own fields.
    #[serde(flatten)]
    request: T,
}

impl<T> CallerEnvelope<T> {
    fn caller(&self) -> Result<Caller, ApiError> {
        let user_id: UserId =
            UserId::new(&self.caller_user_id).map_err(translate_domain_error)?;
        let role: CallerRole = CallerRole::parse(&self.caller_role)?;
        Ok(Caller::new(user_id, role))
    }
}

/// Error envelope returned for every failed request.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Machine-readable error kind.
    kind: &'static str,
    /// Human-readable description.
    message: String,
}

const fn error_parts(error: &ApiError) -> (StatusCode, &'static str) {
    match error {
        ApiError::Unauthorized { .. } => (StatusCode::FORBIDDEN, "unauthorized"),
        ApiError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
        ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        ApiError::NoPriorData { .. } => (StatusCode::CONFLICT, "no_prior_data"),
        ApiError::NothingToApprove { .. } => (StatusCode::CONFLICT, "nothing_to_approve"),
        ApiError::Store { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "store_failure"),
    }
}

fn error_response(error: &ApiError) -> Response {
    let (status, kind): (StatusCode, &'static str) = error_parts(error);
    (
        status,
        Json(ErrorResponse {
            kind,
            message: error.to_string(),
        }),
    )
        .into_response()
}

fn ok_response<T: Serialize>(body: &T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// Generates a route handler for an operation taking only persistence.
macro_rules! plain_route {
    ($name:ident, $request:ty, $operation:ident) => {
        async fn $name(
            AxumState(state): AxumState<AppState>,
            Json(body): Json<CallerEnvelope<$request>>,
        ) -> Response {
            let caller: Caller = match body.caller() {
                Ok(caller) => caller,
                Err(e) => return error_response(&e),
            };
            let mut persistence = state.persistence.lock().await;
            match $operation(&mut persistence, &caller, body.request) {
                Ok(response) => ok_response(&response),
                Err(e) => error_response(&e),
            }
        }
    };
}

plain_route!(route_resolve_requirements, ResolveRequirementsRequest, resolve_requirements);
plain_route!(route_materialize_recurring, MaterializeRecurringRequest, materialize_recurring);
plain_route!(route_upsert_template, UpsertTemplateRequest, upsert_recurring_template);
plain_route!(route_delete_template, DeleteTemplateRequest, delete_recurring_template);
plain_route!(route_list_templates, ListTemplatesRequest, list_recurring_templates);
plain_route!(route_upsert_explicit, UpsertExplicitRequest, upsert_explicit_requirement);
plain_route!(route_delete_explicit, DeleteExplicitRequest, delete_explicit_requirement);
plain_route!(route_submit_availability, SubmitAvailabilityRequest, submit_availability);
plain_route!(route_submit_unavailability, SubmitUnavailabilityRequest, submit_unavailability);
plain_route!(route_fetch_unavailability, FetchUnavailabilityRequest, fetch_unavailability);
plain_route!(route_copy_previous_month, CopyPreviousMonthRequest, copy_previous_month);
plain_route!(route_save_assignments, SaveAssignmentsRequest, save_assignments);
plain_route!(route_compute_coverage, ComputeCoverageRequest, compute_coverage);
plain_route!(route_coverage_overview, CoverageOverviewRequest, coverage_overview);
plain_route!(route_rank_candidates, RankCandidatesRequest, rank_candidates);
plain_route!(route_create_department, CreateDepartmentRequest, create_department);
plain_route!(route_create_program, CreateProgramRequest, create_program);

async fn route_fetch_availability(
    AxumState(state): AxumState<AppState>,
    Json(body): Json<CallerEnvelope<FetchAvailabilityRequest>>,
) -> Response {
    let caller: Caller = match body.caller() {
        Ok(caller) => caller,
        Err(e) => return error_response(&e),
    };
    let mut persistence = state.persistence.lock().await;
    match fetch_availability(&mut persistence, &caller, state.directory.as_ref(), body.request) {
        Ok(response) => ok_response(&response),
        Err(e) => error_response(&e),
    }
}

async fn route_clear_month(
    AxumState(state): AxumState<AppState>,
    Json(body): Json<CallerEnvelope<ClearMonthRequest>>,
) -> Response {
    let caller: Caller = match body.caller() {
        Ok(caller) => caller,
        Err(e) => return error_response(&e),
    };
    let mut persistence = state.persistence.lock().await;
    match clear_month(&mut persistence, &caller, state.sink.as_ref(), body.request) {
        Ok(response) => ok_response(&response),
        Err(e) => error_response(&e),
    }
}

async fn route_approve_assignments(
    AxumState(state): AxumState<AppState>,
    Json(body): Json<CallerEnvelope<ApproveAssignmentsRequest>>,
) -> Response {
    let caller: Caller = match body.caller() {
        Ok(caller) => caller,
        Err(e) => return error_response(&e),
    };
    let mut persistence = state.persistence.lock().await;
    match approve_assignments(&mut persistence, &caller, state.sink.as_ref(), body.request) {
        Ok(response) => ok_response(&response),
        Err(e) => error_response(&e),
    }
}

async fn route_list_scopes(AxumState(state): AxumState<AppState>) -> Response {
    let mut persistence = state.persistence.lock().await;
    match list_scopes(&mut persistence) {
        Ok(response) => ok_response(&response),
        Err(e) => error_response(&e),
    }
}

async fn route_health() -> Response {
    (StatusCode::OK, "ok").into_response()
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(route_health))
        .route("/requirements/resolve", post(route_resolve_requirements))
        .route("/requirements/materialize", post(route_materialize_recurring))
        .route("/requirements/templates/upsert", post(route_upsert_template))
        .route("/requirements/templates/delete", post(route_delete_template))
        .route("/requirements/templates/list", post(route_list_templates))
        .route("/requirements/explicit/upsert", post(route_upsert_explicit))
        .route("/requirements/explicit/delete", post(route_delete_explicit))
        .route("/availability/submit", post(route_submit_availability))
        .route("/availability/fetch", post(route_fetch_availability))
        .route("/availability/copy-previous", post(route_copy_previous_month))
        .route("/availability/clear-month", post(route_clear_month))
        .route("/unavailability/submit", post(route_submit_unavailability))
        .route("/unavailability/fetch", post(route_fetch_unavailability))
        .route("/assignments/save", post(route_save_assignments))
        .route("/assignments/approve", post(route_approve_assignments))
        .route("/coverage/compute", post(route_compute_coverage))
        .route("/coverage/overview", post(route_coverage_overview))
        .route("/candidates/rank", post(route_rank_candidates))
        .route("/scopes", get(route_list_scopes))
        .route("/scopes/departments", post(route_create_department))
        .route("/scopes/programs", post(route_create_program))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Staff-Cover server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        directory: Arc::new(StaticDirectory::new()),
        sink: Arc::new(TracingSink),
    };
    let router: Router = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    info!("Listening on port {}", args.port);
    axum::serve(listener, router).await?;

    Ok(())
}
