// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Staff-Cover coverage engine.
//!
//! This crate provides `SQLite` persistence for the scope directory, demand
//! records (recurring templates and explicit requirements), supply records
//! (availability and unavailability), and assignments. It is built on Diesel
//! with embedded migrations.
//!
//! ## Write discipline
//!
//! The store has no row-level update semantics for supply and roster data.
//! Submit, copy-previous, save, and clear are all *replace-range* writes:
//! delete the rows under an explicit key (user/scope/range or scope/range)
//! and insert the new set, inside one transaction. Last write wins and there
//! is no merge; see the `mutations` module.
//!
//! ## Testing
//!
//! Tests run against unique in-memory databases (an atomic counter keys the
//! shared-cache name, so isolation is deterministic) and require no external
//! infrastructure.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use staff_cover_domain::{
    Assignment, AssignmentStatus, AvailabilityRecord, DateRange, Department, ExplicitRequirement,
    Program, RecurringTemplate, RoleLabel, ScopeKey, UnavailabilityRecord, UserId,
};
use time::Date;

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so test
/// databases never collide.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the coverage engine's store.
///
/// One adapter owns one connection; the server serializes access behind a
/// mutex. All multi-step mutations run inside transactions on this
/// connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter with a unique in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("staff_cover_memdb_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter backed by a `SQLite` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // --- scope directory ---

    /// Creates a department and returns its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_department(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::scopes::insert_department(&mut self.conn, name)
    }

    /// Creates a program under a department and returns its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the department does not exist.
    pub fn create_program(
        &mut self,
        department_id: i64,
        name: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::scopes::insert_program(&mut self.conn, department_id, name)
    }

    /// Lists every department.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_departments(&mut self) -> Result<Vec<Department>, PersistenceError> {
        queries::scopes::list_departments(&mut self.conn)
    }

    /// Lists every program under a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_programs(&mut self, department_id: i64) -> Result<Vec<Program>, PersistenceError> {
        queries::scopes::list_programs(&mut self.conn, department_id)
    }

    /// Validates that a scope references a real department and, when present,
    /// a program that belongs to it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the scope is dangling or mismatched.
    pub fn validate_scope(&mut self, scope: &ScopeKey) -> Result<(), PersistenceError> {
        queries::scopes::validate_scope(&mut self.conn, scope)
    }

    // --- demand ---

    /// Loads every recurring template for a scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recurring_templates(
        &mut self,
        scope: &ScopeKey,
    ) -> Result<Vec<RecurringTemplate>, PersistenceError> {
        queries::requirements::recurring_for_scope(&mut self.conn, scope)
    }

    /// Inserts or updates a recurring template; returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn upsert_recurring_template(
        &mut self,
        template: &RecurringTemplate,
    ) -> Result<i64, PersistenceError> {
        mutations::requirements::upsert_recurring(&mut self.conn, template)
    }

    /// Deletes a recurring template by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no template has that ID.
    pub fn delete_recurring_template(&mut self, template_id: i64) -> Result<(), PersistenceError> {
        mutations::requirements::delete_recurring(&mut self.conn, template_id)
    }

    /// Loads the explicit requirements for a scope inside a range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn explicit_requirements_in_range(
        &mut self,
        scope: &ScopeKey,
        range: &DateRange,
    ) -> Result<Vec<ExplicitRequirement>, PersistenceError> {
        queries::requirements::explicit_in_range(&mut self.conn, scope, range)
    }

    /// Inserts or updates an explicit requirement; returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn upsert_explicit_requirement(
        &mut self,
        requirement: &ExplicitRequirement,
    ) -> Result<i64, PersistenceError> {
        mutations::requirements::upsert_explicit(&mut self.conn, requirement)
    }

    /// Deletes the explicit requirement for a `(scope, date, role)`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no row matches.
    pub fn delete_explicit_requirement(
        &mut self,
        scope: &ScopeKey,
        date: Date,
        role: &RoleLabel,
    ) -> Result<(), PersistenceError> {
        mutations::requirements::delete_explicit(&mut self.conn, scope, date, role)
    }

    /// Inserts a batch of explicit requirements in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn insert_explicit_requirements(
        &mut self,
        rows: &[ExplicitRequirement],
    ) -> Result<usize, PersistenceError> {
        mutations::requirements::insert_explicit_batch(&mut self.conn, rows)
    }

    /// Deletes every explicit requirement for a scope inside a range.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_explicit_requirements_in_range(
        &mut self,
        scope: &ScopeKey,
        range: &DateRange,
    ) -> Result<usize, PersistenceError> {
        mutations::requirements::delete_explicit_in_range(&mut self.conn, scope, range)
    }

    // --- supply ---

    /// Loads availability for a scope inside a range, optionally narrowed to
    /// one user.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn availability_in_range(
        &mut self,
        scope: &ScopeKey,
        range: &DateRange,
        user: Option<&UserId>,
    ) -> Result<Vec<AvailabilityRecord>, PersistenceError> {
        queries::availability::availability_in_range(&mut self.conn, scope, range, user)
    }

    /// Loads the availability rows of a scope whose role matches exactly or
    /// is blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn availability_matching_role(
        &mut self,
        scope: &ScopeKey,
        role: &RoleLabel,
    ) -> Result<Vec<AvailabilityRecord>, PersistenceError> {
        queries::availability::availability_matching_role(&mut self.conn, scope, role)
    }

    /// Replaces a user's availability for a scope inside a range.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn replace_availability_range(
        &mut self,
        user: &UserId,
        scope: &ScopeKey,
        range: &DateRange,
        records: &[AvailabilityRecord],
    ) -> Result<usize, PersistenceError> {
        mutations::availability::replace_availability_range(
            &mut self.conn,
            user,
            scope,
            range,
            records,
        )
    }

    /// Deletes every availability row for a scope inside a range, returning
    /// the deletion count and the distinct affected users.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn clear_availability_in_range(
        &mut self,
        scope: &ScopeKey,
        range: &DateRange,
    ) -> Result<(usize, Vec<UserId>), PersistenceError> {
        mutations::availability::clear_availability_in_range(&mut self.conn, scope, range)
    }

    /// Loads unavailability rows inside a range, optionally narrowed to one
    /// user.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn unavailability_in_range(
        &mut self,
        range: &DateRange,
        user: Option<&UserId>,
    ) -> Result<Vec<UnavailabilityRecord>, PersistenceError> {
        queries::availability::unavailability_in_range(&mut self.conn, range, user)
    }

    /// Replaces a user's blackout dates inside a range.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn replace_unavailability_range(
        &mut self,
        user: &UserId,
        range: &DateRange,
        dates: &[Date],
    ) -> Result<usize, PersistenceError> {
        mutations::availability::replace_unavailability_range(&mut self.conn, user, range, dates)
    }

    // --- assignments ---

    /// Loads every assignment for a scope inside a range, optionally narrowed
    /// to one status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn assignments_in_range(
        &mut self,
        scope: &ScopeKey,
        range: &DateRange,
        status: Option<AssignmentStatus>,
    ) -> Result<Vec<Assignment>, PersistenceError> {
        queries::assignments::assignments_in_range(&mut self.conn, scope, range, status)
    }

    /// Loads the full assignment history for an exact `(scope, role)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn assignment_history(
        &mut self,
        scope: &ScopeKey,
        role: &RoleLabel,
    ) -> Result<Vec<Assignment>, PersistenceError> {
        queries::assignments::history_for_scope_role(&mut self.conn, scope, role)
    }

    /// Replaces the pending roster for a scope inside a range.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn replace_pending_assignments(
        &mut self,
        scope: &ScopeKey,
        range: &DateRange,
        rows: &[Assignment],
    ) -> Result<usize, PersistenceError> {
        mutations::assignments::replace_pending_in_range(&mut self.conn, scope, range, rows)
    }

    /// Confirms every pending assignment for a scope inside a range,
    /// returning the confirmed snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn confirm_pending_assignments(
        &mut self,
        scope: &ScopeKey,
        range: &DateRange,
    ) -> Result<Vec<Assignment>, PersistenceError> {
        mutations::assignments::confirm_pending_in_range(&mut self.conn, scope, range)
    }
}
