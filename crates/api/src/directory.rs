// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The directory collaborator: user id to display name.
//!
//! User identity lives in an external system; the core only holds opaque
//! tokens. Responses that show people to schedulers resolve display names
//! through this boundary, best-effort: a directory outage degrades names
//! to raw tokens, it never fails the operation.

use staff_cover_domain::UserId;
use std::collections::HashMap;
use thiserror::Error;

/// Directory lookup errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The user id is not known to the directory.
    #[error("User '{user_id}' is not known to the directory")]
    UnknownUser {
        /// The unknown token.
        user_id: String,
    },
    /// The lookup itself failed.
    #[error("Directory lookup failed: {message}")]
    LookupFailed {
        /// A description of the failure.
        message: String,
    },
}

/// Resolves user ids to display names.
pub trait Directory {
    /// Resolves one user's display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is unknown or the lookup fails.
    fn display_name(&self, user_id: &UserId) -> Result<String, DirectoryError>;
}

/// An in-memory directory backed by a fixed map.
///
/// Used by tests and by deployments that sync the directory out-of-band.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    names: HashMap<String, String>,
}

impl StaticDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one user's display name.
    pub fn insert(&mut self, user_id: &UserId, display_name: &str) {
        self.names
            .insert(user_id.value().to_owned(), display_name.to_owned());
    }
}

impl Directory for StaticDirectory {
    fn display_name(&self, user_id: &UserId) -> Result<String, DirectoryError> {
        self.names
            .get(user_id.value())
            .cloned()
            .ok_or_else(|| DirectoryError::UnknownUser {
                user_id: user_id.value().to_owned(),
            })
    }
}
