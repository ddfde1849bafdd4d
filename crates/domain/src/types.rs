// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// The organizational scope a demand or supply record applies to.
///
/// A scope is a `(department, program)` pair. An absent program means the
/// record is department-wide. Department-wide and per-program records are
/// disjoint partitions: scope matching is always exact, never a hierarchical
/// roll-up, even though every program belongs to a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeKey {
    /// The canonical department identifier.
    department_id: i64,
    /// The canonical program identifier, if the scope is program-specific.
    program_id: Option<i64>,
}

impl ScopeKey {
    /// Creates a department-wide scope.
    #[must_use]
    pub const fn department(department_id: i64) -> Self {
        Self {
            department_id,
            program_id: None,
        }
    }

    /// Creates a program-specific scope.
    #[must_use]
    pub const fn program(department_id: i64, program_id: i64) -> Self {
        Self {
            department_id,
            program_id: Some(program_id),
        }
    }

    /// Creates a scope from its raw parts.
    #[must_use]
    pub const fn new(department_id: i64, program_id: Option<i64>) -> Self {
        Self {
            department_id,
            program_id,
        }
    }

    /// Returns the department identifier.
    #[must_use]
    pub const fn department_id(&self) -> i64 {
        self.department_id
    }

    /// Returns the program identifier, if the scope is program-specific.
    #[must_use]
    pub const fn program_id(&self) -> Option<i64> {
        self.program_id
    }

    /// Returns whether this scope covers the whole department.
    #[must_use]
    pub const fn is_department_wide(&self) -> bool {
        self.program_id.is_none()
    }
}

impl std::fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.program_id {
            Some(program_id) => {
                write!(f, "department {}/program {program_id}", self.department_id)
            }
            None => write!(f, "department {}", self.department_id),
        }
    }
}

/// A department in the scope directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the department has not been persisted yet.
    department_id: Option<i64>,
    /// The department's display name.
    name: String,
}

impl Department {
    /// Creates a new `Department` without a persisted ID.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            department_id: None,
            name,
        }
    }

    /// Creates a `Department` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(department_id: i64, name: String) -> Self {
        Self {
            department_id: Some(department_id),
            name,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn department_id(&self) -> Option<i64> {
        self.department_id
    }

    /// Returns the department's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A program in the scope directory.
///
/// A program always belongs to exactly one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the program has not been persisted yet.
    program_id: Option<i64>,
    /// The parent department's canonical identifier.
    department_id: i64,
    /// The program's display name.
    name: String,
}

impl Program {
    /// Creates a new `Program` without a persisted ID.
    #[must_use]
    pub const fn new(department_id: i64, name: String) -> Self {
        Self {
            program_id: None,
            department_id,
            name,
        }
    }

    /// Creates a `Program` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(program_id: i64, department_id: i64, name: String) -> Self {
        Self {
            program_id: Some(program_id),
            department_id,
            name,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn program_id(&self) -> Option<i64> {
        self.program_id
    }

    /// Returns the parent department's identifier.
    #[must_use]
    pub const fn department_id(&self) -> i64 {
        self.department_id
    }

    /// Returns the program's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An opaque user identifier issued by the external directory.
///
/// The core never interprets the token; display names and addresses are
/// resolved through the directory collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId {
    /// The identifier token.
    value: String,
}

impl UserId {
    /// Creates a new `UserId`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or whitespace.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidUserId(String::from(
                "User id must not be empty",
            )));
        }
        Ok(Self {
            value: value.to_owned(),
        })
    }

    /// Returns the identifier token.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A free-text staffing role label (e.g. "Output").
///
/// Role labels join case-sensitively on their exact text. The vocabulary is
/// managed externally; the core enforces only that a label is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleLabel {
    /// The label text, kept exactly as entered.
    value: String,
}

impl RoleLabel {
    /// Creates a new `RoleLabel`.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty or whitespace.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidRole(String::from(
                "Role must not be empty",
            )));
        }
        Ok(Self {
            value: value.to_owned(),
        })
    }

    /// Returns the label text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for RoleLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
