// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity and authorization predicates.
//!
//! Identity and page-level authorization live outside this system; the
//! boundary receives an already-authenticated `Caller` and evaluates pure
//! role predicates before any operation touches the store.

use crate::error::ApiError;
use staff_cover_domain::UserId;

/// Caller roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerRole {
    /// Full administrative authority, including scope administration.
    Admin,
    /// Operations staff: bulk clearing, scope administration.
    Operations,
    /// Scheduling managers: demand management, rosters, coverage views,
    /// and acting on behalf of other users.
    Manager,
    /// Regular contractors: their own availability and blackout dates only.
    Member,
}

impl CallerRole {
    /// Parses a caller role from its string representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known role.
    pub fn parse(value: &str) -> Result<Self, ApiError> {
        match value {
            "Admin" => Ok(Self::Admin),
            "Operations" => Ok(Self::Operations),
            "Manager" => Ok(Self::Manager),
            "Member" => Ok(Self::Member),
            _ => Err(ApiError::InvalidInput {
                field: String::from("caller_role"),
                message: format!("Unknown role: {value}"),
            }),
        }
    }

    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Operations => "Operations",
            Self::Manager => "Manager",
            Self::Member => "Member",
        }
    }

    /// Returns whether this role carries scheduling-manager authority.
    #[must_use]
    pub const fn is_manager(&self) -> bool {
        matches!(self, Self::Admin | Self::Operations | Self::Manager)
    }

    /// Returns whether this role carries operations authority.
    #[must_use]
    pub const fn is_operations(&self) -> bool {
        matches!(self, Self::Admin | Self::Operations)
    }
}

/// An authenticated caller with an associated role.
///
/// Threaded explicitly through every operation; there is no ambient
/// request-scoped identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// The caller's directory user id.
    pub user_id: UserId,
    /// The role assigned to the caller.
    pub role: CallerRole,
}

impl Caller {
    /// Creates a new `Caller`.
    #[must_use]
    pub const fn new(user_id: UserId, role: CallerRole) -> Self {
        Self { user_id, role }
    }
}

/// Pure authorization predicates, one per operation family.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_manager(caller: &Caller, action: &str) -> Result<(), ApiError> {
        if caller.role.is_manager() {
            Ok(())
        } else {
            Err(ApiError::Unauthorized {
                action: action.to_owned(),
                required_role: String::from("Manager"),
            })
        }
    }

    fn require_operations(caller: &Caller, action: &str) -> Result<(), ApiError> {
        if caller.role.is_operations() {
            Ok(())
        } else {
            Err(ApiError::Unauthorized {
                action: action.to_owned(),
                required_role: String::from("Operations"),
            })
        }
    }

    /// Checks that a caller may manage demand records (templates, explicit
    /// requirements, materialization).
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not at least a `Manager`.
    pub fn authorize_manage_requirements(caller: &Caller) -> Result<(), ApiError> {
        Self::require_manager(caller, "manage_requirements")
    }

    /// Checks that a caller may view coverage and resolved requirements.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not at least a `Manager`.
    pub fn authorize_view_coverage(caller: &Caller) -> Result<(), ApiError> {
        Self::require_manager(caller, "view_coverage")
    }

    /// Checks that a caller may rank candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not at least a `Manager`.
    pub fn authorize_rank_candidates(caller: &Caller) -> Result<(), ApiError> {
        Self::require_manager(caller, "rank_candidates")
    }

    /// Checks that a caller may save or approve assignment rosters.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not at least a `Manager`.
    pub fn authorize_manage_assignments(caller: &Caller) -> Result<(), ApiError> {
        Self::require_manager(caller, "manage_assignments")
    }

    /// Checks that a caller may bulk-clear a month.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not at least `Operations`.
    pub fn authorize_clear_month(caller: &Caller) -> Result<(), ApiError> {
        Self::require_operations(caller, "clear_month")
    }

    /// Checks that a caller may administer the scope directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not at least `Operations`.
    pub fn authorize_manage_scopes(caller: &Caller) -> Result<(), ApiError> {
        Self::require_operations(caller, "manage_scopes")
    }

    /// Checks that a caller may write supply records for a target user.
    ///
    /// Everyone may write their own; managers may write on behalf of anyone.
    ///
    /// # Errors
    ///
    /// Returns an error if a `Member` targets another user.
    pub fn authorize_write_for_user(caller: &Caller, target: &UserId) -> Result<(), ApiError> {
        if caller.role.is_manager() || &caller.user_id == target {
            Ok(())
        } else {
            Err(ApiError::Unauthorized {
                action: String::from("write_for_user"),
                required_role: String::from("Manager"),
            })
        }
    }

    /// Resolves the user filter a caller may fetch supply records for.
    ///
    /// Members are restricted to their own rows regardless of the requested
    /// filter; managers may fetch anyone's or everyone's.
    ///
    /// # Errors
    ///
    /// Returns an error if a `Member` requests another user's records.
    pub fn authorize_fetch_filter(
        caller: &Caller,
        requested: Option<UserId>,
    ) -> Result<Option<UserId>, ApiError> {
        if caller.role.is_manager() {
            return Ok(requested);
        }
        match requested {
            Some(user) if user != caller.user_id => Err(ApiError::Unauthorized {
                action: String::from("fetch_for_user"),
                required_role: String::from("Manager"),
            }),
            _ => Ok(Some(caller.user_id.clone())),
        }
    }
}
