// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod assignment;
mod validation;

use crate::{RoleLabel, ScopeKey, UserId};

pub fn test_scope() -> ScopeKey {
    ScopeKey::department(1)
}

pub fn test_program_scope() -> ScopeKey {
    ScopeKey::program(1, 10)
}

pub fn test_role() -> RoleLabel {
    RoleLabel::new("Output").unwrap()
}

pub fn test_user(token: &str) -> UserId {
    UserId::new(token).unwrap()
}
