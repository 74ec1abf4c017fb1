// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware surface gating.
//!
//! Capabilities expose what the current session may do so a surface can
//! hide controls it would reject anyway. [`require_mutation`] is the
//! enforcement point; the capability flags are advisory views of the same
//! rule.

use siop_domain::{Role, Session};

use crate::error::AuthError;

/// Whether a role may mutate records, accounts, or backups.
///
/// Mutation is exclusive to `ADMIN`. `COMANDO` outranks `USER` socially
/// but carries the same read-only access.
#[must_use]
pub const fn can_mutate(role: Role) -> bool {
    matches!(role, Role::Admin)
}

/// The actions available to a session, precomputed for surface gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// May create, update, and delete infraction and productivity records.
    pub can_manage_records: bool,
    /// May create and delete operator accounts.
    pub can_manage_users: bool,
    /// May export and restore backups and reset the store.
    pub can_backup: bool,
}

/// Computes the capability flags for a session, `None` meaning logged out.
///
/// A logged-out caller holds no capabilities at all.
#[must_use]
pub const fn compute_capabilities(session: Option<&Session>) -> Capabilities {
    let mutate: bool = match session {
        Some(session) => can_mutate(session.role),
        None => false,
    };
    Capabilities {
        can_manage_records: mutate,
        can_manage_users: mutate,
        can_backup: mutate,
    }
}

/// Enforces that the current session may perform a mutating action.
///
/// # Arguments
///
/// * `session` - The current session, `None` when logged out
/// * `action` - Short action name used in the rejection message
///
/// # Errors
///
/// Returns `AuthError::Unauthorized` when there is no session or the
/// session's role is not `ADMIN`.
pub fn require_mutation(session: Option<&Session>, action: &str) -> Result<(), AuthError> {
    match session {
        Some(session) if can_mutate(session.role) => Ok(()),
        _ => Err(AuthError::Unauthorized {
            action: action.to_string(),
        }),
    }
}
