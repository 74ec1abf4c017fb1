// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credential checking and session lifecycle.

use siop_core::DashboardState;
use siop_domain::{Session, User};
use siop_persistence::{Store, clear_session, save_session};
use tracing::{info, warn};

use crate::error::AuthError;

/// Authentication service for the single operator session.
///
/// Login compares the submitted pair against the in-memory user list with a
/// case-insensitive username and a case-sensitive password, then persists
/// the password-stripped session to the session slot. There is exactly one
/// session; a new login replaces any previous one.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Authenticates a username/password pair and opens a session.
    ///
    /// # Arguments
    ///
    /// * `state` - The loaded dashboard state; its session field is set on
    ///   success
    /// * `store` - The store holding the session slot
    /// * `username` - Submitted login name, matched case-insensitively
    /// * `password` - Submitted credential, matched exactly
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when no account matches, or
    /// a persistence error if the session slot cannot be written.
    pub fn login<S: Store + ?Sized>(
        state: &mut DashboardState,
        store: &mut S,
        username: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let submitted: String = username.trim().to_lowercase();
        let Some(user) = state
            .users
            .iter()
            .find(|u: &&User| u.username.to_lowercase() == submitted && u.password == password)
        else {
            warn!(username = %submitted, "login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let session: Session = Session::for_user(user);
        save_session(store, &session)?;
        info!(username = %session.username, role = %session.role, "session opened");
        state.session = Some(session.clone());
        Ok(session)
    }

    /// Closes the current session, if any.
    ///
    /// Logging out with no session open is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the session slot cannot be cleared.
    pub fn logout<S: Store + ?Sized>(
        state: &mut DashboardState,
        store: &mut S,
    ) -> Result<(), AuthError> {
        clear_session(store)?;
        if let Some(session) = state.session.take() {
            info!(username = %session.username, "session closed");
        }
        Ok(())
    }
}
