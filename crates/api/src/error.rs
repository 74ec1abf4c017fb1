// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the session layer.

use siop_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The username/password pair matched no account.
    ///
    /// Deliberately does not say which half was wrong.
    InvalidCredentials,
    /// No session, or the session's role does not permit the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
    },
    /// The session slot could not be read or written.
    Persistence(PersistenceError),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "Invalid username or password"),
            Self::Unauthorized { action } => {
                write!(f, "Unauthorized: '{action}' requires the ADMIN role")
            }
            Self::Persistence(err) => write!(f, "Session persistence failed: {err}"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersistenceError> for AuthError {
    fn from(err: PersistenceError) -> Self {
        Self::Persistence(err)
    }
}
