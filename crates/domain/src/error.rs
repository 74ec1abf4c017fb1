// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The city is not one of the covered municipalities.
    UnknownCity(String),
    /// The month is outside `0..=11`.
    InvalidMonth(u8),
    /// The role string is not a recognized role.
    InvalidRole(String),
    /// The username is empty or otherwise unusable.
    InvalidUsername(String),
    /// An account with this username already exists (case-insensitive).
    DuplicateUsername(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCity(city) => {
                write!(f, "City '{city}' is not a covered municipality")
            }
            Self::InvalidMonth(month) => {
                write!(f, "Invalid month {month}: must be between 0 and 11")
            }
            Self::InvalidRole(role) => write!(f, "Unknown role: {role}"),
            Self::InvalidUsername(msg) => write!(f, "Invalid username: {msg}"),
            Self::DuplicateUsername(username) => {
                write!(f, "An account named '{username}' already exists")
            }
        }
    }
}

impl std::error::Error for DomainError {}
