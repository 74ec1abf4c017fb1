// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
///
/// Failures are surfaced to the caller and never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The backing storage rejected a write (quota, permissions, IO).
    WriteFailed {
        /// The logical key being written.
        key: &'static str,
        /// The underlying error message.
        message: String,
    },
    /// The backing storage could not be read.
    ReadFailed {
        /// The logical key being read.
        key: &'static str,
        /// The underlying error message.
        message: String,
    },
    /// A stored value could not be encoded or decoded.
    Serialization {
        /// The logical key involved.
        key: &'static str,
        /// The underlying error message.
        message: String,
    },
    /// The store could not be opened.
    Initialization(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WriteFailed { key, message } => {
                write!(f, "Write to '{key}' failed: {message}")
            }
            Self::ReadFailed { key, message } => {
                write!(f, "Read of '{key}' failed: {message}")
            }
            Self::Serialization { key, message } => {
                write!(f, "Serialization error for '{key}': {message}")
            }
            Self::Initialization(msg) => write!(f, "Initialization error: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}
