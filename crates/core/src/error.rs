// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use siop_domain::DomainError;
use siop_persistence::PersistenceError;

/// Errors that can occur during core state mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The store rejected a read or write.
    Persistence(PersistenceError),
    /// No record with the given id exists in the collection.
    RecordNotFound {
        /// The id that was looked up.
        id: String,
    },
    /// No account with the given id exists.
    UserNotFound {
        /// The id that was looked up.
        id: String,
    },
    /// A backup document could not be produced.
    ExportFailed(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Persistence(err) => write!(f, "Persistence failure: {err}"),
            Self::RecordNotFound { id } => write!(f, "Record not found: {id}"),
            Self::UserNotFound { id } => write!(f, "Account not found: {id}"),
            Self::ExportFailed(msg) => write!(f, "Export failed: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<PersistenceError> for CoreError {
    fn from(err: PersistenceError) -> Self {
        Self::Persistence(err)
    }
}

/// Errors raised while decoding an uploaded backup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The payload is not parsable JSON, or a collection has the wrong
    /// shape.
    MalformedDocument(String),
    /// The document parsed but yielded no records in any collection.
    EmptyOrInvalid,
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedDocument(msg) => write!(f, "Malformed backup document: {msg}"),
            Self::EmptyOrInvalid => {
                write!(f, "Backup document is empty or in an unrecognized format")
            }
        }
    }
}

impl std::error::Error for ImportError {}
