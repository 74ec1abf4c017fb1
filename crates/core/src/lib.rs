// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Core state and mutation layer for the SIOP battalion statistics system.
//!
//! The [`DashboardState`] is an in-memory cache of the three persisted
//! collections plus the current-session slot. Every mutator here follows
//! the same discipline: validate, transform the cache, persist the touched
//! collection synchronously. The store owns the durable copies; a mutation
//! is complete only once the write-through has succeeded.
//!
//! Authorization is deliberately absent from this crate: the model trusts
//! its caller, and the capability gate lives at the API boundary.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod backup;
mod error;
mod records;
mod state;

#[cfg(test)]
mod tests;

pub use backup::{
    BACKUP_ORIGIN, BACKUP_VERSION, BackupDocument, BackupPayload, apply_import, export,
    export_json, parse_import,
};
pub use error::{CoreError, ImportError};
pub use records::{
    InfractionDraft, ProductivityDraft, create_infraction, create_productivity, create_user,
    delete_infraction, delete_productivity, delete_user, update_infraction, update_productivity,
};
pub use state::{DashboardState, default_users};
