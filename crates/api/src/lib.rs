// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session and authorization layer for the SIOP dashboard.
//!
//! Sits between the operator-facing surface and the core: login and logout
//! maintain the single session slot, and the capability gate decides which
//! mutations the current session may perform. Authorization lives here and
//! only here; the core mutators trust their callers.

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

mod auth;
mod capabilities;
mod error;

#[cfg(test)]
mod tests;

pub use auth::AuthenticationService;
pub use capabilities::{Capabilities, can_mutate, compute_capabilities, require_mutation};
pub use error::AuthError;
