// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the SIOP dashboard collections.
//!
//! The durable layout is deliberately simple: four logical keys
//! (`users_list`, `current_user`, `infractions`, `productivity`), each
//! holding one JSON-encoded document. There is no cross-key atomicity and
//! no locking; the system assumes exactly one active operator session, and
//! the last write wins.
//!
//! The [`Store`] trait is the injection seam: callers hold a store
//! reference, never a singleton, so every consumer can run against the
//! in-memory backend in tests.
//!
//! ## Backends
//!
//! - [`FileStore`] - the durable backend, one `<key>.json` file per logical
//!   key under a data directory.
//! - [`MemoryStore`] - in-memory map for tests and ephemeral runs.

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

mod error;
mod file;
mod memory;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{
    Store, StoreKey, clear_session, load_collection, load_session, save_collection, save_session,
};
