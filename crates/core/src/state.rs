// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use siop_domain::{ProductivityRecord, Role, Session, TrafficInfraction, User};
use siop_persistence::{Store, StoreKey, load_collection, load_session, save_collection};
use tracing::info;

/// In-memory cache of the persisted collections plus the session slot.
///
/// The store exclusively owns the durable copies; this cache is the source
/// of truth for rendering and is written back synchronously on every
/// mutation. There is no deferred or batched persistence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    /// The account list.
    pub users: Vec<User>,
    /// The traffic-infraction collection.
    pub infractions: Vec<TrafficInfraction>,
    /// The productivity collection.
    pub productivity: Vec<ProductivityRecord>,
    /// The currently authenticated session, if any.
    pub session: Option<Session>,
}

impl DashboardState {
    /// Creates an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: Vec::new(),
            infractions: Vec::new(),
            productivity: Vec::new(),
            session: None,
        }
    }

    /// Loads every collection from the store, seeding the default accounts
    /// when the user list has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or a stored value does
    /// not decode.
    pub fn load<S: Store + ?Sized>(store: &mut S) -> Result<Self, CoreError> {
        let users: Vec<User> = bootstrap_users(store)?;
        let infractions: Vec<TrafficInfraction> =
            load_collection(store, StoreKey::Infractions)?;
        let productivity: Vec<ProductivityRecord> =
            load_collection(store, StoreKey::Productivity)?;
        let session: Option<Session> = load_session(store)?;
        Ok(Self {
            users,
            infractions,
            productivity,
            session,
        })
    }

    /// Clears every persisted key and empties the cache. The next load
    /// re-seeds the default accounts (factory reset).
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects a removal.
    pub fn reset<S: Store + ?Sized>(&mut self, store: &mut S) -> Result<(), CoreError> {
        store.clear()?;
        *self = Self::new();
        info!("store cleared, state reset to factory defaults");
        Ok(())
    }
}

/// First-run seeding: runs only when the `users_list` key is absent.
///
/// An explicitly stored empty list is respected and not re-seeded; only a
/// never-written store gets the factory accounts.
fn bootstrap_users<S: Store + ?Sized>(store: &mut S) -> Result<Vec<User>, CoreError> {
    if store.read(StoreKey::Users)?.is_some() {
        return Ok(load_collection(store, StoreKey::Users)?);
    }

    let seeded: Vec<User> = default_users();
    save_collection(store, StoreKey::Users, &seeded)?;
    info!("user list absent, seeded {} default accounts", seeded.len());
    Ok(seeded)
}

/// The two factory accounts: one ADMIN and one COMANDO.
///
/// These exist so a fresh (or fully reset) installation is always
/// recoverable without any out-of-band provisioning.
#[must_use]
pub fn default_users() -> Vec<User> {
    vec![
        User::new(String::from("1"), "admin", Role::Admin, "Ten Cel", "22"),
        User::new(String::from("2"), "comando", Role::Comando, "Maj", "22"),
    ]
}
