// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use siop_core::DashboardState;
use siop_domain::{Role, Session, User};
use siop_persistence::MemoryStore;

/// A fresh in-memory store plus the state loaded from it, defaults seeded.
pub fn fresh_dashboard() -> (DashboardState, MemoryStore) {
    let mut store: MemoryStore = MemoryStore::new();
    let state: DashboardState =
        DashboardState::load(&mut store).expect("loading an empty store succeeds");
    (state, store)
}

/// A session for an arbitrary account with the given role.
pub fn session_with_role(role: Role) -> Session {
    Session::for_user(&User::new(
        String::from("t1"),
        "tester",
        role,
        "Sd",
        "pw",
    ))
}
