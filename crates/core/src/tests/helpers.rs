// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::records::{InfractionDraft, ProductivityDraft};
use crate::state::DashboardState;
use siop_persistence::MemoryStore;

/// A fresh in-memory store plus the state loaded from it, defaults seeded.
pub fn fresh_dashboard() -> (DashboardState, MemoryStore) {
    let mut store: MemoryStore = MemoryStore::new();
    let state: DashboardState =
        DashboardState::load(&mut store).expect("loading an empty store succeeds");
    (state, store)
}

/// An infraction draft with the four raw counts given verbatim.
pub fn infraction_draft(
    city: &str,
    month: u8,
    year: u16,
    counts: (&str, &str, &str, &str),
) -> InfractionDraft {
    InfractionDraft {
        city: city.to_string(),
        month,
        year,
        cars: counts.0.to_string(),
        motorcycles: counts.1.to_string(),
        trucks: counts.2.to_string(),
        others: counts.3.to_string(),
    }
}

/// A productivity draft with modest, distinct values per field.
pub fn productivity_draft(city: &str, month: u8, year: u16) -> ProductivityDraft {
    ProductivityDraft {
        city: city.to_string(),
        month,
        year,
        ba: String::from("4"),
        cop: String::from("3"),
        tc: String::from("2"),
        fugitives: String::from("1"),
        vehicles_inspected: String::from("40"),
        people_approached: String::from("25"),
        drugs_kg: String::from("0.5"),
        weapons: String::from("1"),
        arrests: String::from("2"),
    }
}
