// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{ProductivityRecord, TrafficInfraction};

pub fn infraction(
    id: &str,
    city: &str,
    month: u8,
    year: u16,
    counts: (u32, u32, u32, u32),
) -> TrafficInfraction {
    let (cars, motorcycles, trucks, others) = counts;
    let mut record = TrafficInfraction {
        id: id.to_string(),
        city: city.to_string(),
        month,
        year,
        cars,
        motorcycles,
        trucks,
        others,
        total: 0,
        timestamp: 1_700_000_000_000,
    };
    record.recompute_total();
    record
}

pub fn productivity(id: &str, city: &str, month: u8, year: u16) -> ProductivityRecord {
    ProductivityRecord {
        id: id.to_string(),
        city: city.to_string(),
        month,
        year,
        ba: 4,
        cop: 3,
        tc: 2,
        fugitives: 1,
        vehicles_inspected: 40,
        people_approached: 25,
        drugs_kg: 0.5,
        weapons: 1,
        arrests: 2,
        timestamp: 1_700_000_000_000,
    }
}
