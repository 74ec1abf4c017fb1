// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-by-field productivity sums for the summary cards.
//!
//! Two independent projections over the same collection: battalion-wide
//! totals ignore the city selection; selection totals honor it. Both are
//! restricted to a single chosen year.

use crate::types::ProductivityRecord;
use serde::{Deserialize, Serialize};

/// Field-by-field sums over a set of productivity records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityTotals {
    /// Boletins de atendimento.
    pub ba: u64,
    /// Comunicações de ocorrência policial.
    pub cop: u64,
    /// Termos circunstanciados.
    pub tc: u64,
    /// Fugitives recaptured.
    pub fugitives: u64,
    /// Vehicles inspected.
    pub vehicles_inspected: u64,
    /// People approached.
    pub people_approached: u64,
    /// Drugs seized, kilograms.
    pub drugs_kg: f64,
    /// Weapons seized.
    pub weapons: u64,
    /// Arrests made.
    pub arrests: u64,
}

fn sum<'a, I>(records: I) -> ProductivityTotals
where
    I: Iterator<Item = &'a ProductivityRecord>,
{
    let mut totals: ProductivityTotals = ProductivityTotals::default();
    for record in records {
        totals.ba = totals.ba.saturating_add(u64::from(record.ba));
        totals.cop = totals.cop.saturating_add(u64::from(record.cop));
        totals.tc = totals.tc.saturating_add(u64::from(record.tc));
        totals.fugitives = totals.fugitives.saturating_add(u64::from(record.fugitives));
        totals.vehicles_inspected = totals
            .vehicles_inspected
            .saturating_add(u64::from(record.vehicles_inspected));
        totals.people_approached = totals
            .people_approached
            .saturating_add(u64::from(record.people_approached));
        totals.drugs_kg += record.drugs_kg;
        totals.weapons = totals.weapons.saturating_add(u64::from(record.weapons));
        totals.arrests = totals.arrests.saturating_add(u64::from(record.arrests));
    }
    totals
}

/// Battalion-wide totals for a year, regardless of any city selection.
#[must_use]
pub fn battalion_totals(records: &[ProductivityRecord], year: u16) -> ProductivityTotals {
    sum(records.iter().filter(|record| record.year == year))
}

/// Totals restricted to the selected cities for a year.
#[must_use]
pub fn selection_totals(
    records: &[ProductivityRecord],
    selected_cities: &[String],
    year: u16,
) -> ProductivityTotals {
    sum(records.iter().filter(|record| {
        record.year == year && selected_cities.iter().any(|city| *city == record.city)
    }))
}
