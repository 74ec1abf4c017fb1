// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Latest-period category snapshot for the comparative bar chart.

use crate::period::Period;
use crate::types::{MunicipalRecord, TrafficInfraction};
use serde::{Deserialize, Serialize};

/// The category breakdown of one selected city at the snapshot period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySnapshot {
    /// The municipality name.
    pub city: String,
    /// The period this snapshot covers.
    pub period: Period,
    /// Infractions against cars.
    pub cars: u32,
    /// Infractions against motorcycles.
    pub motorcycles: u32,
    /// Infractions against trucks.
    pub trucks: u32,
    /// Infractions against other categories.
    pub others: u32,
    /// The derived total.
    pub total: u32,
}

impl CitySnapshot {
    /// All-zero placeholder for a city with no record at the period.
    #[must_use]
    const fn zeroed(city: String, period: Period) -> Self {
        Self {
            city,
            period,
            cars: 0,
            motorcycles: 0,
            trucks: 0,
            others: 0,
            total: 0,
        }
    }
}

/// The most recent reporting period present across the whole collection.
///
/// The maximum is taken over the *unfiltered* input regardless of any city
/// selection; ties on the period key resolve to the later element, which is
/// indistinguishable since equal keys denote the same period.
#[must_use]
pub fn latest_period<R: MunicipalRecord>(records: &[R]) -> Option<Period> {
    records
        .iter()
        .map(MunicipalRecord::period)
        .max_by_key(Period::sort_key)
}

/// Builds the category snapshot for the selected cities.
///
/// When `period` is `None` the globally latest period of `records` is used;
/// an explicit period bypasses the latest computation entirely. Each
/// selected city emits either its record's counts for that exact period or
/// an all-zero placeholder.
///
/// An empty input collection produces an empty snapshot, explicit period or
/// not.
#[must_use]
pub fn snapshot_for_period(
    records: &[TrafficInfraction],
    selected_cities: &[String],
    period: Option<Period>,
) -> Vec<CitySnapshot> {
    if records.is_empty() {
        return Vec::new();
    }
    let Some(target) = period.or_else(|| latest_period(records)) else {
        return Vec::new();
    };

    selected_cities
        .iter()
        .map(|city| {
            records
                .iter()
                .find(|record| record.city == *city && record.period() == target)
                .map_or_else(
                    || CitySnapshot::zeroed(city.clone(), target),
                    |record| CitySnapshot {
                        city: city.clone(),
                        period: target,
                        cars: record.cars,
                        motorcycles: record.motorcycles,
                        trucks: record.trucks,
                        others: record.others,
                        total: record.total,
                    },
                )
        })
        .collect()
}
