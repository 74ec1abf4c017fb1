// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Chronological trend projection for the comparative line chart.
//!
//! Pure and deterministic: input collections in, chart-ready points out.
//! No store access, no side effects.

use crate::period::Period;
use crate::types::{MunicipalRecord, TrafficInfraction};
use serde::{Deserialize, Serialize};

/// The infraction total of one city at one plotted period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityTotal {
    /// The municipality name.
    pub city: String,
    /// The infraction total, `0` when the city has no record for the period.
    pub total: u32,
}

/// One plotted period of the trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// The reporting period.
    pub period: Period,
    /// Per selected city, in selection order, the total for this period.
    pub totals: Vec<CityTotal>,
}

/// Builds the chronological infraction series for the selected cities.
///
/// Enumerates the distinct periods present in the city-filtered (and
/// optionally year-restricted) input, ascending by period key, and emits
/// each selected city's `total` for every period. A city with no record in
/// a contributing period emits `0`, never a gap: the chart must show
/// continuous series.
///
/// An empty input collection produces an empty series.
#[must_use]
pub fn time_series(
    records: &[TrafficInfraction],
    selected_cities: &[String],
    year: Option<u16>,
) -> Vec<TrendPoint> {
    let filtered: Vec<&TrafficInfraction> = records
        .iter()
        .filter(|record| selected_cities.iter().any(|city| *city == record.city))
        .filter(|record| year.is_none_or(|y| record.year == y))
        .collect();

    let mut periods: Vec<Period> = filtered.iter().map(|record| record.period()).collect();
    periods.sort_by_key(Period::sort_key);
    periods.dedup();

    periods
        .into_iter()
        .map(|period| {
            let totals: Vec<CityTotal> = selected_cities
                .iter()
                .map(|city| {
                    let total: u32 = filtered
                        .iter()
                        .find(|record| record.city == *city && record.period() == period)
                        .map_or(0, |record| record.total);
                    CityTotal {
                        city: city.clone(),
                        total,
                    }
                })
                .collect();
            TrendPoint { period, totals }
        })
        .collect()
}
