// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod city;
mod coerce;
mod error;
mod period;
mod snapshot;
mod table;
mod totals;
mod trend;
mod types;

#[cfg(test)]
mod tests;

pub use city::{MUNICIPALITIES, is_known_city, validate_city};
pub use coerce::{coerce_count, coerce_quantity};
pub use error::DomainError;
pub use period::{MONTH_NAMES, Period, validate_month};
pub use snapshot::{CitySnapshot, latest_period, snapshot_for_period};
pub use table::{available_periods, available_years, filter_by_cities, table_rows};
pub use totals::{ProductivityTotals, battalion_totals, selection_totals};
pub use trend::{CityTotal, TrendPoint, time_series};
pub use types::{MunicipalRecord, ProductivityRecord, Role, Session, TrafficInfraction, User};
