// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Table projection and filter enumeration helpers.

use crate::period::Period;
use crate::types::MunicipalRecord;

/// Restricts a collection to records in the selected municipalities.
///
/// The caller guarantees the selection contains at least one city; this
/// function simply applies it.
#[must_use]
pub fn filter_by_cities<'a, R: MunicipalRecord>(
    records: &'a [R],
    selected_cities: &[String],
) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| selected_cities.iter().any(|city| city == record.city()))
        .collect()
}

/// The distinct years present in the collection, most recent first.
#[must_use]
pub fn available_years<R: MunicipalRecord>(records: &[R]) -> Vec<u16> {
    let mut years: Vec<u16> = records.iter().map(|record| record.period().year).collect();
    years.sort_unstable_by_key(|year| std::cmp::Reverse(*year));
    years.dedup();
    years
}

/// The distinct reporting periods present in the collection, most recent
/// first by period key.
#[must_use]
pub fn available_periods<R: MunicipalRecord>(records: &[R]) -> Vec<Period> {
    let mut periods: Vec<Period> = records.iter().map(MunicipalRecord::period).collect();
    periods.sort_by_key(|period| std::cmp::Reverse(period.sort_key()));
    periods.dedup();
    periods
}

/// The table projection: city selection, optional year restriction, and a
/// case-insensitive substring search on the municipality name, sorted
/// descending by period key (most recent first).
///
/// The sort is stable, so records sharing a period keep their input order.
/// An empty input collection produces an empty projection.
#[must_use]
pub fn table_rows<'a, R: MunicipalRecord>(
    records: &'a [R],
    selected_cities: &[String],
    year: Option<u16>,
    search: &str,
) -> Vec<&'a R> {
    let needle: String = search.to_lowercase();
    let mut rows: Vec<&R> = records
        .iter()
        .filter(|record| selected_cities.iter().any(|city| city == record.city()))
        .filter(|record| year.is_none_or(|y| record.period().year == y))
        .filter(|record| record.city().to_lowercase().contains(&needle))
        .collect();
    rows.sort_by_key(|record| std::cmp::Reverse(record.period().sort_key()));
    rows
}
