// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Month labels, indexed by the zero-based month number.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// One reporting month: a `(month, year)` pair.
///
/// Chronological order is defined by [`Period::sort_key`]; there is no
/// secondary ordering, so projections that sort by period are stable with
/// respect to input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// The reporting year.
    pub year: u16,
    /// Zero-based month (0 = Janeiro).
    pub month: u8,
}

impl Period {
    /// Creates a period. The month is taken as-is; use
    /// [`validate_month`] at input boundaries.
    #[must_use]
    pub const fn new(year: u16, month: u8) -> Self {
        Self { year, month }
    }

    /// Canonical sortable key: `year * 12 + month`.
    #[must_use]
    pub fn sort_key(&self) -> u32 {
        u32::from(self.year) * 12 + u32::from(self.month)
    }

    /// Compact chart label, e.g. `Jan/24`.
    #[must_use]
    pub fn short_label(&self) -> String {
        let name: &str = MONTH_NAMES
            .get(usize::from(self.month))
            .copied()
            .map_or("???", |m| m.get(..3).unwrap_or(m));
        format!("{name}/{:02}", self.year % 100)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &str = MONTH_NAMES
            .get(usize::from(self.month))
            .copied()
            .unwrap_or("?");
        write!(f, "{name} de {}", self.year)
    }
}

/// Validates a zero-based month number.
///
/// # Errors
///
/// Returns `DomainError::InvalidMonth` if the month is not in `0..=11`.
pub const fn validate_month(month: u8) -> Result<(), DomainError> {
    if month <= 11 {
        Ok(())
    } else {
        Err(DomainError::InvalidMonth(month))
    }
}
