// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Permissive numeric-input policy.
//!
//! Operators may leave statistic fields blank on the entry forms. Blank,
//! unparsable, or negative input counts as zero instead of rejecting the
//! submission: bad data entry is not a system failure. This is a deliberate
//! leniency policy, named and tested here rather than left as implicit
//! casts at the call sites.

/// Coerces raw form input to a non-negative integer count.
///
/// Blank input, unparsable text, negative values, and non-finite values all
/// coerce to `0`; fractional input truncates toward zero. Values beyond the
/// `u32` range clamp to `u32::MAX`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn coerce_count(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => {
            if value >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                value as u32
            }
        }
        _ => 0,
    }
}

/// Coerces raw form input to a non-negative decimal quantity.
///
/// Used for the fields that permit fractional values (drugs seized in kg).
/// Blank, unparsable, negative, and non-finite input all coerce to `0.0`.
#[must_use]
pub fn coerce_quantity(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}
