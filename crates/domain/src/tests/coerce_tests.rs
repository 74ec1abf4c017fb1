// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::coerce::{coerce_count, coerce_quantity};

#[test]
fn test_count_parses_plain_integers() {
    assert_eq!(coerce_count("0"), 0);
    assert_eq!(coerce_count("17"), 17);
    assert_eq!(coerce_count(" 42 "), 42);
}

#[test]
fn test_count_blank_input_is_zero() {
    assert_eq!(coerce_count(""), 0);
    assert_eq!(coerce_count("   "), 0);
}

#[test]
fn test_count_unparsable_input_is_zero() {
    assert_eq!(coerce_count("abc"), 0);
    assert_eq!(coerce_count("12x"), 0);
    assert_eq!(coerce_count("--3"), 0);
}

#[test]
fn test_count_negative_input_is_zero() {
    assert_eq!(coerce_count("-5"), 0);
    assert_eq!(coerce_count("-0.1"), 0);
}

#[test]
fn test_count_fractional_input_truncates() {
    assert_eq!(coerce_count("3.9"), 3);
    assert_eq!(coerce_count("0.4"), 0);
}

#[test]
fn test_count_non_finite_input_is_zero() {
    assert_eq!(coerce_count("NaN"), 0);
    assert_eq!(coerce_count("inf"), 0);
}

#[test]
fn test_count_huge_input_clamps() {
    assert_eq!(coerce_count("99999999999999999999"), u32::MAX);
}

#[test]
fn test_quantity_parses_decimals() {
    let parsed: f64 = coerce_quantity("1.5");
    assert!((parsed - 1.5).abs() < f64::EPSILON);
}

#[test]
fn test_quantity_blank_and_negative_are_zero() {
    assert!(coerce_quantity("").abs() < f64::EPSILON);
    assert!(coerce_quantity("-2.5").abs() < f64::EPSILON);
    assert!(coerce_quantity("kg").abs() < f64::EPSILON);
}
