//! Tests for the cell formatters.

use chrono::{Local, TimeZone, Utc};
use proptest::prelude::*;
use serde_json::json;

use super::*;

// ==================== Absent / Invalid Input ====================

#[test]
fn test_absent_and_nan_render_empty() {
    for value in [None, Some(f64::NAN), Some(f64::INFINITY), Some(f64::NEG_INFINITY)] {
        assert_eq!(format_number_default(value), "");
        assert_eq!(format_integer(value), "");
        assert_eq!(format_bps(value), "");
        assert_eq!(format_currency(value), "");
        assert_eq!(format_timestamp(value), "");
    }
}

#[test]
fn test_zero_is_a_real_value_except_for_timestamps() {
    assert_eq!(format_number_default(Some(0.0)), "0.00");
    assert_eq!(format_integer(Some(0.0)), "0");
    assert_eq!(format_bps(Some(0.0)), "0.00");
    assert_eq!(format_currency(Some(0.0)), "$0");
    assert_eq!(format_timestamp(Some(0.0)), "");
}

// ==================== Plain Numbers ====================

#[test]
fn test_number_default_two_decimals() {
    assert_eq!(format_number_default(Some(1234.5)), "1,234.50");
    assert_eq!(format_number_default(Some(-98765.432)), "-98,765.43");
    assert_eq!(format_number_default(Some(0.125)), "0.13");
}

#[test]
fn test_number_custom_decimals() {
    assert_eq!(format_number(Some(99.5), 0), "100");
    assert_eq!(format_number(Some(1.23456), 4), "1.2346");
    assert_eq!(format_number(Some(1_000_000.0), 1), "1,000,000.0");
}

#[test]
fn test_number_with_locale() {
    let locale = NumberLocale {
        group_separator: '.',
        decimal_separator: ',',
    };
    assert_eq!(format_number_with_locale(Some(1234567.891), 2, &locale), "1.234.567,89");
}

// ==================== Integers ====================

#[test]
fn test_integer_grouping_and_rounding() {
    assert_eq!(format_integer(Some(1234.9)), "1,235");
    assert_eq!(format_integer(Some(1234.4)), "1,234");
    assert_eq!(format_integer(Some(2.5)), "3");
    assert_eq!(format_integer(Some(-2.5)), "-3");
    assert_eq!(format_integer(Some(-1_500_000.0)), "-1,500,000");
}

// ==================== Basis Points ====================

#[test]
fn test_bps_sign_rules() {
    assert_eq!(format_bps(Some(1.5)), "+1.50");
    assert_eq!(format_bps(Some(-1.5)), "-1.50");
    assert_eq!(format_bps(Some(0.0)), "0.00");
    assert_eq!(format_bps(Some(12.345)), "+12.35");
}

#[test]
fn test_bps_tiny_negative_rounds_to_unsigned_zero() {
    assert_eq!(format_bps(Some(-0.001)), "0.00");
}

// ==================== Currency ====================

#[test]
fn test_currency() {
    assert_eq!(format_currency(Some(1234567.0)), "$1,234,567");
    assert_eq!(format_currency(Some(999.5)), "$1,000");
    assert_eq!(format_currency(Some(-4200.0)), "-$4,200");
}

// ==================== Timestamps ====================

#[test]
fn test_timestamp_local_wall_clock() {
    let instant = Local
        .with_ymd_and_hms(2024, 3, 1, 14, 5, 9)
        .single()
        .expect("unambiguous local time");
    let millis = instant.timestamp_millis() as f64;
    assert_eq!(format_timestamp(Some(millis)), "14:05:09");
}

#[test]
fn test_timestamp_in_explicit_zone() {
    let millis = Utc
        .with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
        .unwrap()
        .timestamp_millis() as f64;
    assert_eq!(format_timestamp_in(Some(millis + 999.0), &Utc), "09:30:00");
}

// ==================== Cell Extraction ====================

#[test]
fn test_numeric_value_extraction() {
    assert_eq!(numeric_value(&json!(12.5)), Some(12.5));
    assert_eq!(numeric_value(&json!(" 42 ")), Some(42.0));
    assert_eq!(numeric_value(&json!("")), None);
    assert_eq!(numeric_value(&json!("n/a")), None);
    assert_eq!(numeric_value(&json!(null)), None);
    assert_eq!(numeric_value(&json!(true)), None);
    assert_eq!(numeric_value(&json!([1, 2])), None);
}

// ==================== Properties ====================

proptest! {
    #[test]
    fn prop_numeric_formatters_never_empty_for_finite(v in -1.0e12f64..1.0e12f64) {
        prop_assert!(!format_number_default(Some(v)).is_empty());
        prop_assert!(!format_integer(Some(v)).is_empty());
        prop_assert!(!format_bps(Some(v)).is_empty());
        prop_assert!(!format_currency(Some(v)).is_empty());
    }

    #[test]
    fn prop_bps_plus_sign_only_for_positive(v in -1.0e6f64..1.0e6f64) {
        let rendered = format_bps(Some(v));
        prop_assert_eq!(rendered.starts_with('+'), v > 0.0);
    }

    #[test]
    fn prop_number_has_requested_fraction_width(v in -1.0e9f64..1.0e9f64, decimals in 0u32..6) {
        let rendered = format_number(Some(v), decimals);
        let fraction = rendered.split('.').nth(1).unwrap_or("");
        prop_assert_eq!(fraction.len(), decimals as usize);
    }
}
