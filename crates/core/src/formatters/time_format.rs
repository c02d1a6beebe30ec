use std::fmt::Display;

use chrono::{Local, TimeZone};

use super::finite;

/// 24-hour wall-clock pattern used for tape timestamps.
pub const TIME_PATTERN: &str = "%H:%M:%S";

/// Renders an epoch-millisecond value as local `HH:MM:SS`.
///
/// Unlike the numeric formatters, `0` means "no timestamp" and renders empty.
pub fn format_timestamp(value: Option<f64>) -> String {
    format_timestamp_in(value, &Local)
}

/// Same as [`format_timestamp`] with an explicit time zone.
pub fn format_timestamp_in<Tz>(value: Option<f64>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(millis) = finite(value) else {
        return String::new();
    };
    if millis == 0.0 {
        return String::new();
    }
    match tz.timestamp_millis_opt(millis.trunc() as i64).single() {
        Some(instant) => instant.format(TIME_PATTERN).to_string(),
        None => String::new(),
    }
}
