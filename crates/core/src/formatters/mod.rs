//! Display formatters for grid cells.
//!
//! Every formatter is total: absent input (`None`) and invalid input
//! (NaN, infinities, unparseable strings) render as the empty string.
//! Callers cannot tell "absent" from "invalid" by the output alone.

mod number_format;
mod time_format;

pub use number_format::*;
pub use time_format::*;

use serde_json::Value;

/// Extracts a numeric value from a row cell.
///
/// Numbers and numeric strings are accepted. Null, booleans, empty strings,
/// arrays and objects yield `None`.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}

/// Drops NaN and infinities.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod formatters_tests;
