use rust_decimal::prelude::*;

use super::finite;

/// Default number of fractional digits for plain numbers.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Fractional digits used by the basis-points formatter.
pub const BPS_DECIMALS: u32 = 2;

/// Grouping and decimal separators used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub group_separator: char,
    pub decimal_separator: char,
}

impl NumberLocale {
    /// US English: `1,234.56`.
    pub const EN_US: NumberLocale = NumberLocale {
        group_separator: ',',
        decimal_separator: '.',
    };
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN_US
    }
}

/// Plain number with grouping and `decimals` fractional digits.
pub fn format_number(value: Option<f64>, decimals: u32) -> String {
    format_number_with_locale(value, decimals, &NumberLocale::EN_US)
}

/// Plain number with the default two fractional digits.
pub fn format_number_default(value: Option<f64>) -> String {
    format_number(value, DEFAULT_DECIMALS)
}

pub fn format_number_with_locale(value: Option<f64>, decimals: u32, locale: &NumberLocale) -> String {
    match finite(value) {
        Some(v) => render_fixed(v, decimals, Some(locale.group_separator), locale.decimal_separator),
        None => String::new(),
    }
}

/// Integer with grouping. Halves round away from zero.
pub fn format_integer(value: Option<f64>) -> String {
    format_integer_with_locale(value, &NumberLocale::EN_US)
}

pub fn format_integer_with_locale(value: Option<f64>, locale: &NumberLocale) -> String {
    match finite(value) {
        Some(v) => render_fixed(v, 0, Some(locale.group_separator), locale.decimal_separator),
        None => String::new(),
    }
}

/// Basis-points delta: two fractional digits, `+` only for strictly positive values.
///
/// Zero renders as `0.00` without a sign.
pub fn format_bps(value: Option<f64>) -> String {
    let Some(v) = finite(value) else {
        return String::new();
    };
    let body = render_fixed(v, BPS_DECIMALS, None, '.');
    if v > 0.0 {
        format!("+{}", body)
    } else {
        body
    }
}

/// US dollar amount with grouping and no fractional digits, e.g. `$1,234,567`.
pub fn format_currency(value: Option<f64>) -> String {
    format_currency_with_locale(value, &NumberLocale::EN_US)
}

pub fn format_currency_with_locale(value: Option<f64>, locale: &NumberLocale) -> String {
    let Some(v) = finite(value) else {
        return String::new();
    };
    let body = render_fixed(v, 0, Some(locale.group_separator), locale.decimal_separator);
    match body.strip_prefix('-') {
        Some(magnitude) => format!("-${}", magnitude),
        None => format!("${}", body),
    }
}

/// Renders `value` rounded half away from zero to `decimals` digits.
///
/// Values outside the `Decimal` range fall back to float formatting.
/// A value that rounds to zero never carries a minus sign.
fn render_fixed(value: f64, decimals: u32, group: Option<char>, decimal_separator: char) -> String {
    let raw = match Decimal::from_f64(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            if rounded.is_zero() {
                Decimal::ZERO.to_string()
            } else {
                rounded.to_string()
            }
        }
        None => format!("{:.*}", decimals as usize, value),
    };

    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut out = String::with_capacity(raw.len() + raw.len() / 3 + decimals as usize + 2);
    if negative {
        out.push('-');
    }
    match group {
        Some(separator) => out.push_str(&group_digits(int_part, separator)),
        None => out.push_str(int_part),
    }
    if decimals > 0 {
        out.push(decimal_separator);
        let width = decimals as usize;
        let frac: String = frac_part.chars().take(width).collect();
        out.push_str(&frac);
        for _ in frac.len()..width {
            out.push('0');
        }
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
