// src/dashboard/format.rs

use chrono::NaiveDateTime;

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a number the en-US way: thousands separators and at most three
/// fraction digits, trailing zeros dropped (`1234567.5` -> `1,234,567.5`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// `"1234567"` -> `"1,234,567"`. Expects ASCII digits only.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_currency(value: f64) -> String {
    format!("${}", format_number(value))
}

/// Counts print without a fraction when they are whole (`3.0` -> `3`, `2.5` -> `2.5`).
pub fn format_count(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Short en-US date, `M/D/YYYY`.
pub fn format_date(value: &NaiveDateTime) -> String {
    value.format("%-m/%-d/%Y").to_string()
}
