//! Number and date formatting in the style of the `ar-EG` locale.
//!
//! The panel is right-to-left Arabic, so prices and dates are rendered with
//! Arabic-Indic digits and the Arabic thousands/decimal separators.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Label used wherever an optional value is missing.
pub const NOT_SPECIFIED: &str = "غير محدد";

const THOUSANDS_SEPARATOR: char = '\u{066C}';
const DECIMAL_SEPARATOR: char = '\u{066B}';
const MAX_FRACTION_DIGITS: u32 = 3;

/// Timestamp layouts the backend has been seen to emit.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Replace ASCII digits with Arabic-Indic digits, leaving everything else.
#[must_use]
pub fn to_arabic_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(0x0660 + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Format a decimal like `Intl.NumberFormat('ar-EG')`.
///
/// Rounds half away from zero to three fraction digits, trims trailing
/// zeros and groups the integer part by thousands.
#[must_use]
pub fn format_decimal_ar(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    to_arabic_digits(&out)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// Parse a backend timestamp into a calendar date.
#[must_use]
pub fn parse_backend_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Format a backend timestamp like `toLocaleDateString('ar-EG')`.
///
/// Missing or blank input shows [`NOT_SPECIFIED`]; input that cannot be
/// parsed is shown as received.
#[must_use]
pub fn format_date_ar(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return NOT_SPECIFIED.to_owned();
    };
    parse_backend_date(raw).map_or_else(
        || raw.to_owned(),
        |date| to_arabic_digits(&format!("{}/{}/{}", date.day(), date.month(), date.year())),
    )
}
