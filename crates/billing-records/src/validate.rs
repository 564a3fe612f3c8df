//! Shared field validation rules.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Dates are stored as ISO `YYYY-MM-DD` text.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Non-empty text of bounded length.
pub(crate) fn bounded_text(value: &str, max_len: usize) -> bool {
    !value.is_empty() && value.chars().count() <= max_len
}

/// Possibly-empty text of bounded length.
pub(crate) fn optional_text(value: &str, max_len: usize) -> bool {
    value.chars().count() <= max_len
}

/// One or more addresses separated by `;` or `,`, each individually valid.
pub(crate) fn email_list(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    value.split([';', ',']).all(|part| {
        let part = part.trim();
        !part.is_empty() && EMAIL_RE.is_match(part)
    })
}

/// A statement schedule is exactly `"D,D"` where each side is a schedule
/// day `1..=7`.
pub(crate) fn statement_schedule(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 3 && bytes[1] == b',' && is_schedule_day(bytes[0]) && is_schedule_day(bytes[2])
}

fn is_schedule_day(byte: u8) -> bool {
    (b'1'..=b'7').contains(&byte)
}

/// A quantity renders to at most 9 characters.
pub(crate) fn quantity(value: i64) -> bool {
    value.to_string().len() <= 9
}

/// An amount renders to at most 15 characters at 2 decimals.
pub(crate) fn amount(value: f64) -> bool {
    value.is_finite() && format!("{value:.2}").len() <= 15
}

/// A record id is a positive integer.
pub(crate) fn record_id(value: i64) -> bool {
    value > 0
}

/// A boolean-like column accepts only 0 or 1.
pub(crate) fn flag(value: i64) -> bool {
    value == 0 || value == 1
}

/// An ISO calendar date.
pub(crate) fn date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}
