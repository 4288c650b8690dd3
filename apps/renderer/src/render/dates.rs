//! Date labels for the rendered document.
//!
//! Inputs come straight from the form and are not trusted: anything that is
//! not a well-formed date is echoed back unchanged instead of failing.

use chrono::{Datelike, NaiveDate};

/// Label used for an open-ended range.
pub const PRESENT: &str = "Present";

const RANGE_SEPARATOR: &str = " – ";

/// Formats a `YYYY-MM` value as `"<Month> <Year>"`, e.g. `"March 2021"`.
///
/// Empty input yields an empty string; malformed input is returned raw.
pub fn format_month(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    match parse_year_month(value) {
        Some(date) => date.format("%B %Y").to_string(),
        None => value.to_string(),
    }
}

/// Date range for a job. Always present: an empty end date means the
/// position is current.
pub fn experience_range(start: &str, end: &str) -> String {
    let end = if end.trim().is_empty() {
        PRESENT.to_string()
    } else {
        format_month(end)
    };
    let start = format_month(start);
    if start.is_empty() {
        format!("{}{}", RANGE_SEPARATOR.trim_start(), end)
    } else {
        format!("{start}{RANGE_SEPARATOR}{end}")
    }
}

/// Date range for a degree. `None` when neither date is set; a missing
/// start date drops the leading fragment, a missing graduation date reads
/// "Present".
pub fn education_range(start: &str, graduation: &str) -> Option<String> {
    let start = format_month(start);
    let graduation = format_month(graduation);
    match (start.is_empty(), graduation.is_empty()) {
        (true, true) => None,
        (true, false) => Some(graduation),
        (false, true) => Some(format!("{start}{RANGE_SEPARATOR}{PRESENT}")),
        (false, false) => Some(format!("{start}{RANGE_SEPARATOR}{graduation}")),
    }
}

/// Formats a date of birth in US short form (`M/D/YYYY`).
///
/// Accepts `YYYY-MM-DD`; a bare `YYYY-MM` is formatted as a month label.
pub fn format_birth_date(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        Err(_) => format_month(value),
    }
}

/// Parses a strict `YYYY-MM` value as the first day of that month.
pub(crate) fn parse_year_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}
