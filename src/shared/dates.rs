/**
 * Calendar Date and Clock Time Helpers
 *
 * Every dated record (tasks, expenses, moods, budgets) keys its day with a
 * `YYYY-MM-DD` string. Task start/end times are `HH:MM` strings.
 */

use chrono::NaiveDate;

use crate::shared::error::SharedError;

/// Wire format for calendar days
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// Only the canonical spelling is accepted: `2024-3-1` and `+2024-03-01`
/// name a real day but are rejected, so equal days always compare equal as
/// strings.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| format_date(*date) == value)
}

/// Format a calendar date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Check that `value` is a well-formed `YYYY-MM-DD` date
pub fn validate_date(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::required(field));
    }
    parse_date(value)
        .map(|_| ())
        .ok_or_else(|| SharedError::validation(field, format!("{} must be formatted as YYYY-MM-DD", field)))
}

/// Convert an `HH:MM` clock time into minutes since midnight.
///
/// Anything that is not two colon-separated integers yields 0, as does a
/// total too large for `u32`.
pub fn time_to_minutes(time: &str) -> u32 {
    let Some((hours, minutes)) = time.split_once(':') else {
        return 0;
    };
    match (hours.trim().parse::<u32>(), minutes.trim().parse::<u32>()) {
        (Ok(h), Ok(m)) => h.checked_mul(60).and_then(|h| h.checked_add(m)).unwrap_or(0),
        _ => 0,
    }
}

/// Convert minutes since midnight into a zero-padded `HH:MM` string
pub fn minutes_to_time(total_minutes: u32) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
