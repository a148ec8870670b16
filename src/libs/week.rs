//! Week-key helpers: Monday normalization and the wire date format.
//!
//! A timesheet is keyed by (user, Monday-of-week). Clients send and receive
//! week dates as `DD/MM/YYYY`, but any day of the week is accepted on input
//! and snapped to its Monday before it reaches the store, so the
//! (user, week_start) uniqueness constraint always bites on the same key.
//! Internally dates are kept as `chrono::NaiveDate` and persisted as ISO
//! `YYYY-MM-DD`, which keeps `ORDER BY week_start DESC` chronological.

use chrono::{Datelike, Duration, NaiveDate};

/// Fixed day slot names, in storage and display order.
pub const DAY_NAMES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Date format used on the wire and in day entry date fields.
pub const WIRE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Snaps a date to the Monday of its week.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Parses a `DD/MM/YYYY` wire date and normalizes it to a Monday.
///
/// Returns `None` for malformed input; callers surface that as a
/// validation error rather than a server fault.
pub fn parse_week_start(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), WIRE_DATE_FORMAT).ok().map(monday_of)
}

/// Formats a date in the `DD/MM/YYYY` wire format.
pub fn format_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// Calendar date of the `index`-th day slot (0 = mon .. 6 = sun).
pub fn day_date(week_start: NaiveDate, index: usize) -> NaiveDate {
    week_start + Duration::days(index as i64)
}
