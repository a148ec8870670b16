//! Clock-time arithmetic for day and week totals.
//!
//! Converts `HH:MM` clock strings to minute counts, subtracts break
//! durations, and formats totals back into `H:MM` strings. These functions
//! are deliberately lenient: an empty or malformed clock time counts as
//! zero minutes rather than raising an error, because a missing clock-in or
//! clock-out simply means "no hours worked", and an inverted start/finish
//! pair (or a break longer than the day) clamps to zero instead of going
//! negative.
//!
//! ## Format
//!
//! Totals use the `H:MM` shape: the hour component is not zero-padded, the
//! minute component always is. `125` minutes formats as `"2:05"`, a negative
//! count as `"0:00"`.
//!
//! The same arithmetic runs on the browser side of the original client;
//! the server keeps these functions to fill in totals that a save request
//! leaves blank and to back the `weeks` terminal view.

/// Parses an `HH:MM` clock string into minutes since midnight.
///
/// Empty or malformed input yields `0`. This is a policy, not an accident:
/// an absent clock time is treated as "no hours", never as an error.
pub fn time_to_minutes(time: &str) -> i64 {
    let mut parts = time.splitn(2, ':');
    let hours = parts.next().and_then(|h| h.trim().parse::<i64>().ok());
    let minutes = parts.next().and_then(|m| m.trim().parse::<i64>().ok());
    match (hours, minutes) {
        (Some(hours), Some(minutes)) => hours * 60 + minutes,
        _ => 0,
    }
}

/// Formats a minute count as an `H:MM` duration string.
///
/// Negative input clamps to the literal `"0:00"`. The hour component is not
/// zero-padded so a forty-hour week reads `"40:00"` and a free Saturday
/// reads `"0:00"`.
pub fn minutes_to_time(minutes: i64) -> String {
    if minutes < 0 {
        return "0:00".to_string();
    }
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Computes one day's total as `finish - start - break`, formatted `H:MM`.
///
/// Returns `"0:00"` when either clock time is empty, regardless of the
/// break fields. A negative result (inverted times, oversized break) is
/// silently clamped to zero.
pub fn day_total(start: &str, finish: &str, break_hours: i64, break_minutes: i64) -> String {
    if start.is_empty() || finish.is_empty() {
        return "0:00".to_string();
    }

    let total = time_to_minutes(finish) - time_to_minutes(start) - (break_hours * 60 + break_minutes);
    minutes_to_time(total.max(0))
}

/// Sums a set of `H:MM` day totals into a weekly `H:MM` total.
pub fn weekly_total<S: AsRef<str>>(day_totals: &[S]) -> String {
    let minutes = day_totals.iter().map(|total| time_to_minutes(total.as_ref())).sum();
    minutes_to_time(minutes)
}
