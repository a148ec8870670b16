//! Timesheet domain types shared by the store and the HTTP layer.
//!
//! A week is exactly seven fixed day slots (`mon`..`sun`). The slots are
//! modeled as named struct fields rather than a map so a timesheet can
//! never hold a partial or duplicated week, and JSON serialization always
//! emits the slots in mon→sun order.
//!
//! Break hours and minutes travel as strings because that is what the
//! original form fields submit; they are parsed leniently (`""` counts as
//! zero) at the point of use.

use crate::libs::calc;
use serde::{Deserialize, Serialize};

/// One day slot of a week: raw inputs plus the derived total.
///
/// `start` and `finish` are `None` when the user left the field empty
/// (weekends, days off). `total` is the client-derived `H:MM` duration;
/// when a save request leaves it blank the server fills it in from the raw
/// fields, but a submitted value is stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayEntry {
    pub date: String,
    pub start: Option<String>,
    pub break_hours: String,
    pub break_minutes: String,
    pub finish: Option<String>,
    pub total: Option<String>,
}

impl DayEntry {
    pub fn break_hours_int(&self) -> i64 {
        self.break_hours.trim().parse().unwrap_or(0)
    }

    pub fn break_minutes_int(&self) -> i64 {
        self.break_minutes.trim().parse().unwrap_or(0)
    }

    /// The submitted total, or one derived from the raw fields when the
    /// client left it blank.
    pub fn total_or_derived(&self) -> String {
        match self.total.as_deref() {
            Some(total) if !total.is_empty() => total.to_string(),
            _ => calc::day_total(
                self.start.as_deref().unwrap_or(""),
                self.finish.as_deref().unwrap_or(""),
                self.break_hours_int(),
                self.break_minutes_int(),
            ),
        }
    }
}

/// The seven fixed day slots of one week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekDays {
    pub mon: DayEntry,
    pub tue: DayEntry,
    pub wed: DayEntry,
    pub thu: DayEntry,
    pub fri: DayEntry,
    pub sat: DayEntry,
    pub sun: DayEntry,
}

impl WeekDays {
    /// Slots paired with their names, in mon→sun order.
    pub fn slots(&self) -> [(&'static str, &DayEntry); 7] {
        [
            ("mon", &self.mon),
            ("tue", &self.tue),
            ("wed", &self.wed),
            ("thu", &self.thu),
            ("fri", &self.fri),
            ("sat", &self.sat),
            ("sun", &self.sun),
        ]
    }

    /// Mutable access to a slot by its day name.
    pub fn slot_mut(&mut self, day_name: &str) -> Option<&mut DayEntry> {
        match day_name {
            "mon" => Some(&mut self.mon),
            "tue" => Some(&mut self.tue),
            "wed" => Some(&mut self.wed),
            "thu" => Some(&mut self.thu),
            "fri" => Some(&mut self.fri),
            "sat" => Some(&mut self.sat),
            "sun" => Some(&mut self.sun),
            _ => None,
        }
    }

    /// Weekly total derived from the seven slot totals.
    pub fn derived_weekly_total(&self) -> String {
        let totals: Vec<String> = self.slots().iter().map(|(_, day)| day.total_or_derived()).collect();
        calc::weekly_total(&totals)
    }
}

/// A full stored week: key, seven slots, and the weekly total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    /// Week start in `DD/MM/YYYY` wire format, always a Monday.
    pub week_start: String,
    pub weekly_total: String,
    pub data: WeekDays,
}

/// One row of the week listing: key, total, and bookkeeping timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    pub week_start: String,
    pub weekly_total: String,
    pub created_at: String,
    pub updated_at: String,
}
