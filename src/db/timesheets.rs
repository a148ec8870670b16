//! Weekly timesheet persistence.
//!
//! One `timesheets` row per (user, Monday-of-week) plus exactly seven
//! `day_entries` rows, one per fixed day slot. A save replaces the whole
//! week: the week row is upserted, the old day rows are deleted, and seven
//! fresh ones are inserted — all inside a single rusqlite transaction, so
//! a failure at any step leaves the previously stored week untouched and a
//! stored week can never have fewer or more than seven day rows.
//!
//! Week starts are persisted as ISO dates, which makes the newest-first
//! listing a plain `ORDER BY week_start DESC`. Day rows are read back in
//! fixed mon→sun precedence regardless of insertion order.

use crate::db::db::Db;
use crate::libs::timesheet::{Timesheet, WeekDays, WeekSummary};
use crate::libs::week;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};

const UPSERT_WEEK: &str = "INSERT INTO timesheets (user_id, week_start, weekly_total, updated_at)
    VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)
    ON CONFLICT(user_id, week_start) DO UPDATE SET
        weekly_total = excluded.weekly_total,
        updated_at = CURRENT_TIMESTAMP";
const SELECT_WEEK_ID: &str = "SELECT id FROM timesheets WHERE user_id = ?1 AND week_start = ?2";
const DELETE_DAY_ROWS: &str = "DELETE FROM day_entries WHERE timesheet_id = ?1";
const INSERT_DAY_ROW: &str = "INSERT INTO day_entries
    (timesheet_id, day_name, date, start_time, break_hours, break_minutes, finish_time, total_hours)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_WEEK: &str = "SELECT t.week_start, t.weekly_total, d.day_name, d.date, d.start_time,
        d.break_hours, d.break_minutes, d.finish_time, d.total_hours
    FROM timesheets t
    LEFT JOIN day_entries d ON t.id = d.timesheet_id
    WHERE t.user_id = ?1 AND t.week_start = ?2
    ORDER BY
        CASE d.day_name
            WHEN 'mon' THEN 1
            WHEN 'tue' THEN 2
            WHEN 'wed' THEN 3
            WHEN 'thu' THEN 4
            WHEN 'fri' THEN 5
            WHEN 'sat' THEN 6
            WHEN 'sun' THEN 7
        END";
const SELECT_ALL: &str = "SELECT week_start, weekly_total, created_at, updated_at
    FROM timesheets
    WHERE user_id = ?1
    ORDER BY week_start DESC";
const DELETE_WEEK: &str = "DELETE FROM timesheets WHERE user_id = ?1 AND week_start = ?2";

pub struct Timesheets {
    conn: Connection,
}

impl Timesheets {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Timesheets { conn: db.conn })
    }

    /// Atomically replaces a user's week with the given seven day slots.
    ///
    /// Upserts the week row keyed on (user, week start), drops the prior
    /// day rows, and inserts one row per slot in mon→sun order. All three
    /// steps commit together or not at all. Empty clock times are stored
    /// as NULL; a blank slot date is filled in from the week start plus
    /// the slot offset.
    ///
    /// Returns the internal id of the week row.
    pub fn upsert_week(&mut self, user_id: i64, week_start: NaiveDate, weekly_total: &str, days: &WeekDays) -> Result<i64> {
        let tx = self.conn.transaction()?;

        tx.execute(UPSERT_WEEK, params![user_id, week_start, weekly_total])?;

        let timesheet_id: i64 = tx.query_row(SELECT_WEEK_ID, params![user_id, week_start], |row| row.get(0))?;

        tx.execute(DELETE_DAY_ROWS, params![timesheet_id])?;

        for (index, (day_name, day)) in days.slots().iter().enumerate() {
            let date = if day.date.is_empty() {
                week::format_wire_date(week::day_date(week_start, index))
            } else {
                day.date.clone()
            };

            tx.execute(
                INSERT_DAY_ROW,
                params![
                    timesheet_id,
                    day_name,
                    date,
                    day.start.as_deref().filter(|s| !s.is_empty()),
                    day.break_hours_int(),
                    day.break_minutes_int(),
                    day.finish.as_deref().filter(|s| !s.is_empty()),
                    day.total_or_derived(),
                ],
            )?;
        }

        tx.commit()?;
        Ok(timesheet_id)
    }

    /// Reconstructs a stored week, or `None` when no week row exists.
    pub fn fetch_week(&mut self, user_id: i64, week_start: NaiveDate) -> Result<Option<Timesheet>> {
        let mut stmt = self.conn.prepare(SELECT_WEEK)?;

        let rows = stmt
            .query_map(params![user_id, week_start], |row| {
                Ok((
                    row.get::<_, NaiveDate>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, Option<String>>(4)?,
                    row.get::<_, Option<i64>>(5)?,
                    row.get::<_, Option<i64>>(6)?,
                    row.get::<_, Option<String>>(7)?,
                    row.get::<_, Option<String>>(8)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let Some(first) = rows.first() else {
            return Ok(None);
        };

        let mut timesheet = Timesheet {
            week_start: week::format_wire_date(first.0),
            weekly_total: first.1.clone().unwrap_or_else(|| "0:00".to_string()),
            data: WeekDays::default(),
        };

        for (_, _, day_name, date, start, break_hours, break_minutes, finish, total) in rows {
            let Some(day_name) = day_name else { continue };
            if let Some(slot) = timesheet.data.slot_mut(&day_name) {
                slot.date = date.unwrap_or_default();
                slot.start = start;
                slot.break_hours = break_hours.filter(|h| *h != 0).map(|h| h.to_string()).unwrap_or_default();
                slot.break_minutes = break_minutes.filter(|m| *m != 0).map(|m| m.to_string()).unwrap_or_default();
                slot.finish = finish;
                slot.total = total;
            }
        }

        Ok(Some(timesheet))
    }

    /// Lists a user's stored weeks, newest week start first.
    pub fn fetch_all(&mut self, user_id: i64) -> Result<Vec<WeekSummary>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;

        let summaries = stmt
            .query_map(params![user_id], |row| {
                Ok(WeekSummary {
                    week_start: week::format_wire_date(row.get::<_, NaiveDate>(0)?),
                    weekly_total: row.get::<_, Option<String>>(1)?.unwrap_or_else(|| "0:00".to_string()),
                    created_at: row.get(2)?,
                    updated_at: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(summaries)
    }

    /// Deletes a week and, through the cascade, its day rows.
    ///
    /// Returns `false` when no week matched the key.
    pub fn delete_week(&mut self, user_id: i64, week_start: NaiveDate) -> Result<bool> {
        let changes = self.conn.execute(DELETE_WEEK, params![user_id, week_start])?;
        Ok(changes > 0)
    }
}
