use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

pub const DB_FILE_NAME: &str = "timesheet.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database and applies any pending migrations.
    pub fn new() -> Result<Db> {
        let mut conn = Self::open()?;
        migrations::init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Opens a raw connection without touching the schema.
    ///
    /// Used by the migrations command to inspect version state, and by
    /// tests that need to look at the tables directly.
    pub fn new_without_migrations() -> Result<Connection> {
        Self::open()
    }

    /// Location of the database file in the platform data directory.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(DB_FILE_NAME)
    }

    fn open() -> Result<Connection> {
        let conn = Connection::open(Self::path()?)?;
        // Cascade deletes from timesheets to day_entries rely on this.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(conn)
    }
}
