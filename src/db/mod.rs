//! Database layer built on SQLite.
//!
//! Each repository owns its own connection obtained through [`db::Db`],
//! which opens the database file in the platform data directory, enables
//! foreign keys, and applies pending schema migrations. Connections are
//! cheap to open and SQLite serializes writers, so handlers create a
//! repository per operation instead of sharing a process-wide handle.

/// Connection management and database location.
pub mod db;

/// Versioned schema migrations with a tracking table.
pub mod migrations;

/// Weekly timesheet rows and their seven day entries.
pub mod timesheets;

/// Users imported from the OAuth identity provider.
pub mod users;
