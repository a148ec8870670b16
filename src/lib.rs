//! # Lil Timesheet - weekly timesheet tracker
//!
//! A small self-hosted web service for recording weekly working hours:
//! per-day start/finish times and break durations, derived day and week
//! totals, persisted per user and week behind Google sign-in.
//!
//! ## Features
//!
//! - **Time Calculator**: lenient `HH:MM` arithmetic with `H:MM` totals
//! - **Timesheet Store**: atomic replace-all of a week's seven day slots
//! - **HTTP API**: save/fetch/list/delete weeks plus user and health routes
//! - **Google OAuth**: authorization-code sign-in with cookie sessions
//! - **Terminal Tools**: config wizard and a stored-weeks listing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lil_timesheet::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod web;
