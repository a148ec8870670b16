//! Core library modules: time arithmetic, domain types, configuration,
//! platform storage paths, and the messaging subsystem.

pub mod calc;
pub mod config;
pub mod data_storage;
pub mod messages;
pub mod timesheet;
pub mod week;
