//! Schema inspection helpers for development builds.
//!
//! Not compiled into release binaries; the server applies pending
//! migrations on startup, so production deployments never need these.

#[cfg(debug_assertions)]
use crate::db::db::Db;
#[cfg(debug_assertions)]
use crate::db::migrations::{get_db_version, needs_migration, MigrationManager};
#[cfg(debug_assertions)]
use crate::libs::messages::Message;
#[cfg(debug_assertions)]
use crate::{msg_info, msg_print};
#[cfg(debug_assertions)]
use anyhow::Result;
#[cfg(debug_assertions)]
use clap::{Args, Subcommand};

#[cfg(debug_assertions)]
#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[cfg(debug_assertions)]
#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show the current schema version
    Status,
    /// List applied migrations
    History,
    /// Rewind the migration tracking table to a version
    Rollback {
        /// Target version (0 marks everything as unapplied)
        #[arg(short, long, default_value_t = 0)]
        version: u32,
    },
}

#[cfg(debug_assertions)]
pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let mut conn = Db::new_without_migrations()?;
    let manager = MigrationManager::new();

    match args.command {
        MigrationsCommand::Status => {
            msg_print!(Message::DatabaseVersion(get_db_version(&conn)?));
            if needs_migration(&conn)? {
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            msg_print!(Message::MigrationHistory, true);
            for (version, name, applied_at) in manager.get_migration_history(&conn)? {
                println!("  v{}: {} (applied: {})", version, name, applied_at);
            }
        }
        MigrationsCommand::Rollback { version } => {
            manager.rollback_to(&mut conn, version)?;
        }
    }

    Ok(())
}
