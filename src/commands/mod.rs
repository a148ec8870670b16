pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod serve;
pub mod weeks;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the timesheet HTTP server")]
    Serve(serve::ServeArgs),
    #[command(about = "List a user's stored weeks")]
    Weeks(weeks::WeeksArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Database migration management (debug builds)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Weeks(args) => weeks::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
