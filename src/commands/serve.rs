//! HTTP server command.
//!
//! Opens the database (applying pending migrations), assembles the axum
//! router over the shared session and OAuth state, and serves until
//! Ctrl-C. With `TIMESHEET_DEBUG` or `RUST_LOG` set, a tracing subscriber
//! is installed and all messaging goes through it, including per-request
//! traces from the router's `TraceLayer`.

use crate::db::db::Db;
use crate::libs::{config::Config, messages::Message};
use crate::web::{self, AppState};
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overriding the configured one
    #[arg(short, long)]
    listen: Option<String>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    if crate::libs::messages::macros::is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
            .init();
    }

    let config = Config::read()?;
    let server = config.server();

    // Open once up front so schema migrations run before the first request.
    let db = Db::new()?;
    drop(db);
    msg_print!(Message::ServerDatabaseReady(Db::path()?.display().to_string()));

    let state = AppState::from_config(&config);
    if state.google.is_some() {
        msg_print!(Message::GoogleOauthReady);
    } else {
        msg_warning!(Message::GoogleOauthNotConfigured);
    }

    let listen = args.listen.unwrap_or(server.listen);
    let app = web::router(state);

    let listener = tokio::net::TcpListener::bind(&listen).await?;
    msg_success!(Message::ServerStarted(format!("http://{}", listen)));

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    msg_print!(Message::ServerShuttingDown);
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
