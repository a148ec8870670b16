//! HTTP surface: router assembly, shared state, sessions, and OAuth.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod session;

use crate::libs::config::Config;
use auth::GoogleAuth;
use axum::routing::{get, post};
use axum::Router;
use session::SessionStore;
use tower_http::trace::TraceLayer;

/// State shared by every request handler.
///
/// Database access deliberately stays out of here: repositories open their
/// own connections per operation, and SQLite serializes the writers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub google: Option<GoogleAuth>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let server = config.server();
        AppState {
            sessions: SessionStore::new(server.session_ttl_hours),
            google: config.google.as_ref().and_then(|google| GoogleAuth::new(google, &server.base_url)),
        }
    }
}

/// Builds the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/auth/google", get(auth::login))
        .route("/auth/google/callback", get(auth::callback))
        .route("/auth/logout", post(auth::logout))
        .route("/api/user", get(handlers::current_user))
        .route("/api/health", get(handlers::health))
        .route("/api/timesheet", post(handlers::save_week))
        .route("/api/timesheet/{week_start}", get(handlers::get_week).delete(handlers::delete_week))
        .route("/api/timesheets", get(handlers::list_weeks))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
