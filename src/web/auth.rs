//! Google OAuth 2.0 sign-in and the session-backed request guard.
//!
//! The flow is the standard authorization-code dance: `/auth/google`
//! redirects to the consent screen with a random `state` token, the
//! callback verifies that token, trades the code for an access token,
//! fetches the userinfo profile, upserts the user row, and opens a
//! session. The rest of the API authenticates through the [`CurrentUser`]
//! extractor, which maps a session cookie back to a stored user and
//! rejects everything else with the 401 envelope.

use crate::db::users::{IdentityProfile, User, Users};
use crate::libs::config::GoogleConfig;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use crate::web::error::ApiError;
use crate::web::session::{self, SESSION_COOKIE};
use crate::web::AppState;
use anyhow::{anyhow, Result};
use axum::extract::{FromRequestParts, Query, State};
use axum::http::header::SET_COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::{AppendHeaders, IntoResponse, Redirect};
use axum::Json;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use rand::distributions::{Alphanumeric, DistString};
use reqwest::Url;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Pending `state` tokens outlive one round trip to the consent screen.
const STATE_TTL_MINUTES: i64 = 10;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct UserInfo {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

/// OAuth client: credentials, callback address, and pending state tokens.
#[derive(Clone)]
pub struct GoogleAuth {
    client: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    states: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
}

impl GoogleAuth {
    /// Builds the OAuth client, or `None` when credentials are missing.
    pub fn new(config: &GoogleConfig, base_url: &str) -> Option<Self> {
        let client_secret = config.resolve_secret()?;
        if config.client_id.is_empty() || client_secret.is_empty() {
            return None;
        }

        Some(GoogleAuth {
            client: reqwest::Client::new(),
            client_id: config.client_id.clone(),
            client_secret,
            redirect_uri: format!("{}/auth/google/callback", base_url.trim_end_matches('/')),
            states: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Consent screen URL with a freshly minted `state` token.
    pub fn authorize_url(&self) -> String {
        let state = Alphanumeric.sample_string(&mut rand::thread_rng(), 32);
        self.states.write().insert(state.clone(), Utc::now());

        let url = Url::parse_with_params(
            GOOGLE_AUTH_URL,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", "profile email"),
                ("access_type", "offline"),
                ("state", state.as_str()),
            ],
        )
        .expect("static auth URL is valid");
        url.into()
    }

    /// Consumes a `state` token; valid at most once and only while fresh.
    pub fn take_state(&self, state: &str) -> bool {
        let mut states = self.states.write();
        states.retain(|_, issued| Utc::now() - *issued < Duration::minutes(STATE_TTL_MINUTES));
        states.remove(state).is_some()
    }

    /// Exchanges an authorization code for the user's identity profile.
    pub async fn exchange_code(&self, code: &str) -> Result<IdentityProfile> {
        let token: TokenResponse = self
            .client
            .post(GOOGLE_TOKEN_URL)
            .form(&[
                ("code", code),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let info: UserInfo = self
            .client
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(&token.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if info.id.is_empty() {
            return Err(anyhow!("identity provider returned an empty subject id"));
        }

        let display_name = info.name.clone().or_else(|| info.email.clone()).unwrap_or_else(|| "Unknown".to_string());

        Ok(IdentityProfile {
            external_id: info.id,
            emails: info.email.into_iter().collect(),
            display_name,
            photos: info.picture.into_iter().collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

/// `GET /auth/google` — redirect to the consent screen.
pub async fn login(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    let google = state
        .google
        .as_ref()
        .ok_or_else(|| ApiError::Internal(msg_error_anyhow!(Message::GoogleOauthNotConfigured)))?;

    Ok(Redirect::to(&google.authorize_url()))
}

/// `GET /auth/google/callback` — complete the code exchange and open a
/// session for the upserted user.
pub async fn callback(State(state): State<AppState>, Query(query): Query<CallbackQuery>) -> Result<impl IntoResponse, ApiError> {
    let google = state
        .google
        .as_ref()
        .ok_or_else(|| ApiError::Internal(msg_error_anyhow!(Message::GoogleOauthNotConfigured)))?;

    if let Some(error) = query.error {
        return Err(ApiError::Validation(format!("Authorization was refused: {}", error)));
    }

    let valid_state = query.state.as_deref().map(|s| google.take_state(s)).unwrap_or(false);
    if !valid_state {
        return Err(ApiError::Validation("Invalid or expired OAuth state".to_string()));
    }

    let code = query.code.ok_or_else(|| ApiError::Validation("Missing authorization code".to_string()))?;

    let profile = google.exchange_code(&code).await?;
    let user = Users::new()?.upsert(&profile)?;

    let token = state.sessions.create(user.id);
    let cookie = session::set_cookie(&token, state.sessions.ttl_seconds());

    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to("/")))
}

/// `POST /auth/logout` — drop the session and clear the cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session::cookie_value(&headers, SESSION_COOKIE) {
        state.sessions.remove(&token);
    }

    (
        AppendHeaders([(SET_COOKIE, session::clear_cookie())]),
        Json(json!({ "success": true, "message": "Logged out successfully" })),
    )
}

/// Authenticated user of the current request.
///
/// Extraction fails with the 401 envelope when the session cookie is
/// missing, expired, or points at a user that no longer exists.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = session::cookie_value(&parts.headers, SESSION_COOKIE).ok_or(ApiError::Unauthorized)?;
        let user_id = state.sessions.resolve(&token).ok_or(ApiError::Unauthorized)?;

        let user = Users::new()?.fetch_by_id(user_id)?.ok_or(ApiError::Unauthorized)?;
        Ok(CurrentUser(user))
    }
}
