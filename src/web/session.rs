//! In-memory session store and cookie plumbing.
//!
//! Sessions map a random cookie token to a user id with an expiry. The
//! store is process-local (a restart logs everyone out), which matches the
//! single-instance, low-traffic deployment this tool targets. Expired
//! entries are pruned lazily on lookup.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use rand::distributions::{Alphanumeric, DistString};
use std::collections::HashMap;
use std::sync::Arc;

pub const SESSION_COOKIE: &str = "lil_session";

const TOKEN_LENGTH: usize = 48;

#[derive(Debug, Clone)]
struct Session {
    user_id: i64,
    expires_at: DateTime<Utc>,
}

/// Token → session map shared across request handlers.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_hours: u64) -> Self {
        SessionStore {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::hours(ttl_hours as i64),
        }
    }

    /// Opens a session for a user and returns the cookie token.
    pub fn create(&self, user_id: i64) -> String {
        let token = Alphanumeric.sample_string(&mut rand::thread_rng(), TOKEN_LENGTH);
        let session = Session {
            user_id,
            expires_at: Utc::now() + self.ttl,
        };
        self.inner.write().insert(token.clone(), session);
        token
    }

    /// Resolves a token to its user id; expired tokens are dropped.
    pub fn resolve(&self, token: &str) -> Option<i64> {
        let mut sessions = self.inner.write();
        match sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => Some(session.user_id),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    pub fn remove(&self, token: &str) {
        self.inner.write().remove(token);
    }

    /// Session lifetime in seconds, for the cookie Max-Age attribute.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }
}

/// Extracts a cookie value from the request headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let header = headers.get(COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Builds the Set-Cookie header value that opens a session.
pub fn set_cookie(token: &str, max_age_seconds: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, token, max_age_seconds
    )
}

/// Builds the Set-Cookie header value that closes a session.
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}
