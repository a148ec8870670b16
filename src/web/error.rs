//! API error type and its JSON envelope mapping.
//!
//! Four failure classes reach the client: validation (400), not-found
//! (404), missing authentication (401 with a redirect hint), and opaque
//! internal failures (500). Internal detail is logged server-side and
//! never echoed to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Client sent a request the server refuses to interpret.
    #[error("{0}")]
    Validation(String),

    /// The requested resource does not exist for this user.
    #[error("{0}")]
    NotFound(&'static str),

    /// No valid session accompanies the request.
    #[error("Authentication required")]
    Unauthorized,

    /// Persistence or upstream failure; detail stays in the server log.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, json!({ "success": false, "error": message })),
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, json!({ "success": false, "error": what })),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "error": "Authentication required", "redirectTo": "/auth/google" }),
            ),
            ApiError::Internal(error) => {
                tracing::error!(error = %error, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "success": false, "error": "Internal server error" }))
            }
        };

        (status, Json(body)).into_response()
    }
}
