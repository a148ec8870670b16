//! Timesheet API handlers.
//!
//! All `/api/timesheet*` routes operate on the authenticated user's data
//! only; the user id comes from the session, never from the request body.
//! Week keys arrive as `DD/MM/YYYY` and are normalized to the Monday of
//! their week before they reach the store, so a client may address a week
//! by any of its days.
//!
//! Response envelopes mirror the browser client's expectations: a
//! `success` flag plus `data`/`message` on the happy path, `error` detail
//! on failures.

use crate::db::db::Db;
use crate::db::timesheets::Timesheets;
use crate::libs::timesheet::WeekDays;
use crate::libs::week;
use crate::web::auth::CurrentUser;
use crate::web::error::ApiError;
use crate::web::session::{self, SESSION_COOKIE};
use crate::web::AppState;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

/// Save-week request body. Top-level fields are optional so their absence
/// surfaces as a 400 with a message instead of a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveWeekRequest {
    pub week_start: Option<String>,
    pub weekly_total: Option<String>,
    pub data: Option<WeekDays>,
}

fn parse_week_param(raw: &str) -> Result<NaiveDate, ApiError> {
    week::parse_week_start(raw).ok_or_else(|| ApiError::Validation(format!("Invalid week start '{}': expected DD/MM/YYYY", raw)))
}

/// `POST /api/timesheet` — atomically replace the user's week.
pub async fn save_week(
    CurrentUser(user): CurrentUser,
    State(_state): State<AppState>,
    Json(request): Json<SaveWeekRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(week_start), Some(days)) = (request.week_start.as_deref(), request.data.as_ref()) else {
        return Err(ApiError::Validation("Missing required fields: weekStart and data".to_string()));
    };

    let week_start = parse_week_param(week_start)?;

    // Submitted totals are stored verbatim; the calculator only fills in
    // what the client left blank.
    let weekly_total = match request.weekly_total.as_deref() {
        Some(total) if !total.is_empty() => total.to_string(),
        _ => days.derived_weekly_total(),
    };

    let id = Timesheets::new()?.upsert_week(user.id, week_start, &weekly_total, days)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Timesheet saved successfully",
            "data": { "id": id },
        })),
    ))
}

/// `GET /api/timesheet/{week_start}` — one stored week, mon→sun.
pub async fn get_week(CurrentUser(user): CurrentUser, Path(week_start): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let week_start = parse_week_param(&week_start)?;

    let timesheet = Timesheets::new()?
        .fetch_week(user.id, week_start)?
        .ok_or(ApiError::NotFound("Timesheet not found"))?;

    Ok(Json(json!({ "success": true, "data": timesheet })))
}

/// `GET /api/timesheets` — all stored weeks, newest first.
pub async fn list_weeks(CurrentUser(user): CurrentUser) -> Result<impl IntoResponse, ApiError> {
    let summaries = Timesheets::new()?.fetch_all(user.id)?;

    Ok(Json(json!({ "success": true, "data": summaries })))
}

/// `DELETE /api/timesheet/{week_start}` — drop a week and its day rows.
pub async fn delete_week(CurrentUser(user): CurrentUser, Path(week_start): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let week_start = parse_week_param(&week_start)?;

    if !Timesheets::new()?.delete_week(user.id, week_start)? {
        return Err(ApiError::NotFound("Timesheet not found"));
    }

    Ok(Json(json!({ "success": true, "message": "Timesheet deleted successfully" })))
}

/// `GET /api/user` — the authenticated user's profile.
pub async fn current_user(CurrentUser(user): CurrentUser) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "user": {
            "id": user.id,
            "googleId": user.google_id,
            "email": user.email,
            "name": user.name,
            "profilePicture": user.profile_picture,
        },
    }))
}

/// `GET /api/health` — liveness probe, no authentication required.
pub async fn health(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let database = match Db::new_without_migrations() {
        Ok(_) => "Connected",
        Err(_) => "Disconnected",
    };
    let authenticated = session::cookie_value(&headers, SESSION_COOKIE)
        .and_then(|token| state.sessions.resolve(&token))
        .is_some();

    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
        "database": database,
        "authenticated": if authenticated { "Yes" } else { "No" },
    }))
}

/// Landing route; the browser client is deployed separately.
pub async fn index() -> impl IntoResponse {
    "Lil Timesheet API — see /api/health"
}

/// Fallback: JSON 404 under `/api`, plain text elsewhere.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    if uri.path().starts_with("/api/") {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "Endpoint not found" })),
        )
            .into_response()
    } else {
        (StatusCode::NOT_FOUND, "Page not found").into_response()
    }
}
