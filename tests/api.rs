#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::header::{CONTENT_TYPE, COOKIE};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use lil_timesheet::db::users::{IdentityProfile, Users};
    use lil_timesheet::web::session::SessionStore;
    use lil_timesheet::web::{router, AppState};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use tower::ServiceExt;

    struct ApiTestContext {
        _temp_dir: TempDir,
    }

    impl AsyncTestContext for ApiTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ApiTestContext { _temp_dir: temp_dir }
        }
    }

    /// Router plus a logged-in session cookie for a freshly created user.
    fn app_with_session() -> (Router, String) {
        let state = AppState {
            sessions: SessionStore::new(24),
            google: None,
        };

        let mut users = Users::new().unwrap();
        let user = users
            .upsert(&IdentityProfile {
                external_id: "google-123".to_string(),
                emails: vec!["test@example.com".to_string()],
                display_name: "Test User".to_string(),
                photos: vec![],
            })
            .unwrap();

        let token = state.sessions.create(user.id);
        let cookie = format!("lil_session={}", token);
        (router(state), cookie)
    }

    fn app_without_session() -> Router {
        let state = AppState {
            sessions: SessionStore::new(24),
            google: None,
        };
        router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn save_request(cookie: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/timesheet")
            .header(COOKIE, cookie)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(cookie: &str, uri: &str) -> Request<Body> {
        Request::builder().uri(uri).header(COOKIE, cookie).body(Body::empty()).unwrap()
    }

    fn standard_week_body() -> Value {
        let work_day = json!({
            "date": "",
            "start": "08:30",
            "breakHours": "",
            "breakMinutes": "30",
            "finish": "17:00",
            "total": "8:00",
        });
        let off_day = json!({
            "date": "",
            "breakHours": "",
            "breakMinutes": "",
        });
        json!({
            "weekStart": "08/01/2024",
            "weeklyTotal": "40:00",
            "data": {
                "mon": work_day.clone(), "tue": work_day.clone(), "wed": work_day.clone(),
                "thu": work_day.clone(), "fri": work_day,
                "sat": off_day.clone(), "sun": off_day,
            },
        })
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_health_endpoint(_ctx: &mut ApiTestContext) {
        let app = app_without_session();
        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["database"], "Connected");
        assert_eq!(body["authenticated"], "No");
        assert!(body["timestamp"].is_string());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_health_reports_authenticated_session(_ctx: &mut ApiTestContext) {
        let (app, cookie) = app_with_session();
        let response = app.oneshot(get_request(&cookie, "/api/health")).await.unwrap();

        let body = body_json(response).await;
        assert_eq!(body["authenticated"], "Yes");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_unauthenticated_request_redirect_hint(_ctx: &mut ApiTestContext) {
        let app = app_without_session();
        let response = app
            .oneshot(Request::builder().uri("/api/timesheets").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Authentication required");
        assert_eq!(body["redirectTo"], "/auth/google");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_stale_cookie_is_unauthorized(_ctx: &mut ApiTestContext) {
        let app = app_without_session();
        let response = app
            .oneshot(get_request("lil_session=stale-token", "/api/timesheets"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_save_fetch_list_delete_flow(_ctx: &mut ApiTestContext) {
        let (app, cookie) = app_with_session();

        // Save
        let response = app.clone().oneshot(save_request(&cookie, standard_week_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Timesheet saved successfully");
        assert!(body["data"]["id"].is_i64());

        // Fetch it back; the week key is URL-encoded DD/MM/YYYY
        let response = app
            .clone()
            .oneshot(get_request(&cookie, "/api/timesheet/08%2F01%2F2024"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["weekStart"], "08/01/2024");
        assert_eq!(body["data"]["weeklyTotal"], "40:00");
        assert_eq!(body["data"]["data"]["mon"]["start"], "08:30");
        assert_eq!(body["data"]["data"]["mon"]["date"], "08/01/2024");
        assert_eq!(body["data"]["data"]["sat"]["start"], Value::Null);

        // List
        let response = app.clone().oneshot(get_request(&cookie, "/api/timesheets")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["weekStart"], "08/01/2024");

        // Delete
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/timesheet/08%2F01%2F2024")
                    .header(COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Timesheet deleted successfully");

        // Gone
        let response = app
            .oneshot(get_request(&cookie, "/api/timesheet/08%2F01%2F2024"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_week_addressed_by_any_of_its_days(_ctx: &mut ApiTestContext) {
        let (app, cookie) = app_with_session();

        let response = app.clone().oneshot(save_request(&cookie, standard_week_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // 10/01/2024 is the Wednesday of the saved week
        let response = app
            .oneshot(get_request(&cookie, "/api/timesheet/10%2F01%2F2024"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["weekStart"], "08/01/2024");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_save_rejects_missing_fields(_ctx: &mut ApiTestContext) {
        let (app, cookie) = app_with_session();

        let response = app
            .oneshot(save_request(&cookie, json!({ "weeklyTotal": "40:00" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing required fields: weekStart and data");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_save_rejects_malformed_week_start(_ctx: &mut ApiTestContext) {
        let (app, cookie) = app_with_session();

        let mut body = standard_week_body();
        body["weekStart"] = json!("2024-01-08");
        let response = app.oneshot(save_request(&cookie, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_save_derives_blank_weekly_total(_ctx: &mut ApiTestContext) {
        let (app, cookie) = app_with_session();

        let mut request_body = standard_week_body();
        request_body["weeklyTotal"] = Value::Null;
        let response = app.clone().oneshot(save_request(&cookie, request_body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(get_request(&cookie, "/api/timesheet/08%2F01%2F2024"))
            .await
            .unwrap();
        let body = body_json(response).await;
        // Five 8:00 days
        assert_eq!(body["data"]["weeklyTotal"], "40:00");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_current_user_profile(_ctx: &mut ApiTestContext) {
        let (app, cookie) = app_with_session();

        let response = app.oneshot(get_request(&cookie, "/api/user")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["email"], "test@example.com");
        assert_eq!(body["user"]["name"], "Test User");
        assert_eq!(body["user"]["googleId"], "google-123");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_logout_ends_session(_ctx: &mut ApiTestContext) {
        let (app, cookie) = app_with_session();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/logout")
                    .header(COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // The cookie no longer authenticates
        let response = app.oneshot(get_request(&cookie, "/api/timesheets")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_login_without_oauth_config(_ctx: &mut ApiTestContext) {
        let app = app_without_session();
        let response = app
            .oneshot(Request::builder().uri("/auth/google").body(Body::empty()).unwrap())
            .await
            .unwrap();
        // OAuth routes fail until credentials are configured
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_fallback_routes(_ctx: &mut ApiTestContext) {
        let app = app_without_session();

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Endpoint not found");

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
