#[cfg(test)]
mod tests {
    use lil_timesheet::db::users::{IdentityProfile, Users};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct UserTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for UserTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            UserTestContext { _temp_dir: temp_dir }
        }
    }

    fn profile() -> IdentityProfile {
        IdentityProfile {
            external_id: "google-123".to_string(),
            emails: vec!["test@example.com".to_string(), "alt@example.com".to_string()],
            display_name: "Test User".to_string(),
            photos: vec!["https://example.com/photo.jpg".to_string()],
        }
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_upsert_creates_user(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();
        let user = users.upsert(&profile()).unwrap();

        assert_eq!(user.google_id, "google-123");
        // The first email and photo win
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.name, "Test User");
        assert_eq!(user.profile_picture.as_deref(), Some("https://example.com/photo.jpg"));
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_repeated_login_refreshes_profile(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();
        let first = users.upsert(&profile()).unwrap();

        let mut renamed = profile();
        renamed.display_name = "Renamed User".to_string();
        renamed.photos = vec![];
        let second = users.upsert(&renamed).unwrap();

        // Same row, refreshed fields
        assert_eq!(second.id, first.id);
        assert_eq!(second.name, "Renamed User");
        assert!(second.profile_picture.is_none());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_profile_without_emails_or_photos(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();
        let user = users
            .upsert(&IdentityProfile {
                external_id: "google-789".to_string(),
                emails: vec![],
                display_name: "No Email".to_string(),
                photos: vec![],
            })
            .unwrap();

        assert_eq!(user.email, "");
        assert!(user.profile_picture.is_none());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_fetch_by_id_and_email(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();
        let created = users.upsert(&profile()).unwrap();

        let by_id = users.fetch_by_id(created.id).unwrap().unwrap();
        assert_eq!(by_id, created);

        let by_email = users.fetch_by_email("test@example.com").unwrap().unwrap();
        assert_eq!(by_email, created);

        assert!(users.fetch_by_id(created.id + 100).unwrap().is_none());
        assert!(users.fetch_by_email("nobody@example.com").unwrap().is_none());
    }
}
