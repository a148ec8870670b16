//! Display implementation for application messages.
//!
//! All user-facing text lives here, in one place, so the rest of the code
//! passes typed `Message` values around instead of string literals.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleGoogle => "Google OAuth settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptListenAddr => "Listen address".to_string(),
            Message::PromptBaseUrl => "Public base URL".to_string(),
            Message::PromptSessionTtlHours => "Session lifetime in hours".to_string(),
            Message::PromptGoogleClientId => "Google OAuth client ID".to_string(),
            Message::PromptGoogleClientSecret => "Google OAuth client secret (empty to read GOOGLE_CLIENT_SECRET from the environment)".to_string(),

            // === SERVER MESSAGES ===
            Message::ServerStarted(addr) => format!("Lil Timesheet server running on {}", addr),
            Message::ServerDatabaseReady(path) => format!("Database: SQLite ({})", path),
            Message::GoogleOauthReady => "Authentication: Google OAuth 2.0".to_string(),
            Message::GoogleOauthNotConfigured => {
                "Google OAuth is not configured; run 'lil-timesheet init' to set client credentials".to_string()
            }
            Message::ServerShuttingDown => "Shutting down, closing database connection...".to_string(),

            // === WEEKS MESSAGES ===
            Message::WeeksHeader(email) => format!("Stored weeks for {}", email),
            Message::NoWeeksFound(email) => format!("No saved weeks for {}", email),
            Message::UserNotFoundByEmail(email) => format!("No user with email {}", email),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "Database schema is up to date".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationHistory => "Migration history".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),
        };
        write!(f, "{}", text)
    }
}
