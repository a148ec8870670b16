#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleServer,
    ConfigModuleGoogle,
    PromptSelectModules,
    PromptListenAddr,
    PromptBaseUrl,
    PromptSessionTtlHours,
    PromptGoogleClientId,
    PromptGoogleClientSecret,

    // === SERVER MESSAGES ===
    ServerStarted(String),          // listen address
    ServerDatabaseReady(String),    // database path
    GoogleOauthReady,
    GoogleOauthNotConfigured,
    ServerShuttingDown,

    // === WEEKS MESSAGES ===
    WeeksHeader(String),        // email
    NoWeeksFound(String),       // email
    UserNotFoundByEmail(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
}
