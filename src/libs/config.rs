//! Configuration management for the timesheet server.
//!
//! Settings are stored as JSON in the platform data directory (next to the
//! database) and edited through an interactive wizard (`init` command).
//! Every module is optional: the server falls back to sane defaults when
//! the `server` block is missing, and OAuth routes stay disabled until the
//! `google` block is configured.
//!
//! The Google client secret may be kept out of the file entirely and
//! supplied through the `GOOGLE_CLIENT_SECRET` environment variable
//! (loaded from `.env` via dotenv at startup), which mirrors how the
//! hosted deployments of this tool are configured.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// HTTP server settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub listen: String,

    /// Public base URL used to build the OAuth callback address.
    ///
    /// Must match the redirect URI registered with the OAuth provider.
    pub base_url: String,

    /// Session lifetime in hours; expired sessions require a new login.
    pub session_ttl_hours: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen: "127.0.0.1:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            session_ttl_hours: 24,
        }
    }
}

/// Google OAuth 2.0 client credentials.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GoogleConfig {
    pub client_id: String,

    /// Client secret; omitted from the file when it comes from the
    /// `GOOGLE_CLIENT_SECRET` environment variable instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl GoogleConfig {
    /// Resolves the client secret from the config file or the environment.
    pub fn resolve_secret(&self) -> Option<String> {
        self.client_secret.clone().or_else(|| env::var("GOOGLE_CLIENT_SECRET").ok())
    }
}

/// Root configuration object; each module is independently optional.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub google: Option<GoogleConfig>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when it does
    /// not exist yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Effective server settings, defaulted when not configured.
    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    /// Interactive configuration wizard.
    ///
    /// Presents the available modules, prompts for each selected one with
    /// the current values as defaults, and returns the updated
    /// configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleServer.to_string(), Message::ConfigModuleGoogle.to_string()];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for selection in selected {
            match selection {
                0 => {
                    let default = config.server.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        listen: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptListenAddr.to_string())
                            .default(default.listen)
                            .interact_text()?,
                        base_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBaseUrl.to_string())
                            .default(default.base_url)
                            .interact_text()?,
                        session_ttl_hours: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSessionTtlHours.to_string())
                            .default(default.session_ttl_hours)
                            .interact_text()?,
                    });
                }
                1 => {
                    let default = config.google.clone().unwrap_or(GoogleConfig {
                        client_id: String::new(),
                        client_secret: None,
                    });
                    msg_print!(Message::ConfigModuleGoogle);
                    let client_id: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptGoogleClientId.to_string())
                        .default(default.client_id)
                        .interact_text()?;
                    let client_secret: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptGoogleClientSecret.to_string())
                        .allow_empty(true)
                        .default(default.client_secret.unwrap_or_default())
                        .interact_text()?;
                    config.google = Some(GoogleConfig {
                        client_id,
                        client_secret: if client_secret.is_empty() { None } else { Some(client_secret) },
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
