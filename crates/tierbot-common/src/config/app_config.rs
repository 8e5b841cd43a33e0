//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if
//! present). The resulting [`AppConfig`] is built once at startup and shared
//! read-only for the lifetime of the process.

use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use tierbot_core::Snowflake;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub discord: DiscordConfig,
    pub http: ServerConfig,
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Chat platform connection settings
#[derive(Clone)]
pub struct DiscordConfig {
    /// Bot token
    pub token: String,
    /// The single guild whose reactions are tracked
    pub guild_id: Snowflake,
    /// The tracked emoji: a unicode emoji or a custom emoji mention (`<:name:id>`)
    pub track_emoji: String,
    /// "Watching ..." activity text shown on the bot's profile
    pub activity: String,
}

impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .field("track_emoji", &self.track_emoji)
            .field("activity", &self.activity)
            .finish()
    }
}

/// HTTP keep-alive server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// File locations
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Reaction ledger document
    pub reactions_path: PathBuf,
    /// Tier table definition
    pub tier_config_path: PathBuf,
}

// Default value functions
fn default_app_name() -> String {
    "tierbot".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_activity() -> String {
    "Skooma's Mod Emporium!".to_string()
}

fn default_reactions_path() -> PathBuf {
    PathBuf::from("reactions.json")
}

fn default_tier_config_path() -> PathBuf {
    PathBuf::from("tier_config.json")
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        let guild_id = required("GUILD_ID")?;
        let guild_id = Snowflake::parse(&guild_id)
            .map_err(|e| ConfigError::InvalidValue("GUILD_ID", e.to_string()))?;

        let port = match lookup("HTTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT", raw))?,
            None => default_port(),
        };

        let env = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw)
                .ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
            None => Environment::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            discord: DiscordConfig {
                token: required("DISCORD_TOKEN")?,
                guild_id,
                track_emoji: required("TRACK_EMOJI")?.trim().to_string(),
                activity: lookup("BOT_ACTIVITY").unwrap_or_else(default_activity),
            },
            http: ServerConfig {
                host: lookup("HTTP_HOST").unwrap_or_else(default_host),
                port,
            },
            storage: StorageConfig {
                reactions_path: lookup("REACTIONS_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_reactions_path),
                tier_config_path: lookup("TIER_CONFIG_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_tier_config_path),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),

    #[error("Failed to read tier config {path}: {source}")]
    TierFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Tier config is not valid JSON: {0}")]
    TierParse(#[from] serde_json::Error),

    #[error("Tier config entry {index} is invalid: {reason}")]
    TierEntry { index: usize, reason: String },

    #[error("Tier config rejected: {0}")]
    TierTable(#[from] tierbot_core::DomainError),
}
