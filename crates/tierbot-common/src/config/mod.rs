//! Configuration structs and loaders

mod app_config;
mod tier_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, DiscordConfig, Environment, ServerConfig, StorageConfig,
};
pub use tier_config::{load_tier_table, parse_tier_table, TierEntry};
