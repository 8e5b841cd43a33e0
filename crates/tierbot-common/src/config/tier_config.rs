//! Tier configuration file loader
//!
//! The tier file is a JSON array of `{ "name", "count", "roleId" }` objects.
//! It is read once at startup; any problem is fatal.

use std::path::Path;

use serde::Deserialize;
use tierbot_core::{Snowflake, TierDefinition, TierTable};
use tracing::info;
use validator::Validate;

use super::app_config::ConfigError;

/// One entry of the tier configuration file
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TierEntry {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub count: u64,
    pub role_id: Snowflake,
}

impl From<TierEntry> for TierDefinition {
    fn from(entry: TierEntry) -> Self {
        TierDefinition::new(entry.name, entry.count, entry.role_id)
    }
}

/// Parse and validate a tier table from JSON text
pub fn parse_tier_table(json: &str) -> Result<TierTable, ConfigError> {
    let entries: Vec<TierEntry> = serde_json::from_str(json)?;

    for (index, entry) in entries.iter().enumerate() {
        entry.validate().map_err(|e| ConfigError::TierEntry {
            index,
            reason: e.to_string(),
        })?;
    }

    let table = TierTable::new(entries.into_iter().map(TierDefinition::from).collect())?;
    Ok(table)
}

/// Read, parse and validate the tier table at `path`
pub fn load_tier_table(path: &Path) -> Result<TierTable, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::TierFile {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_tier_table(&json)?;

    info!(
        path = %path.display(),
        tiers = %table
            .iter()
            .map(|t| format!("{} ({} reactions)", t.name, t.threshold))
            .collect::<Vec<_>>()
            .join(", "),
        "Tier configuration loaded"
    );

    Ok(table)
}
