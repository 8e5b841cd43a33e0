//! tierbot entry point
//!
//! Run with:
//! ```bash
//! cargo run -p tierbot-gateway
//! ```
//!
//! Configuration is loaded from environment variables and the tier file.

use anyhow::Context as _;
use tierbot_common::{
    load_tier_table, try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("tierbot failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if let Err(e) = try_init_tracing() {
                eprintln!("Warning: Failed to initialize tracing: {e}");
            }
            return Err(e).context("Failed to load configuration");
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        guild_id = %config.discord.guild_id,
        "Starting tierbot..."
    );

    let tiers = load_tier_table(&config.storage.tier_config_path)
        .context("Failed to load tier configuration")?;

    tierbot_gateway::run(config, tiers).await?;

    Ok(())
}
