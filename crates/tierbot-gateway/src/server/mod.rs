//! Bot startup
//!
//! Wires the ledger store, the role mutator and the tier table into one
//! service context, starts the keep-alive HTTP server next to it and then
//! connects to the Discord gateway.

mod handler;
mod state;

pub use handler::Handler;
pub use state::BotState;

use std::sync::Arc;

use serenity::all::{Client, GatewayIntents, GuildId};
use serenity::http::Http;
use tierbot_api::{create_app, run_server, AppState};
use tierbot_common::AppConfig;
use tierbot_core::{LedgerStore, TierTable};
use tierbot_service::ServiceContextBuilder;
use tierbot_store::JsonLedgerStore;
use tracing::{error, info};

use crate::error::{GatewayError, GatewayResult};
use crate::events::{emoji_key, parse_track_emoji};
use crate::roles::SerenityRoleMutator;

/// Gateway intents the bot needs: guild metadata and reaction events
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGE_REACTIONS
}

/// Build the bot state from configuration
///
/// Performs a warm load of the ledger so a corrupt file is reported at
/// startup rather than on the first reaction.
pub async fn create_bot_state(config: &AppConfig, tiers: TierTable) -> GatewayResult<BotState> {
    let raw_emoji = &config.discord.track_emoji;
    let track_reaction =
        parse_track_emoji(raw_emoji).ok_or_else(|| GatewayError::InvalidEmoji(raw_emoji.clone()))?;

    let guild_id = GuildId::new(config.discord.guild_id.into_inner());

    let store = Arc::new(JsonLedgerStore::new(&config.storage.reactions_path));
    let ledger = store.load().await;
    info!(
        path = %store.path().display(),
        tracked_messages = ledger.tracked_messages().len(),
        users = ledger.user_count(),
        "Reaction ledger loaded"
    );

    let http = Arc::new(Http::new(&config.discord.token));
    let roles = Arc::new(SerenityRoleMutator::new(http, guild_id));

    let service_context = ServiceContextBuilder::new()
        .store(store)
        .roles(roles)
        .tiers(tiers)
        .guild_id(config.discord.guild_id)
        .track_emoji(emoji_key(&track_reaction))
        .build()?;

    Ok(BotState::new(
        service_context,
        track_reaction,
        guild_id,
        config.discord.activity.clone(),
    ))
}

/// Run the bot until ctrl-c
pub async fn run(config: AppConfig, tiers: TierTable) -> GatewayResult<()> {
    let state = create_bot_state(&config, tiers).await?;

    let app = create_app(AppState::new(state.service_context().clone()));
    let address = config.http.address();
    tokio::spawn(async move {
        if let Err(e) = run_server(app, &address, shutdown_signal()).await {
            error!(error = %e, "Keep-alive server stopped");
        }
    });

    let mut client = Client::builder(&config.discord.token, intents())
        .event_handler(Handler::new(state))
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, disconnecting from Discord");
        shard_manager.shutdown_all().await;
    });

    info!("Connecting to Discord...");
    client.start().await?;

    info!("Bot stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
