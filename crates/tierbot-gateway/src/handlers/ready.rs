//! READY: presence and slash command registration

use serenity::all::{ActivityData, Context, Ready};
use tracing::{error, info};

use crate::commands;
use crate::server::BotState;

pub async fn handle(ctx: &Context, state: &BotState, ready: &Ready) {
    info!(user = %ready.user.name, guilds = ready.guilds.len(), "Connected to Discord");

    ctx.set_activity(Some(ActivityData::watching(state.activity())));

    match state
        .guild_id()
        .set_commands(&ctx.http, commands::definitions())
        .await
    {
        Ok(registered) => info!(
            guild_id = %state.guild_id(),
            count = registered.len(),
            "Slash commands registered"
        ),
        Err(e) => error!(guild_id = %state.guild_id(), error = %e, "Failed to register slash commands"),
    }
}
