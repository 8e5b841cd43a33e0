//! Slash command interactions
//!
//! Every reply is ephemeral. Commands that touch Discord or the ledger are
//! deferred first so slow role updates do not expire the interaction.

use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, Interaction,
};
use tierbot_common::AppError;
use tracing::{debug, warn};

use super::log_failure;
use crate::commands::{self, string_option, BotCommand};
use crate::embeds;
use crate::server::BotState;

pub async fn handle(ctx: &Context, state: &BotState, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };
    let Some(kind) = BotCommand::from_name(&command.data.name) else {
        warn!(name = %command.data.name, "Unknown command");
        return;
    };
    debug!(command = kind.name(), user_id = %command.user.id, "Command received");

    if kind.defers() {
        if let Err(e) = command.defer_ephemeral(&ctx.http).await {
            warn!(command = kind.name(), error = %e, "Failed to defer interaction");
            return;
        }
    }

    let result = match kind {
        BotCommand::StartReaction => commands::start_reaction(ctx, &command, state).await,
        BotCommand::Stats => commands::stats(ctx, &command, state).await,
        BotCommand::CheckTier => commands::check_tier(ctx, &command, state).await,
        BotCommand::ResetUser => commands::reset_user(ctx, &command, state).await,
    };

    let embed = result.unwrap_or_else(|err| {
        log_failure(kind.name(), &err);
        failure_embed(kind, &command, &err)
    });

    let sent = if kind.defers() {
        command
            .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
            .await
            .map(|_| ())
    } else {
        let message = CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(true);
        command
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
    };

    if let Err(e) = sent {
        warn!(command = kind.name(), error = %e, "Failed to send reply");
    }
}

fn failure_embed(kind: BotCommand, command: &CommandInteraction, err: &AppError) -> CreateEmbed {
    match kind {
        BotCommand::StartReaction => {
            let options = command.data.options();
            let message_id = string_option(&options, "messageid").unwrap_or_default();
            embeds::tracking_failed(message_id, err.user_message())
        }
        _ => embeds::failure(kind.failure_title(), err.user_message()),
    }
}
