//! Reaction add/remove events

use serenity::all::{Context, Reaction};
use tierbot_common::AppError;
use tierbot_core::ReactionKind;
use tierbot_service::TierService;
use tracing::{debug, info};

use super::log_failure;
use crate::events::{emoji_key, reaction_event};
use crate::server::BotState;

/// Record the reaction in the ledger and reconcile the member's roles
pub async fn handle(ctx: &Context, state: &BotState, reaction: &Reaction, kind: ReactionKind) {
    let service_context = state.service_context();

    // Skip the user lookup for the overwhelming majority of reactions
    if emoji_key(&reaction.emoji) != service_context.track_emoji()
        || reaction.guild_id != Some(state.guild_id())
    {
        return;
    }

    let Some(event) = reaction_event(ctx, reaction, kind).await else {
        debug!(message_id = %reaction.message_id, "Reaction without a user");
        return;
    };

    match TierService::new(service_context).handle_reaction(&event).await {
        Ok(Some(outcome)) => info!(
            user_id = %event.user_id,
            message_id = %event.message_id,
            kind = ?kind,
            count = outcome.unique_count,
            tier = outcome.tier_name(),
            failures = outcome.failures.len(),
            "Reaction processed"
        ),
        Ok(None) => debug!(
            user_id = %event.user_id,
            message_id = %event.message_id,
            kind = ?kind,
            "Reaction ignored"
        ),
        Err(e) => log_failure("reaction", &AppError::from(e)),
    }
}
