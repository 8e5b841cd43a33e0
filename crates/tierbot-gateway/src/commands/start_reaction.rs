//! `/startreaction messageid:`

use serenity::all::{Channel, ChannelId, CommandInteraction, Context, CreateEmbed, Message, MessageId};
use tierbot_common::{AppError, AppResult};
use tierbot_core::{DomainError, Snowflake};
use tierbot_service::{LedgerService, TrackingReport};
use tracing::{debug, info, warn};

use super::{parse_message_id, string_option};
use crate::embeds;
use crate::server::BotState;

/// React to the target message with the tracking emoji, then track it
///
/// Nothing is written to the ledger unless the reaction succeeds.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &BotState,
) -> AppResult<CreateEmbed> {
    let options = command.data.options();
    let raw = string_option(&options, "messageid")
        .ok_or_else(|| AppError::invalid_input("messageid is required"))?;
    let message_id = parse_message_id(raw)?;

    let message = resolve_target(ctx, command.channel_id, message_id).await?;

    if let Err(e) = message.react(ctx, state.track_reaction().clone()).await {
        warn!(message_id = %message_id, error = %e, "Failed to add tracking reaction");
        return Err(DomainError::CannotReact(message_id).into());
    }

    let (newly_tracked, total) = LedgerService::new(state.service_context())
        .start_tracking(message_id)
        .await?;

    info!(
        message_id = %message_id,
        channel_id = %message.channel_id,
        invoked_by = %command.user.id,
        newly_tracked,
        "Tracking requested"
    );

    Ok(embeds::tracking_started(
        &TrackingReport::new(message_id, newly_tracked, total),
        message.channel_id.get(),
        state.track_emoji_display(),
    ))
}

/// Find the message in the invoking channel, or the starter message of the
/// thread or forum post with the same id
async fn resolve_target(
    ctx: &Context,
    channel_id: ChannelId,
    message_id: Snowflake,
) -> AppResult<Message> {
    let id = MessageId::new(message_id.into_inner());

    match channel_id.message(ctx, id).await {
        Ok(message) => return Ok(message),
        Err(e) => debug!(message_id = %message_id, error = %e, "Not a message in this channel"),
    }

    let not_found = || AppError::from(DomainError::MessageNotFound(message_id));

    let thread_id = ChannelId::new(message_id.into_inner());
    let Ok(Channel::Guild(thread)) = thread_id.to_channel(ctx).await else {
        return Err(not_found());
    };
    if thread.thread_metadata.is_none() {
        return Err(not_found());
    }

    // Forum posts keep the starter inside the thread, message threads in the parent
    if let Ok(message) = thread_id.message(ctx, id).await {
        return Ok(message);
    }
    match thread.parent_id {
        Some(parent) => parent.message(ctx, id).await.map_err(|_| not_found()),
        None => Err(not_found()),
    }
}
