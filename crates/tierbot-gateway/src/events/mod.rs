//! Translation of serenity payloads into domain types

use serenity::all::{Context, Reaction, ReactionType};
use tierbot_core::{ReactionEvent, ReactionKind, Snowflake};

/// Convert any serenity id into a domain snowflake
pub fn snowflake(id: impl Into<u64>) -> Snowflake {
    Snowflake::new(id.into())
}

/// Stable comparison key for an emoji
///
/// Unicode emojis compare by their text, custom emojis by id so a renamed
/// emoji keeps counting.
pub fn emoji_key(emoji: &ReactionType) -> String {
    match emoji {
        ReactionType::Unicode(text) => text.clone(),
        ReactionType::Custom { id, .. } => id.to_string(),
        other => other.to_string(),
    }
}

/// Parse the configured tracking emoji
///
/// Accepts a unicode emoji (`⭐`) or a custom emoji mention (`<:name:id>`).
pub fn parse_track_emoji(raw: &str) -> Option<ReactionType> {
    ReactionType::try_from(raw.trim()).ok()
}

/// Build a domain event from a gateway reaction
///
/// Returns `None` when the payload carries no user. Bot detection falls back
/// to a user lookup because removal payloads carry no member.
pub async fn reaction_event(
    ctx: &Context,
    reaction: &Reaction,
    kind: ReactionKind,
) -> Option<ReactionEvent> {
    let user_id = reaction.user_id?;

    let from_bot = match &reaction.member {
        Some(member) => member.user.bot,
        None => match reaction.user(ctx).await {
            Ok(user) => user.bot,
            Err(e) => {
                tracing::debug!(user_id = %user_id, error = %e, "Could not resolve reacting user");
                false
            }
        },
    };

    Some(
        ReactionEvent::new(
            kind,
            reaction.guild_id.map(snowflake),
            snowflake(reaction.message_id),
            snowflake(user_id),
            emoji_key(&reaction.emoji),
        )
        .with_bot(from_bot),
    )
}
