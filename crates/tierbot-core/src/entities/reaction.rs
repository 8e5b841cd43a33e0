//! Reaction event - an emoji reaction added to or removed from a message

use crate::value_objects::Snowflake;

/// Whether the reaction was added or removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Added,
    Removed,
}

/// A reaction event as delivered by the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    pub kind: ReactionKind,
    pub guild_id: Option<Snowflake>,
    pub message_id: Snowflake,
    pub user_id: Snowflake,
    pub emoji: String,
    pub from_bot: bool,
}

impl ReactionEvent {
    /// Create a new ReactionEvent from a human user
    pub fn new(
        kind: ReactionKind,
        guild_id: Option<Snowflake>,
        message_id: Snowflake,
        user_id: Snowflake,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            guild_id,
            message_id,
            user_id,
            emoji: emoji.into(),
            from_bot: false,
        }
    }

    /// Mark the event as coming from a bot account
    pub fn with_bot(mut self, from_bot: bool) -> Self {
        self.from_bot = from_bot;
        self
    }

    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }

    /// Check if this event is relevant to a tracker for `guild_id` and `emoji`
    pub fn concerns(&self, guild_id: Snowflake, emoji: &str) -> bool {
        !self.from_bot && self.guild_id == Some(guild_id) && self.is_emoji(emoji)
    }
}
