//! Bot state
//!
//! Shared by every event handler invocation.

use std::sync::Arc;

use serenity::all::{GuildId, ReactionType};
use tierbot_service::ServiceContext;

/// Bot application state
#[derive(Clone)]
pub struct BotState {
    /// Service context with the ledger store, tier table and role mutator
    service_context: Arc<ServiceContext>,
    /// Reaction the bot places on newly tracked messages
    track_reaction: ReactionType,
    track_emoji_display: String,
    guild_id: GuildId,
    activity: String,
}

impl BotState {
    pub fn new(
        service_context: ServiceContext,
        track_reaction: ReactionType,
        guild_id: GuildId,
        activity: impl Into<String>,
    ) -> Self {
        let track_emoji_display = track_reaction.to_string();
        Self {
            service_context: Arc::new(service_context),
            track_reaction,
            track_emoji_display,
            guild_id,
            activity: activity.into(),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn track_reaction(&self) -> &ReactionType {
        &self.track_reaction
    }

    /// The tracked emoji as it renders in a message
    pub fn track_emoji_display(&self) -> &str {
        &self.track_emoji_display
    }

    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }
}
