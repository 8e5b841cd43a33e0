//! Serenity event handler
//!
//! Thin adapter that forwards each gateway event to its handler module.

use serenity::all::{Context, EventHandler, Interaction, Reaction, Ready};
use serenity::async_trait;
use tierbot_core::ReactionKind;

use super::BotState;
use crate::handlers;

pub struct Handler {
    state: BotState,
}

impl Handler {
    pub fn new(state: BotState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        handlers::ready::handle(&ctx, &self.state, &ready).await;
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        handlers::reaction::handle(&ctx, &self.state, &reaction, ReactionKind::Added).await;
    }

    async fn reaction_remove(&self, ctx: Context, reaction: Reaction) {
        handlers::reaction::handle(&ctx, &self.state, &reaction, ReactionKind::Removed).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        handlers::interaction::handle(&ctx, &self.state, interaction).await;
    }
}
