//! Ledger service
//!
//! Every mutation loads the whole ledger, changes it and saves it back while
//! holding the context's writer lock.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tierbot_core::{ReactionEvent, ReactionKind, ResetOutcome, Snowflake};
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Ledger service
pub struct LedgerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LedgerService<'a> {
    /// Create a new LedgerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mark a message as tracked
    ///
    /// Returns the number of tracked messages after the call and whether the
    /// message was newly added. Tracking an already tracked message does not
    /// touch storage.
    #[instrument(skip(self))]
    pub async fn start_tracking(&self, message_id: Snowflake) -> ServiceResult<(bool, usize)> {
        let _guard = self.ctx.lock_ledger().await;
        let mut ledger = self.ctx.store().load().await;

        let added = ledger.start_tracking(message_id);
        if added {
            self.ctx.store().save(&ledger).await?;
            info!(message_id = %message_id, "Started tracking message");
        }

        Ok((added, ledger.tracked_messages().len()))
    }

    /// Apply a reaction event to the ledger
    ///
    /// Events from bots, other guilds or other emojis are ignored. Returns
    /// true when the reacting user's unique count changed.
    #[instrument(skip(self, event), fields(user_id = %event.user_id, message_id = %event.message_id))]
    pub async fn apply_reaction(&self, event: &ReactionEvent) -> ServiceResult<bool> {
        if !event.concerns(self.ctx.guild_id(), self.ctx.track_emoji()) {
            return Ok(false);
        }

        let _guard = self.ctx.lock_ledger().await;
        let mut ledger = self.ctx.store().load().await;

        let changed = match event.kind {
            ReactionKind::Added => ledger.record_reaction(event.user_id, event.message_id),
            ReactionKind::Removed => {
                ledger.is_tracked(event.message_id)
                    && ledger.remove_reaction(event.user_id, event.message_id)
            }
        };

        if changed {
            self.ctx.store().save(&ledger).await?;
            debug!(
                kind = ?event.kind,
                count = ledger.unique_count(event.user_id),
                "Reaction ledger updated"
            );
        }

        Ok(changed)
    }

    /// Current unique-reaction count for a user
    pub async fn unique_count(&self, user_id: Snowflake) -> u64 {
        self.ctx.store().load().await.unique_count(user_id)
    }

    /// Reset a user's reactions using a fresh random source
    pub async fn reset_user(
        &self,
        user_id: Snowflake,
        amount: Option<usize>,
    ) -> ServiceResult<ResetOutcome> {
        let mut rng = StdRng::from_entropy();
        self.reset_user_with(user_id, amount, &mut rng).await
    }

    /// Reset a user's reactions, sampling partial removals from `rng`
    #[instrument(skip(self, rng))]
    pub async fn reset_user_with<R>(
        &self,
        user_id: Snowflake,
        amount: Option<usize>,
        rng: &mut R,
    ) -> ServiceResult<ResetOutcome>
    where
        R: Rng + Send + ?Sized,
    {
        let _guard = self.ctx.lock_ledger().await;
        let mut ledger = self.ctx.store().load().await;

        let outcome = ledger.reset_user(user_id, amount, rng);
        if outcome.removed > 0 {
            self.ctx.store().save(&ledger).await?;
        }

        info!(
            removed = outcome.removed,
            remaining = outcome.remaining,
            "User reactions reset"
        );
        Ok(outcome)
    }
}
