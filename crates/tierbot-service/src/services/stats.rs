//! Stats service
//!
//! Read-only view of a user's progress. Takes no locks and never touches
//! roles.

use tierbot_core::Snowflake;
use tracing::instrument;

use crate::dto::{NextTierEntry, StatsReport, TierProgressEntry};

use super::context::ServiceContext;
use super::resolver::{next_tier, resolve_tier, tier_progress};

/// Stats service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the progress report for a user
    #[instrument(skip(self))]
    pub async fn report(&self, user_id: Snowflake) -> StatsReport {
        let count = self.ctx.store().load().await.unique_count(user_id);
        let tiers = self.ctx.tiers();

        StatsReport {
            user_id: user_id.to_string(),
            unique_count: count,
            current_tier: resolve_tier(count, tiers).map(|t| t.name.clone()),
            tiers: tier_progress(count, tiers)
                .into_iter()
                .map(|p| TierProgressEntry {
                    name: p.tier.name.clone(),
                    threshold: p.tier.threshold,
                    achieved: p.achieved,
                })
                .collect(),
            next: next_tier(count, tiers).map(|n| NextTierEntry {
                name: n.tier.name.clone(),
                remaining: n.remaining,
            }),
        }
    }
}
