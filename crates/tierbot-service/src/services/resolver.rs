//! Tier resolution
//!
//! Pure functions mapping a unique-reaction count onto the tier table and
//! planning the role changes needed to match it. Nothing here performs I/O;
//! applying a plan is [`TierService`](super::TierService)'s job.

use std::collections::HashSet;

use tierbot_core::{Snowflake, TierDefinition, TierTable};

/// Highest tier whose threshold is at most `count`
///
/// Returns `None` when the count is below every threshold.
pub fn resolve_tier(count: u64, tiers: &TierTable) -> Option<&TierDefinition> {
    tiers.iter().find(|tier| tier.is_reached_by(count))
}

/// Role changes that bring a member in line with their tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleReconciliation<'a> {
    /// Tier the member qualifies for
    pub target: Option<&'a TierDefinition>,
    /// Tier roles held that are not the target's, sorted
    pub roles_to_remove: Vec<Snowflake>,
    /// Target's role when not already held
    pub role_to_add: Option<Snowflake>,
}

impl RoleReconciliation<'_> {
    /// True when applying the plan would mutate anything
    pub fn changed(&self) -> bool {
        !self.roles_to_remove.is_empty() || self.role_to_add.is_some()
    }

    /// The role being added is never also removed, and no removed role is
    /// the target's; applying the plan leaves at most one tier role.
    pub fn is_exclusive(&self) -> bool {
        let target_role = self.target.map(|t| t.role_id);
        let add_ok = match self.role_to_add {
            Some(role) => !self.roles_to_remove.contains(&role) && Some(role) == target_role,
            None => true,
        };
        let remove_ok = target_role.is_none_or(|role| !self.roles_to_remove.contains(&role));
        add_ok && remove_ok
    }

    /// Display name of the target tier
    pub fn tier_name(&self) -> Option<&str> {
        self.target.map(|t| t.name.as_str())
    }
}

/// Plan the role changes for a member holding `current` with `count` reactions
pub fn reconcile_roles<'a>(
    current: &HashSet<Snowflake>,
    tiers: &'a TierTable,
    count: u64,
) -> RoleReconciliation<'a> {
    let target = resolve_tier(count, tiers);
    let target_role = target.map(|t| t.role_id);

    let mut roles_to_remove: Vec<Snowflake> = current
        .iter()
        .copied()
        .filter(|role| tiers.contains_role(*role) && Some(*role) != target_role)
        .collect();
    roles_to_remove.sort_unstable();

    let role_to_add = target_role.filter(|role| !current.contains(role));

    RoleReconciliation {
        target,
        roles_to_remove,
        role_to_add,
    }
}

/// The next tier to reach and how many more reactions it takes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextTier<'a> {
    pub tier: &'a TierDefinition,
    pub remaining: u64,
}

/// Lowest tier not yet reached, or `None` once the highest is achieved
pub fn next_tier(count: u64, tiers: &TierTable) -> Option<NextTier<'_>> {
    tiers
        .ascending()
        .find(|tier| !tier.is_reached_by(count))
        .map(|tier| NextTier {
            tier,
            remaining: tier.threshold - count,
        })
}

/// A tier together with whether `count` reaches it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierProgress<'a> {
    pub tier: &'a TierDefinition,
    pub achieved: bool,
}

/// Every tier in ascending threshold order, flagged as achieved or not
pub fn tier_progress(count: u64, tiers: &TierTable) -> Vec<TierProgress<'_>> {
    tiers
        .ascending()
        .map(|tier| TierProgress {
            tier,
            achieved: tier.is_reached_by(count),
        })
        .collect()
}
