//! Tier entities - named reaction-count thresholds mapped to roles

use std::collections::HashSet;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// A single tier: reaching `threshold` unique reactions grants `role_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierDefinition {
    pub name: String,
    pub threshold: u64,
    pub role_id: Snowflake,
}

impl TierDefinition {
    /// Create a new TierDefinition
    pub fn new(name: impl Into<String>, threshold: u64, role_id: Snowflake) -> Self {
        Self {
            name: name.into(),
            threshold,
            role_id,
        }
    }

    /// Check if a unique-reaction count satisfies this tier
    #[inline]
    pub fn is_reached_by(&self, count: u64) -> bool {
        count >= self.threshold
    }
}

/// Validated tier table, sorted descending by threshold
///
/// The first entry whose threshold is satisfied is always the highest tier
/// a user qualifies for. Thresholds, names and role ids are all unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    tiers: Vec<TierDefinition>,
}

impl TierTable {
    /// Validate and sort a list of tier definitions
    pub fn new(mut tiers: Vec<TierDefinition>) -> Result<Self, DomainError> {
        if tiers.is_empty() {
            return Err(DomainError::EmptyTierTable);
        }

        let mut thresholds = HashSet::with_capacity(tiers.len());
        let mut names = HashSet::with_capacity(tiers.len());
        let mut roles = HashSet::with_capacity(tiers.len());

        for tier in &tiers {
            if tier.name.trim().is_empty() {
                return Err(DomainError::EmptyTierName);
            }
            if !thresholds.insert(tier.threshold) {
                return Err(DomainError::DuplicateThreshold(tier.threshold));
            }
            if !names.insert(tier.name.as_str()) {
                return Err(DomainError::DuplicateTierName(tier.name.clone()));
            }
            if !roles.insert(tier.role_id) {
                return Err(DomainError::DuplicateTierRole(tier.role_id));
            }
        }

        tiers.sort_by(|a, b| b.threshold.cmp(&a.threshold));
        Ok(Self { tiers })
    }

    /// Iterate tiers from highest threshold to lowest
    pub fn iter(&self) -> impl Iterator<Item = &TierDefinition> {
        self.tiers.iter()
    }

    /// Iterate tiers from lowest threshold to highest
    pub fn ascending(&self) -> impl Iterator<Item = &TierDefinition> {
        self.tiers.iter().rev()
    }

    /// Number of tiers
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Always false for a constructed table; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Set of every role id managed by the tier system
    pub fn role_ids(&self) -> HashSet<Snowflake> {
        self.tiers.iter().map(|t| t.role_id).collect()
    }

    /// Check if a role id belongs to any tier
    pub fn contains_role(&self, role_id: Snowflake) -> bool {
        self.tiers.iter().any(|t| t.role_id == role_id)
    }
}

impl<'a> IntoIterator for &'a TierTable {
    type Item = &'a TierDefinition;
    type IntoIter = std::slice::Iter<'a, TierDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiers.iter()
    }
}
