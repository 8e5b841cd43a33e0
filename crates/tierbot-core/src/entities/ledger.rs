//! Reaction ledger - the aggregate of tracked messages and per-user reactions
//!
//! The ledger is loaded and persisted as a single unit. Tier state is never
//! stored here: it is always re-derived from [`Ledger::unique_count`].

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use crate::value_objects::Snowflake;

/// Result of resetting a user's tracked reactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetOutcome {
    pub removed: usize,
    pub remaining: usize,
}

/// Tracked messages plus, per user, the tracked messages they reacted to
///
/// Records may reference message ids that are no longer in the tracked set;
/// such entries are tolerated and still counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    /// Tracked message ids, in the order tracking started
    tracked: Vec<Snowflake>,
    /// Per-user record; a user with no reactions has no entry
    users: BTreeMap<Snowflake, BTreeSet<Snowflake>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted parts
    ///
    /// Duplicate tracked ids are collapsed and empty user records dropped so
    /// the "absent == zero" invariant holds after loading.
    pub fn from_parts(
        tracked: impl IntoIterator<Item = Snowflake>,
        users: impl IntoIterator<Item = (Snowflake, BTreeSet<Snowflake>)>,
    ) -> Self {
        let mut ledger = Self::new();
        for message_id in tracked {
            ledger.start_tracking(message_id);
        }
        ledger.users = users
            .into_iter()
            .filter(|(_, record)| !record.is_empty())
            .collect();
        ledger
    }

    /// Start tracking a message; returns true if it was not tracked before
    pub fn start_tracking(&mut self, message_id: Snowflake) -> bool {
        if self.is_tracked(message_id) {
            return false;
        }
        self.tracked.push(message_id);
        true
    }

    /// Check if a message is tracked
    #[inline]
    pub fn is_tracked(&self, message_id: Snowflake) -> bool {
        self.tracked.contains(&message_id)
    }

    /// Tracked message ids in tracking order
    pub fn tracked_messages(&self) -> &[Snowflake] {
        &self.tracked
    }

    /// Record a tracked-emoji reaction
    ///
    /// Returns true only for a new (user, message) pair on a tracked message;
    /// that is the signal that the user's count changed.
    pub fn record_reaction(&mut self, user_id: Snowflake, message_id: Snowflake) -> bool {
        if !self.is_tracked(message_id) {
            return false;
        }
        self.users.entry(user_id).or_default().insert(message_id)
    }

    /// Remove a tracked-emoji reaction
    ///
    /// Returns true only if the pair was present. A record emptied by the
    /// removal is dropped entirely.
    pub fn remove_reaction(&mut self, user_id: Snowflake, message_id: Snowflake) -> bool {
        let Some(record) = self.users.get_mut(&user_id) else {
            return false;
        };
        let removed = record.remove(&message_id);
        if record.is_empty() {
            self.users.remove(&user_id);
        }
        removed
    }

    /// Number of distinct tracked messages the user has reacted to
    pub fn unique_count(&self, user_id: Snowflake) -> u64 {
        self.users.get(&user_id).map_or(0, |r| r.len() as u64)
    }

    /// Messages the user has an active reaction on
    pub fn reactions_of(&self, user_id: Snowflake) -> Option<&BTreeSet<Snowflake>> {
        self.users.get(&user_id)
    }

    /// Iterate all non-empty user records
    pub fn users(&self) -> impl Iterator<Item = (&Snowflake, &BTreeSet<Snowflake>)> {
        self.users.iter()
    }

    /// Number of users with at least one recorded reaction
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Reset a user's reactions
    ///
    /// With no amount, or an amount at least the current count, the record
    /// is removed entirely. Otherwise exactly `amount` entries are removed,
    /// sampled uniformly from `rng`; which entries go is arbitrary.
    pub fn reset_user<R>(
        &mut self,
        user_id: Snowflake,
        amount: Option<usize>,
        rng: &mut R,
    ) -> ResetOutcome
    where
        R: Rng + ?Sized,
    {
        let current = self.users.get(&user_id).map_or(0, BTreeSet::len);

        match amount {
            Some(amount) if amount < current => {
                let Some(record) = self.users.get_mut(&user_id) else {
                    return ResetOutcome {
                        removed: 0,
                        remaining: 0,
                    };
                };
                let entries: Vec<Snowflake> = record.iter().copied().collect();
                for index in rand::seq::index::sample(rng, entries.len(), amount) {
                    record.remove(&entries[index]);
                }
                ResetOutcome {
                    removed: amount,
                    remaining: record.len(),
                }
            }
            _ => {
                self.users.remove(&user_id);
                ResetOutcome {
                    removed: current,
                    remaining: 0,
                }
            }
        }
    }
}
