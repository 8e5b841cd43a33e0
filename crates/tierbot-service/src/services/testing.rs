//! Test fixtures shared by the service tests

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tierbot_core::{
    LedgerStore, RoleMutationError, RoleMutator, RoleResult, Snowflake, TierDefinition, TierTable,
};
use tierbot_store::MemoryLedgerStore;

use super::context::{ServiceContext, ServiceContextBuilder};

pub const GUILD: Snowflake = Snowflake::new(10);
pub const TRACK_EMOJI: &str = "⭐";
pub const BRONZE: Snowflake = Snowflake::new(1001);
pub const SILVER: Snowflake = Snowflake::new(1002);
pub const GOLD: Snowflake = Snowflake::new(1003);

pub fn bronze_silver_gold() -> TierTable {
    TierTable::new(vec![
        TierDefinition::new("Bronze", 5, BRONZE),
        TierDefinition::new("Silver", 20, SILVER),
        TierDefinition::new("Gold", 50, GOLD),
    ])
    .unwrap()
}

/// In-memory role mutator that records every call
#[derive(Debug, Default)]
pub struct RecordingRoles {
    members: Mutex<HashMap<Snowflake, HashSet<Snowflake>>>,
    missing: Mutex<HashSet<Snowflake>>,
    remove_error: Mutex<Option<RoleMutationError>>,
    remove_errors_for: Mutex<HashMap<Snowflake, RoleMutationError>>,
    add_error: Mutex<Option<RoleMutationError>>,
    calls: Mutex<usize>,
}

impl RecordingRoles {
    pub fn give(&self, member: Snowflake, roles: &[Snowflake]) {
        self.members
            .lock()
            .unwrap()
            .entry(member)
            .or_default()
            .extend(roles.iter().copied());
    }

    pub fn held(&self, member: Snowflake) -> HashSet<Snowflake> {
        self.members
            .lock()
            .unwrap()
            .get(&member)
            .cloned()
            .unwrap_or_default()
    }

    pub fn forget(&self, member: Snowflake) {
        self.missing.lock().unwrap().insert(member);
    }

    pub fn fail_removals(&self, error: RoleMutationError) {
        *self.remove_error.lock().unwrap() = Some(error);
    }

    /// Fail removals of one role only
    pub fn fail_removal_of(&self, role: Snowflake, error: RoleMutationError) {
        self.remove_errors_for.lock().unwrap().insert(role, error);
    }

    pub fn fail_adds(&self, error: RoleMutationError) {
        *self.add_error.lock().unwrap() = Some(error);
    }

    pub fn mutation_calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl RoleMutator for RecordingRoles {
    async fn current_roles(&self, member_id: Snowflake) -> RoleResult<HashSet<Snowflake>> {
        if self.missing.lock().unwrap().contains(&member_id) {
            return Err(RoleMutationError::MemberNotFound(member_id));
        }
        Ok(self.held(member_id))
    }

    async fn add_role(&self, member_id: Snowflake, role_id: Snowflake, _: &str) -> RoleResult<()> {
        *self.calls.lock().unwrap() += 1;
        if let Some(err) = self.add_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.give(member_id, &[role_id]);
        Ok(())
    }

    async fn remove_role(
        &self,
        member_id: Snowflake,
        role_id: Snowflake,
        _: &str,
    ) -> RoleResult<()> {
        *self.calls.lock().unwrap() += 1;
        if let Some(err) = self.remove_error.lock().unwrap().clone() {
            return Err(err);
        }
        if let Some(err) = self.remove_errors_for.lock().unwrap().get(&role_id).cloned() {
            return Err(err);
        }
        if let Some(held) = self.members.lock().unwrap().get_mut(&member_id) {
            held.remove(&role_id);
        }
        Ok(())
    }
}

/// Context over an in-memory store and a recording role mutator
pub fn context_with(
    tiers: TierTable,
) -> (ServiceContext, Arc<MemoryLedgerStore>, Arc<RecordingRoles>) {
    let store = Arc::new(MemoryLedgerStore::new());
    let roles = Arc::new(RecordingRoles::default());
    let ctx = ServiceContextBuilder::new()
        .store(store.clone())
        .roles(roles.clone())
        .tiers(tiers)
        .guild_id(GUILD)
        .track_emoji(TRACK_EMOJI)
        .build()
        .unwrap();
    (ctx, store, roles)
}

/// Give `user` reactions on `count` freshly tracked messages
pub async fn seed_reactions(store: &MemoryLedgerStore, user: Snowflake, count: u64) {
    let mut ledger = store.load().await;
    let base = 10_000 + ledger.tracked_messages().len() as u64;
    for offset in 0..count {
        let message = Snowflake::new(base + offset);
        ledger.start_tracking(message);
        ledger.record_reaction(user, message);
    }
    store.save(&ledger).await.unwrap();
}
