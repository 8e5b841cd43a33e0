//! Test fixtures
//!
//! Tier tables and a role mutator that records what the services asked for.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tierbot_core::{
    ReactionEvent, ReactionKind, RoleMutationError, RoleMutator, RoleResult, Snowflake,
    TierDefinition, TierTable,
};

pub const GUILD: Snowflake = Snowflake::new(900);
pub const TRACK_EMOJI: &str = "⭐";

pub const BRONZE: Snowflake = Snowflake::new(5001);
pub const SILVER: Snowflake = Snowflake::new(5002);
pub const GOLD: Snowflake = Snowflake::new(5003);

/// Bronze at 5, Silver at 20, Gold at 50
pub fn standard_tiers() -> TierTable {
    TierTable::new(vec![
        TierDefinition::new("Bronze", 5, BRONZE),
        TierDefinition::new("Silver", 20, SILVER),
        TierDefinition::new("Gold", 50, GOLD),
    ])
    .expect("valid tier table")
}

/// Message ids used as tracked targets, starting at 10_000
pub fn message(n: u64) -> Snowflake {
    Snowflake::new(10_000 + n)
}

/// A tracked-emoji reaction from a human in the managed guild
pub fn star(kind: ReactionKind, user: Snowflake, message: Snowflake) -> ReactionEvent {
    ReactionEvent::new(kind, Some(GUILD), message, user, TRACK_EMOJI)
}

/// Role mutator backed by an in-memory member table
///
/// Unknown members are reported as `MemberNotFound`, like the platform does.
#[derive(Default)]
pub struct FakeGuild {
    members: Mutex<HashMap<Snowflake, HashSet<Snowflake>>>,
    mutations: AtomicUsize,
    deny_mutations: Mutex<bool>,
}

impl FakeGuild {
    /// Add a member holding `roles`
    pub fn join(&self, member: Snowflake, roles: &[Snowflake]) {
        self.members
            .lock()
            .unwrap()
            .insert(member, roles.iter().copied().collect());
    }

    /// Drop a member, as if they left the server
    pub fn leave(&self, member: Snowflake) {
        self.members.lock().unwrap().remove(&member);
    }

    pub fn roles_of(&self, member: Snowflake) -> HashSet<Snowflake> {
        self.members
            .lock()
            .unwrap()
            .get(&member)
            .cloned()
            .unwrap_or_default()
    }

    /// Every add/remove call that reached the platform, successful or not
    pub fn mutations(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    /// Make every add/remove fail with a permission error
    pub fn deny_mutations(&self) {
        *self.deny_mutations.lock().unwrap() = true;
    }

    fn check_mutation(&self, member: Snowflake) -> RoleResult<()> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        if *self.deny_mutations.lock().unwrap() {
            return Err(RoleMutationError::Permission("Missing Permissions".to_string()));
        }
        if !self.members.lock().unwrap().contains_key(&member) {
            return Err(RoleMutationError::MemberNotFound(member));
        }
        Ok(())
    }
}

#[async_trait]
impl RoleMutator for FakeGuild {
    async fn current_roles(&self, member: Snowflake) -> RoleResult<HashSet<Snowflake>> {
        self.members
            .lock()
            .unwrap()
            .get(&member)
            .cloned()
            .ok_or(RoleMutationError::MemberNotFound(member))
    }

    async fn add_role(&self, member: Snowflake, role: Snowflake, _reason: &str) -> RoleResult<()> {
        self.check_mutation(member)?;
        if let Some(roles) = self.members.lock().unwrap().get_mut(&member) {
            roles.insert(role);
        }
        Ok(())
    }

    async fn remove_role(
        &self,
        member: Snowflake,
        role: Snowflake,
        _reason: &str,
    ) -> RoleResult<()> {
        self.check_mutation(member)?;
        if let Some(held) = self.members.lock().unwrap().get_mut(&member) {
            held.remove(&role);
        }
        Ok(())
    }
}
