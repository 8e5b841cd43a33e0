//! Service context - dependency container for services
//!
//! Holds the ledger store, the tier table, the role mutator and the locks
//! that serialize ledger writes and per-member reconciliation.

use std::sync::Arc;

use dashmap::DashMap;
use tierbot_core::{LedgerStore, RoleMutator, Snowflake, TierTable};
use tokio::sync::{Mutex, MutexGuard};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every field is shared. One context exists per process
/// and is handed to the gateway handler and the HTTP state.
#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<dyn LedgerStore>,
    roles: Arc<dyn RoleMutator>,
    tiers: Arc<TierTable>,
    guild_id: Snowflake,
    track_emoji: Arc<str>,

    // The ledger is one document, so every mutation takes this lock
    write_lock: Arc<Mutex<()>>,
    member_locks: Arc<DashMap<Snowflake, Arc<Mutex<()>>>>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        store: Arc<dyn LedgerStore>,
        roles: Arc<dyn RoleMutator>,
        tiers: Arc<TierTable>,
        guild_id: Snowflake,
        track_emoji: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            store,
            roles,
            tiers,
            guild_id,
            track_emoji: track_emoji.into(),
            write_lock: Arc::new(Mutex::new(())),
            member_locks: Arc::new(DashMap::new()),
        }
    }

    /// Get the ledger store
    pub fn store(&self) -> &dyn LedgerStore {
        self.store.as_ref()
    }

    /// Get the role mutator
    pub fn roles(&self) -> &dyn RoleMutator {
        self.roles.as_ref()
    }

    /// Get the tier table
    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    /// Guild whose reactions and roles are managed
    pub fn guild_id(&self) -> Snowflake {
        self.guild_id
    }

    /// The single tracked emoji
    pub fn track_emoji(&self) -> &str {
        &self.track_emoji
    }

    /// Acquire the ledger writer lock
    pub(crate) async fn lock_ledger(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Lock handle serializing role reconciliation for one member
    pub(crate) fn member_lock(&self, member_id: Snowflake) -> Arc<Mutex<()>> {
        self.member_locks
            .entry(member_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("guild_id", &self.guild_id)
            .field("track_emoji", &self.track_emoji)
            .field("tiers", &self.tiers.len())
            .field("store", &"dyn LedgerStore")
            .field("roles", &"dyn RoleMutator")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    store: Option<Arc<dyn LedgerStore>>,
    roles: Option<Arc<dyn RoleMutator>>,
    tiers: Option<Arc<TierTable>>,
    guild_id: Option<Snowflake>,
    track_emoji: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: Arc<dyn LedgerStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn roles(mut self, roles: Arc<dyn RoleMutator>) -> Self {
        self.roles = Some(roles);
        self
    }

    pub fn tiers(mut self, tiers: TierTable) -> Self {
        self.tiers = Some(Arc::new(tiers));
        self
    }

    pub fn guild_id(mut self, guild_id: Snowflake) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    pub fn track_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.track_emoji = Some(emoji.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let track_emoji = self
            .track_emoji
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ServiceError::validation("track_emoji is required"))?;

        Ok(ServiceContext::new(
            self.store
                .ok_or_else(|| ServiceError::validation("store is required"))?,
            self.roles
                .ok_or_else(|| ServiceError::validation("roles is required"))?,
            self.tiers
                .ok_or_else(|| ServiceError::validation("tiers is required"))?,
            self.guild_id
                .ok_or_else(|| ServiceError::validation("guild_id is required"))?,
            track_emoji,
        ))
    }
}
