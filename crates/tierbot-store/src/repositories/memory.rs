//! In-memory ledger store

use async_trait::async_trait;
use tierbot_core::{Ledger, LedgerStore, RepoResult};
use tokio::sync::RwLock;

/// Ledger store kept entirely in memory
///
/// Used by tests and for dry runs where nothing should touch the disk.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    ledger: RwLock<Ledger>,
}

impl MemoryLedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the currently stored ledger
    pub async fn snapshot(&self) -> Ledger {
        self.ledger.read().await.clone()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn load(&self) -> Ledger {
        self.snapshot().await
    }

    async fn save(&self, ledger: &Ledger) -> RepoResult<()> {
        *self.ledger.write().await = ledger.clone();
        Ok(())
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}
