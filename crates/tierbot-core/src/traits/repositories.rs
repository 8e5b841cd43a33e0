//! Ledger store trait (port) - defines the interface for ledger persistence
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (a JSON file today). Swapping the backend for
//! an embedded key-value store must not touch tier resolution.

use async_trait::async_trait;

use crate::entities::Ledger;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Load the full ledger
    ///
    /// Never fails: a missing store is created empty, and an unreadable one
    /// degrades to an empty in-memory ledger after logging the cause.
    async fn load(&self) -> Ledger;

    /// Persist the full ledger, replacing any previous content
    async fn save(&self, ledger: &Ledger) -> RepoResult<()>;

    /// Check that the backing store is reachable and readable
    async fn health_check(&self) -> RepoResult<()>;
}
