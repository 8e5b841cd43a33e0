//! Business logic services
//!
//! Ledger mutations, pure tier resolution, role reconciliation and the
//! read-only stats view.

pub mod context;
pub mod error;
pub mod ledger;
pub mod resolver;
pub mod stats;
pub mod tier;

#[cfg(test)]
mod testing;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use ledger::LedgerService;
pub use resolver::{
    next_tier, reconcile_roles, resolve_tier, tier_progress, NextTier, RoleReconciliation,
    TierProgress,
};
pub use stats::StatsService;
pub use tier::{ReconcileOutcome, RoleStep, RoleStepFailure, TierService};
