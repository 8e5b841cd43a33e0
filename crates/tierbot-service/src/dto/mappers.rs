//! Outcome to DTO mappers

use tierbot_core::{ResetOutcome, Snowflake};

use super::responses::{ResetReport, RoleStatus, TierCheckReport, TrackingReport};
use crate::services::ReconcileOutcome;

impl From<&ReconcileOutcome> for RoleStatus {
    fn from(outcome: &ReconcileOutcome) -> Self {
        if outcome.roles_skipped() {
            Self::Skipped
        } else if outcome.changed() {
            Self::Updated
        } else if outcome.failures.is_empty() {
            Self::Correct
        } else {
            Self::Failed
        }
    }
}

impl From<&ReconcileOutcome> for TierCheckReport {
    fn from(outcome: &ReconcileOutcome) -> Self {
        Self {
            user_id: outcome.member_id.to_string(),
            unique_count: outcome.unique_count,
            tier: outcome.tier_name().to_string(),
            status: RoleStatus::from(outcome),
            failed_steps: outcome.failures.len(),
        }
    }
}

impl ResetReport {
    /// Combine a ledger reset with the reconciliation that followed it
    pub fn new(reset: ResetOutcome, outcome: &ReconcileOutcome) -> Self {
        Self {
            user_id: outcome.member_id.to_string(),
            removed: reset.removed,
            remaining: reset.remaining,
            full_reset: reset.remaining == 0,
            tier: outcome.tier_name().to_string(),
            status: RoleStatus::from(outcome),
        }
    }
}

impl TrackingReport {
    pub fn new(message_id: Snowflake, newly_tracked: bool, tracked_total: usize) -> Self {
        Self {
            message_id: message_id.to_string(),
            newly_tracked,
            tracked_total,
        }
    }
}
