//! Response DTOs
//!
//! All DTOs implement `Serialize`. Snowflake ids are serialized as strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Tier Reports
// ============================================================================

/// One row of the stats checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierProgressEntry {
    pub name: String,
    pub threshold: u64,
    pub achieved: bool,
}

/// Next tier goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextTierEntry {
    pub name: String,
    pub remaining: u64,
}

/// Read-only progress report for a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    pub user_id: String,
    pub unique_count: u64,
    pub current_tier: Option<String>,
    /// Ascending by threshold
    pub tiers: Vec<TierProgressEntry>,
    pub next: Option<NextTierEntry>,
}

impl StatsReport {
    /// True once the highest tier is reached
    pub fn is_max_tier(&self) -> bool {
        self.next.is_none()
    }
}

/// Whether a reconciliation touched the member's roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleStatus {
    /// At least one role change was applied
    Updated,
    /// Roles already matched the tier
    Correct,
    /// Changes were needed but every attempt failed
    Failed,
    /// The member's roles could not be read, so nothing was attempted
    Skipped,
}

impl RoleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Updated => "UPDATED",
            Self::Correct => "CORRECT",
            Self::Failed => "FAILED",
            Self::Skipped => "SKIPPED",
        }
    }
}

/// Result of a forced tier check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierCheckReport {
    pub user_id: String,
    pub unique_count: u64,
    /// Tier display name, "None" below every threshold
    pub tier: String,
    pub status: RoleStatus,
    pub failed_steps: usize,
}

/// Result of resetting a user's reactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetReport {
    pub user_id: String,
    pub removed: usize,
    pub remaining: usize,
    pub full_reset: bool,
    pub tier: String,
    pub status: RoleStatus,
}

/// Result of starting to track a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingReport {
    pub message_id: String,
    pub newly_tracked: bool,
    pub tracked_total: usize,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub ledger_store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                ledger_store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
