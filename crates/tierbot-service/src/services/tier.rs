//! Tier service
//!
//! Applies role reconciliation plans through the [`RoleMutator`] and ties
//! ledger mutations to the reconciliation that follows them.
//!
//! [`RoleMutator`]: tierbot_core::RoleMutator

use tierbot_core::{
    DomainError, ReactionEvent, ResetOutcome, RoleMutationError, Snowflake, TierDefinition,
};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::ledger::LedgerService;
use super::resolver::{reconcile_roles, resolve_tier};

/// Which part of a reconciliation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleStep {
    /// Reading the member's roles; nothing was attempted
    Fetch,
    Remove,
    Add,
}

/// A role step the platform rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleStepFailure {
    pub step: RoleStep,
    pub error: RoleMutationError,
}

/// Result of reconciling one member's tier roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub member_id: Snowflake,
    pub unique_count: u64,
    pub tier: Option<TierDefinition>,
    /// Roles actually removed
    pub removed: Vec<Snowflake>,
    /// Role actually added
    pub added: Option<Snowflake>,
    pub failures: Vec<RoleStepFailure>,
}

impl ReconcileOutcome {
    /// True when at least one role mutation succeeded
    pub fn changed(&self) -> bool {
        !self.removed.is_empty() || self.added.is_some()
    }

    /// Tier display name, `"None"` below every threshold
    pub fn tier_name(&self) -> &str {
        self.tier.as_ref().map_or("None", |t| t.name.as_str())
    }

    /// True when the member's roles could not be read, so no change was tried
    pub fn roles_skipped(&self) -> bool {
        self.failures.iter().any(|f| f.step == RoleStep::Fetch)
    }
}

/// Tier service
pub struct TierService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TierService<'a> {
    /// Create a new TierService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Bring a member's tier roles in line with their unique-reaction count
    ///
    /// Removal and addition are independent: a failure in one is logged and
    /// recorded in the outcome without skipping the other. Only reading the
    /// member's current roles can fail the whole call.
    #[instrument(skip(self))]
    pub async fn reconcile(&self, member_id: Snowflake) -> ServiceResult<ReconcileOutcome> {
        let lock = self.ctx.member_lock(member_id);
        let _guard = lock.lock().await;

        let count = self.ctx.store().load().await.unique_count(member_id);
        let current = self.ctx.roles().current_roles(member_id).await?;

        let plan = reconcile_roles(&current, self.ctx.tiers(), count);
        if !plan.is_exclusive() {
            return Err(DomainError::TierExclusivityViolated(member_id).into());
        }

        let mut outcome = ReconcileOutcome {
            member_id,
            unique_count: count,
            tier: plan.target.cloned(),
            removed: Vec::new(),
            added: None,
            failures: Vec::new(),
        };
        let reason = format!(
            "Reaction tier update: {count} unique reactions ({})",
            outcome.tier_name()
        );

        for &role_id in &plan.roles_to_remove {
            match self.ctx.roles().remove_role(member_id, role_id, &reason).await {
                Ok(()) => outcome.removed.push(role_id),
                Err(error) => {
                    warn!(error = %error, role_id = %role_id, "Failed to remove tier role");
                    outcome.failures.push(RoleStepFailure {
                        step: RoleStep::Remove,
                        error,
                    });
                }
            }
        }

        if let Some(role_id) = plan.role_to_add {
            match self.ctx.roles().add_role(member_id, role_id, &reason).await {
                Ok(()) => outcome.added = Some(role_id),
                Err(error) => {
                    warn!(error = %error, role_id = %role_id, "Failed to add tier role");
                    outcome.failures.push(RoleStepFailure {
                        step: RoleStep::Add,
                        error,
                    });
                }
            }
        }

        if outcome.changed() {
            info!(
                count,
                tier = outcome.tier_name(),
                removed = outcome.removed.len(),
                added = outcome.added.is_some(),
                "Tier roles updated"
            );
        }

        Ok(outcome)
    }

    /// Apply a reaction event and reconcile the reacting member if it counted
    pub async fn handle_reaction(
        &self,
        event: &ReactionEvent,
    ) -> ServiceResult<Option<ReconcileOutcome>> {
        if !LedgerService::new(self.ctx).apply_reaction(event).await? {
            return Ok(None);
        }
        self.reconcile(event.user_id).await.map(Some)
    }

    /// Reset a member's reactions and reconcile their roles afterwards
    ///
    /// The reset is committed before roles are touched, so a member whose
    /// roles cannot be read (for example one who left the server) still
    /// gets a reset outcome; the reconciliation records a `Fetch` failure.
    pub async fn reset_member(
        &self,
        member_id: Snowflake,
        amount: Option<usize>,
    ) -> ServiceResult<(ResetOutcome, ReconcileOutcome)> {
        let reset = LedgerService::new(self.ctx)
            .reset_user(member_id, amount)
            .await?;

        let outcome = match self.reconcile(member_id).await {
            Ok(outcome) => outcome,
            Err(ServiceError::RoleMutation(error)) => {
                warn!(member_id = %member_id, error = %error, "Reset applied but roles were not updated");
                let unique_count = reset.remaining as u64;
                ReconcileOutcome {
                    member_id,
                    unique_count,
                    tier: resolve_tier(unique_count, self.ctx.tiers()).cloned(),
                    removed: Vec::new(),
                    added: None,
                    failures: vec![RoleStepFailure {
                        step: RoleStep::Fetch,
                        error,
                    }],
                }
            }
            Err(e) => return Err(e),
        };

        Ok((reset, outcome))
    }
}
