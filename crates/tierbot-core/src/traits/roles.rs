//! Role mutation trait (port) - the narrow contract with the chat platform

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::RoleMutationError;
use crate::value_objects::Snowflake;

/// Result type for role mutations
pub type RoleResult<T> = Result<T, RoleMutationError>;

/// Reads and changes the roles of guild members
///
/// Implementations are scoped to a single guild.
#[async_trait]
pub trait RoleMutator: Send + Sync {
    /// Roles the member currently holds
    async fn current_roles(&self, member_id: Snowflake) -> RoleResult<HashSet<Snowflake>>;

    /// Grant a role; `reason` is recorded in the audit log
    async fn add_role(&self, member_id: Snowflake, role_id: Snowflake, reason: &str)
        -> RoleResult<()>;

    /// Revoke a role; `reason` is recorded in the audit log
    async fn remove_role(
        &self,
        member_id: Snowflake,
        role_id: Snowflake,
        reason: &str,
    ) -> RoleResult<()>;
}
