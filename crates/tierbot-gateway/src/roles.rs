//! Serenity-backed role mutator

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{GuildId, Http, HttpError, RoleId, UserId};
use tierbot_core::{RoleMutationError, RoleMutator, RoleResult, Snowflake};

use crate::events::snowflake;

/// Discord JSON error code for an unknown member
const UNKNOWN_MEMBER: isize = 10007;
/// Discord JSON error code for missing permissions
const MISSING_PERMISSIONS: isize = 50013;

/// Applies tier roles through the Discord REST API
///
/// Every call carries an audit-log reason.
#[derive(Clone)]
pub struct SerenityRoleMutator {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl SerenityRoleMutator {
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

impl std::fmt::Debug for SerenityRoleMutator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerenityRoleMutator")
            .field("guild_id", &self.guild_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RoleMutator for SerenityRoleMutator {
    async fn current_roles(&self, member_id: Snowflake) -> RoleResult<HashSet<Snowflake>> {
        let member = self
            .http
            .get_member(self.guild_id, UserId::new(member_id.into_inner()))
            .await
            .map_err(|e| map_error(member_id, e))?;
        Ok(member.roles.iter().copied().map(snowflake).collect())
    }

    async fn add_role(
        &self,
        member_id: Snowflake,
        role_id: Snowflake,
        reason: &str,
    ) -> RoleResult<()> {
        self.http
            .add_member_role(
                self.guild_id,
                UserId::new(member_id.into_inner()),
                RoleId::new(role_id.into_inner()),
                Some(reason),
            )
            .await
            .map_err(|e| map_error(member_id, e))
    }

    async fn remove_role(
        &self,
        member_id: Snowflake,
        role_id: Snowflake,
        reason: &str,
    ) -> RoleResult<()> {
        self.http
            .remove_member_role(
                self.guild_id,
                UserId::new(member_id.into_inner()),
                RoleId::new(role_id.into_inner()),
                Some(reason),
            )
            .await
            .map_err(|e| map_error(member_id, e))
    }
}

fn map_error(member_id: Snowflake, err: serenity::Error) -> RoleMutationError {
    if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
        return classify(
            member_id,
            response.status_code.as_u16(),
            response.error.code,
            &response.error.message,
        );
    }
    RoleMutationError::Network(err.to_string())
}

/// Map a rejected Discord request onto a role mutation error
fn classify(member_id: Snowflake, status: u16, code: isize, message: &str) -> RoleMutationError {
    match (status, code) {
        (_, UNKNOWN_MEMBER) => RoleMutationError::MemberNotFound(member_id),
        (403, _) | (_, MISSING_PERMISSIONS) => RoleMutationError::Permission(message.to_string()),
        _ => RoleMutationError::Network(format!("HTTP {status} ({code}): {message}")),
    }
}
