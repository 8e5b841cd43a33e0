//! Role mutation errors raised by the chat platform boundary

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Failure of a single role add/remove/fetch against the platform
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleMutationError {
    #[error("Missing permission to manage roles: {0}")]
    Permission(String),

    #[error("Network error while updating roles: {0}")]
    Network(String),

    #[error("Member not found: {0}")]
    MemberNotFound(Snowflake),
}

impl RoleMutationError {
    /// Whether retrying the same call later could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
