//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Tier Table Errors
    // =========================================================================
    #[error("Tier table must contain at least one tier")]
    EmptyTierTable,

    #[error("Tier name must not be empty")]
    EmptyTierName,

    #[error("Duplicate tier threshold: {0}")]
    DuplicateThreshold(u64),

    #[error("Duplicate tier name: {0}")]
    DuplicateTierName(String),

    #[error("Role {0} is assigned to more than one tier")]
    DuplicateTierRole(Snowflake),

    // =========================================================================
    // Tracking Errors
    // =========================================================================
    #[error("Message not found: {0}")]
    MessageNotFound(Snowflake),

    #[error("Member not found: {0}")]
    MemberNotFound(Snowflake),

    #[error("Cannot react to message {0}")]
    CannotReact(Snowflake),

    // =========================================================================
    // Invariant Violations
    // =========================================================================
    #[error("Role plan for {0} would leave more than one tier role")]
    TierExclusivityViolated(Snowflake),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl DomainError {
    /// Get an error code string for logs and replies
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyTierTable => "EMPTY_TIER_TABLE",
            Self::EmptyTierName => "EMPTY_TIER_NAME",
            Self::DuplicateThreshold(_) => "DUPLICATE_THRESHOLD",
            Self::DuplicateTierName(_) => "DUPLICATE_TIER_NAME",
            Self::DuplicateTierRole(_) => "DUPLICATE_TIER_ROLE",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::CannotReact(_) => "CANNOT_REACT",
            Self::TierExclusivityViolated(_) => "TIER_EXCLUSIVITY_VIOLATED",
            Self::StorageError(_) => "STORAGE_ERROR",
        }
    }

    /// Check if this is a tier configuration error
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::EmptyTierTable
                | Self::EmptyTierName
                | Self::DuplicateThreshold(_)
                | Self::DuplicateTierName(_)
                | Self::DuplicateTierRole(_)
        )
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MessageNotFound(_) | Self::MemberNotFound(_))
    }

    /// Check if this error came from a tracking target that could not be used
    pub fn is_tracking_target(&self) -> bool {
        matches!(self, Self::MessageNotFound(_) | Self::CannotReact(_))
    }
}
