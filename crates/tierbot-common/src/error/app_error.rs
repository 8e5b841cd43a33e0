//! Application error types
//!
//! Unified error handling for the entire application. Every variant maps to a
//! reply category shown to the invoking user; raw internal text is only ever
//! logged.

use tierbot_core::{DomainError, RoleMutationError};

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Invocation errors
    #[error("Command must be used inside the configured server")]
    NotInGuild,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Member not found: {0}")]
    MemberNotFound(String),

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Chat platform errors
    #[error(transparent)]
    RoleMutation(#[from] RoleMutationError),

    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotInGuild => "NOT_IN_GUILD",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::RoleMutation(_) => "ROLE_MUTATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if the invoking user can fix this by changing their input
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::NotInGuild | Self::InvalidInput(_) | Self::MemberNotFound(_) => true,
            Self::Domain(e) => e.is_not_found() || e.is_tracking_target(),
            _ => false,
        }
    }

    /// Message safe to show to a non-operator
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotInGuild => "This command must be run inside the server.",
            Self::InvalidInput(_) => "That input is not valid. Please check the value and try again.",
            Self::MemberNotFound(_) => "Could not find that member in this server.",
            Self::Domain(e) if e.is_tracking_target() => {
                "Make sure the ID is correct and the message is in this channel, or the bot has \
                 necessary permissions (Read Message History, Add Reactions)."
            }
            Self::Domain(e) if e.is_not_found() => "Could not find that member in this server.",
            Self::RoleMutation(_) => {
                "The bot could not update roles. Check that its role is above the tier roles."
            }
            Self::Storage(_) => "The reaction ledger could not be saved. Please try again later.",
            _ => "Something went wrong. Please try again later.",
        }
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(msg: impl std::fmt::Display) -> Self {
        Self::InvalidInput(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
