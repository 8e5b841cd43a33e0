//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use tierbot_common::AppError;
use tierbot_core::{DomainError, RoleMutationError};

/// Service layer error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Domain rule violation or storage failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The chat platform refused or failed a role operation
    #[error(transparent)]
    RoleMutation(#[from] RoleMutationError),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the error code for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::RoleMutation(RoleMutationError::Permission(_)) => "ROLE_PERMISSION",
            Self::RoleMutation(RoleMutationError::Network(_)) => "ROLE_NETWORK",
            Self::RoleMutation(RoleMutationError::MemberNotFound(_)) => "UNKNOWN_MEMBER",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(DomainError::StorageError(msg)) => AppError::Storage(msg),
            ServiceError::Domain(DomainError::MemberNotFound(id))
            | ServiceError::RoleMutation(RoleMutationError::MemberNotFound(id)) => {
                AppError::MemberNotFound(id.to_string())
            }
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::RoleMutation(e) => AppError::RoleMutation(e),
            ServiceError::Validation(msg) => AppError::InvalidInput(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
