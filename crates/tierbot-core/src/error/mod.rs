//! Domain error types

mod domain_error;
mod role_error;

pub use domain_error::DomainError;
pub use role_error::RoleMutationError;
