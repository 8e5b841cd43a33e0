//! # tierbot-core
//!
//! Domain layer containing the tier table, the reaction ledger, value objects,
//! and the collaborator traits. This crate has zero dependencies on
//! infrastructure (file system, chat platform SDK, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Ledger, ReactionEvent, ReactionKind, ResetOutcome, TierDefinition, TierTable,
};
pub use error::{DomainError, RoleMutationError};
pub use traits::{LedgerStore, RepoResult, RoleMutator, RoleResult};
pub use value_objects::{Snowflake, SnowflakeParseError};
