//! Ports - interfaces the domain needs from the outside world

mod repositories;
mod roles;

pub use repositories::{LedgerStore, RepoResult};
pub use roles::{RoleMutator, RoleResult};
