//! Domain entities - core business objects

mod ledger;
mod reaction;
mod tier;

pub use ledger::{Ledger, ResetOutcome};
pub use reaction::{ReactionEvent, ReactionKind};
pub use tier::{TierDefinition, TierTable};
