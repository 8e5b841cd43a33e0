//! Gateway event handlers
//!
//! One module per event kind. Handlers never propagate errors back into
//! serenity; failures are logged and, for commands, answered with an embed.

mod error;
pub mod interaction;
pub mod reaction;
pub mod ready;

pub use error::log_failure;
