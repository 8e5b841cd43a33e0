//! # tierbot-gateway
//!
//! Discord delivery for tierbot: gateway event handlers, slash commands and
//! the serenity-backed role mutator.

pub mod commands;
pub mod embeds;
pub mod error;
pub mod events;
pub mod handlers;
pub mod roles;
pub mod server;

pub use error::{GatewayError, GatewayResult};
pub use server::run;
