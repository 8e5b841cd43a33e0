//! Startup error types

use thiserror::Error;
use tierbot_service::ServiceError;

/// Errors that stop the bot from starting or keep it from staying connected
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("TRACK_EMOJI is not a valid emoji: {0}")]
    InvalidEmoji(String),

    #[error("Failed to build service context: {0}")]
    Service(#[from] ServiceError),

    #[error("Discord client error: {0}")]
    Discord(#[from] serenity::Error),
}

pub type GatewayResult<T> = Result<T, GatewayError>;
