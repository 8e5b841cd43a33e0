//! # tierbot-api
//!
//! Small HTTP server kept alongside the bot so hosting platforms that poll
//! a port see the process as alive, plus liveness and readiness endpoints.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, run_server};
pub use state::AppState;
