//! Health check handlers
//!
//! Endpoints for the keep-alive ping and liveness/readiness checks.

use axum::{extract::State, http::StatusCode, Json};
use tierbot_service::{HealthResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// Keep-alive ping
///
/// GET /
pub async fn alive() -> &'static str {
    "tierbot is alive"
}

/// Basic health check (liveness check)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let store_healthy = match state.service_context().store().health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Ledger store health check failed");
            false
        }
    };

    let response = ReadinessResponse::ready(store_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
