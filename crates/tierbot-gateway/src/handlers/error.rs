//! Failure logging shared by the handlers

use tierbot_common::AppError;
use tracing::{error, warn};

/// Log a failed operation at a level matching who can fix it
///
/// Errors the invoker caused are warnings; everything else is an error with
/// the full internal text.
pub fn log_failure(operation: &str, err: &AppError) {
    if err.is_user_error() {
        warn!(operation, code = err.error_code(), error = %err, "Request rejected");
    } else {
        error!(operation, code = err.error_code(), error = ?err, "Operation failed");
    }
}
