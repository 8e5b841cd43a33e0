//! Error handling utilities for ledger stores

use std::path::Path;

use tierbot_core::DomainError;

/// Convert an I/O error on `path` to DomainError
pub fn map_io_error(path: &Path, e: std::io::Error) -> DomainError {
    DomainError::StorageError(format!("{}: {e}", path.display()))
}

/// Convert a (de)serialization error on `path` to DomainError
pub fn map_serde_error(path: &Path, e: serde_json::Error) -> DomainError {
    DomainError::StorageError(format!("{}: invalid ledger document: {e}", path.display()))
}

