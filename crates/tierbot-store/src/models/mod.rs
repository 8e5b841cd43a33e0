//! Persisted document models

mod document;

pub use document::{LedgerDocument, TRACKED_MESSAGES_KEY};
