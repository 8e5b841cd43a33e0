//! Reaction ledger document model
//!
//! Layout of the persisted file:
//!
//! ```json
//! {
//!     "tracked_messages": ["1187...", "1190..."],
//!     "<user id>": { "<message id>": true, ... },
//!     ...
//! }
//! ```
//!
//! `tracked_messages` is the only reserved key. A message id maps to `true`
//! while the reaction is active; inactive reactions are absent, never `false`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved top-level key holding the tracked message ids
pub const TRACKED_MESSAGES_KEY: &str = "tracked_messages";

/// Persisted form of the ledger
///
/// Tracked ids and user records are kept as raw JSON values so that a single
/// malformed entry can be skipped by the mapper instead of failing the whole
/// load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracked_messages: Vec<Value>,

    #[serde(flatten)]
    pub users: BTreeMap<String, Value>,
}

impl LedgerDocument {
    /// Parse a document from JSON bytes
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Serialize with four-space indentation
    pub fn to_pretty_vec(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }
}
