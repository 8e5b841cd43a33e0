//! Ledger entity <-> document mapper

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;
use tierbot_core::{Ledger, Snowflake};
use tracing::warn;

use crate::models::LedgerDocument;

/// Convert a persisted document into a Ledger
///
/// Entries that cannot be interpreted are skipped with a warning: invalid
/// tracked ids, non-numeric user keys, non-object records, non-numeric
/// message keys and values other than `true`.
impl From<LedgerDocument> for Ledger {
    fn from(doc: LedgerDocument) -> Self {
        let tracked: Vec<Snowflake> = doc
            .tracked_messages
            .iter()
            .filter_map(|entry| {
                let parsed = match entry {
                    Value::String(s) => Snowflake::parse(s).ok(),
                    Value::Number(n) => n.as_u64().filter(|&v| v != 0).map(Snowflake::new),
                    _ => None,
                };
                if parsed.is_none() {
                    warn!(entry = %entry, "Skipping invalid tracked message id");
                }
                parsed
            })
            .collect();

        let users = doc.users.into_iter().filter_map(|(key, value)| {
            let Ok(user_id) = Snowflake::parse(&key) else {
                warn!(key = %key, "Skipping ledger entry with invalid user id");
                return None;
            };
            let Value::Object(record) = value else {
                warn!(user_id = %user_id, "Skipping ledger entry that is not an object");
                return None;
            };

            let messages: BTreeSet<Snowflake> = record
                .into_iter()
                .filter(|(_, active)| active.as_bool() == Some(true))
                .filter_map(|(message_key, _)| match Snowflake::parse(&message_key) {
                    Ok(id) => Some(id),
                    Err(_) => {
                        warn!(
                            user_id = %user_id,
                            key = %message_key,
                            "Skipping reaction with invalid message id"
                        );
                        None
                    }
                })
                .collect();

            Some((user_id, messages))
        });

        Ledger::from_parts(tracked, users)
    }
}

/// Convert a Ledger into its persisted document
impl From<&Ledger> for LedgerDocument {
    fn from(ledger: &Ledger) -> Self {
        let users = ledger
            .users()
            .map(|(user_id, messages)| {
                let record: serde_json::Map<String, Value> = messages
                    .iter()
                    .map(|id| (id.to_string(), Value::Bool(true)))
                    .collect();
                (user_id.to_string(), Value::Object(record))
            })
            .collect::<BTreeMap<_, _>>();

        LedgerDocument {
            tracked_messages: ledger
                .tracked_messages()
                .iter()
                .map(|id| Value::String(id.to_string()))
                .collect(),
            users,
        }
    }
}
