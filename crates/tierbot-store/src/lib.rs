//! # tierbot-store
//!
//! Storage layer implementing [`LedgerStore`](tierbot_core::LedgerStore).
//!
//! ## Overview
//!
//! - On-disk document model for the reaction ledger
//! - Document ↔ entity mappers
//! - A JSON file store (the production backend) and an in-memory store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tierbot_store::JsonLedgerStore;
//! use tierbot_core::LedgerStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = JsonLedgerStore::new("reactions.json");
//!     let mut ledger = store.load().await;
//!     ledger.start_tracking(123.into());
//!     store.save(&ledger).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use models::LedgerDocument;
pub use repositories::{JsonLedgerStore, MemoryLedgerStore};
