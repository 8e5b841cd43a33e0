//! Ledger store implementations

mod error;
mod json_file;
mod memory;

pub use json_file::JsonLedgerStore;
pub use memory::MemoryLedgerStore;
