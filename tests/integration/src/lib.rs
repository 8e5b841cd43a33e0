//! Integration test utilities for tierbot
//!
//! This crate wires the real services against a JSON ledger in a temporary
//! directory, a recording role mutator and, for HTTP tests, a live
//! keep-alive server.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
