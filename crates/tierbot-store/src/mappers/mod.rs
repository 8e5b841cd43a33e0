//! Entity <-> document mappers

mod ledger;
