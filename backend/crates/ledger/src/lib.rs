//! Ledger Crate
//!
//! Ownership-gated transaction management for the finance backend.
//! Every mutating use-case verifies that the caller owns the row before
//! touching it; a miss on either count surfaces as not-found so callers
//! cannot probe for other users' transaction ids.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;


// Re-exports
pub use error::{LedgerError, LedgerResult};
pub use infra::mongo::MongoTransactionStore;
