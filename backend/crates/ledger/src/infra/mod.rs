//! Infrastructure Layer

pub mod mongo;

// Re-exports
pub use mongo::MongoTransactionStore;
