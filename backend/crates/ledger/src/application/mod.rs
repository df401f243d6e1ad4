//! Application Layer
//!
//! Transaction use cases. Every operation that touches an existing row
//! loads it first and checks ownership; a mismatch is reported exactly
//! like a missing row.

pub mod create_transaction;
pub mod delete_transaction;
pub mod list_transactions;
pub mod update_transaction;

// Re-exports
pub use create_transaction::{CreateTransactionUseCase, TransactionInput};
pub use delete_transaction::DeleteTransactionUseCase;
pub use list_transactions::ListTransactionsUseCase;
pub use update_transaction::UpdateTransactionUseCase;
