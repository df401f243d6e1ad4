//! Repository port

use kernel::id::{TransactionId, UserId};

use crate::domain::entity::transaction::Transaction;
use crate::domain::value_object::month::Month;
use crate::error::LedgerResult;

/// Transaction persistence port
#[trait_variant::make(TransactionRepository: Send)]
pub trait LocalTransactionRepository {
    /// Persist a new transaction
    async fn create(&self, transaction: &Transaction) -> LedgerResult<()>;

    /// Find a transaction by id, regardless of owner. Ownership is checked
    /// by the use-case, not here.
    async fn find_by_id(&self, transaction_id: &TransactionId) -> LedgerResult<Option<Transaction>>;

    /// All of a user's transactions in a month
    async fn list_by_month(&self, user_id: &UserId, month: &Month)
    -> LedgerResult<Vec<Transaction>>;

    /// Persist changes to an existing transaction
    async fn update(&self, transaction: &Transaction) -> LedgerResult<()>;

    /// Delete by id
    async fn delete(&self, transaction_id: &TransactionId) -> LedgerResult<()>;
}
