//! List Transactions Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::transaction::Transaction;
use crate::domain::repository::TransactionRepository;
use crate::domain::value_object::month::Month;
use crate::error::LedgerResult;

/// List transactions use case
pub struct ListTransactionsUseCase<T>
where
    T: TransactionRepository,
{
    transaction_repo: Arc<T>,
}

impl<T> ListTransactionsUseCase<T>
where
    T: TransactionRepository,
{
    pub fn new(transaction_repo: Arc<T>) -> Self {
        Self { transaction_repo }
    }

    /// All of the caller's transactions for one month. The query is scoped
    /// by owner, so there is nothing to leak and nothing to gate.
    pub async fn execute(&self, user_id: &UserId, month: &str) -> LedgerResult<Vec<Transaction>> {
        let month = Month::new(month)?;
        self.transaction_repo.list_by_month(user_id, &month).await
    }
}
