//! Delete Transaction Use Case

use std::sync::Arc;

use kernel::id::{TransactionId, UserId};

use crate::domain::repository::TransactionRepository;
use crate::error::{LedgerError, LedgerResult};

/// Delete transaction use case
pub struct DeleteTransactionUseCase<T>
where
    T: TransactionRepository,
{
    transaction_repo: Arc<T>,
}

impl<T> DeleteTransactionUseCase<T>
where
    T: TransactionRepository,
{
    pub fn new(transaction_repo: Arc<T>) -> Self {
        Self { transaction_repo }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        transaction_id: &TransactionId,
    ) -> LedgerResult<()> {
        let transaction = self
            .transaction_repo
            .find_by_id(transaction_id)
            .await?
            .filter(|t| t.user_id == *user_id)
            .ok_or(LedgerError::TransactionNotFound)?;

        self.transaction_repo
            .delete(&transaction.transaction_id)
            .await?;

        tracing::info!(
            user_id = %user_id,
            transaction_id = %transaction.transaction_id,
            "Transaction deleted"
        );

        Ok(())
    }
}
