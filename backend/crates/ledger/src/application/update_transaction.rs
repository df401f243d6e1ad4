//! Update Transaction Use Case

use std::sync::Arc;

use kernel::id::{TransactionId, UserId};
use platform::clock::Clock;

use crate::application::create_transaction::TransactionInput;
use crate::domain::entity::transaction::Transaction;
use crate::domain::repository::TransactionRepository;
use crate::domain::value_object::{amount::Amount, month::Month};
use crate::error::{LedgerError, LedgerResult};

/// Update transaction use case
pub struct UpdateTransactionUseCase<T>
where
    T: TransactionRepository,
{
    transaction_repo: Arc<T>,
    clock: Arc<dyn Clock>,
}

impl<T> UpdateTransactionUseCase<T>
where
    T: TransactionRepository,
{
    pub fn new(transaction_repo: Arc<T>, clock: Arc<dyn Clock>) -> Self {
        Self {
            transaction_repo,
            clock,
        }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        transaction_id: &TransactionId,
        input: TransactionInput,
    ) -> LedgerResult<Transaction> {
        let mut transaction = self
            .transaction_repo
            .find_by_id(transaction_id)
            .await?
            .filter(|t| t.user_id == *user_id)
            .ok_or(LedgerError::TransactionNotFound)?;

        transaction.update(
            Month::new(input.month)?,
            input.name,
            Amount::new(input.value)?,
            input.kind,
            input.expense_category,
            self.clock.now(),
        )?;

        self.transaction_repo.update(&transaction).await?;

        tracing::info!(
            user_id = %user_id,
            transaction_id = %transaction.transaction_id,
            "Transaction updated"
        );

        Ok(transaction)
    }
}
