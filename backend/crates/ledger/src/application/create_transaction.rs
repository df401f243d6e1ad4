//! Create Transaction Use Case

use std::sync::Arc;

use kernel::id::UserId;
use platform::clock::Clock;

use crate::domain::entity::transaction::{ExpenseCategory, Transaction, TransactionKind};
use crate::domain::repository::TransactionRepository;
use crate::domain::value_object::{amount::Amount, month::Month};
use crate::error::LedgerResult;

/// Transaction field set, shared by create and update
pub struct TransactionInput {
    /// Month in `YYYY-MM` form
    pub month: String,
    /// Display name
    pub name: String,
    /// Positive amount, two decimal places max
    pub value: f64,
    /// Income or expense
    pub kind: TransactionKind,
    /// Required for expenses, forbidden for incomes
    pub expense_category: Option<ExpenseCategory>,
}

/// Create transaction use case
pub struct CreateTransactionUseCase<T>
where
    T: TransactionRepository,
{
    transaction_repo: Arc<T>,
    clock: Arc<dyn Clock>,
}

impl<T> CreateTransactionUseCase<T>
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
        input: TransactionInput,
    ) -> LedgerResult<Transaction> {
        let transaction = Transaction::new(
            *user_id,
            Month::new(input.month)?,
            input.name,
            Amount::new(input.value)?,
            input.kind,
            input.expense_category,
            self.clock.now(),
        )?;

        self.transaction_repo.create(&transaction).await?;

        tracing::info!(
            user_id = %user_id,
            transaction_id = %transaction.transaction_id,
            "Transaction created"
        );

        Ok(transaction)
    }
}
