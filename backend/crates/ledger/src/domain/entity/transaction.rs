//! Transaction Entity
//!
//! A single income or expense line, bucketed by calendar month. Expenses
//! carry a budgeting category; incomes never do. That rule is enforced at
//! construction and on every update, so no inconsistent row can exist.

use chrono::{DateTime, Utc};
use kernel::id::{TransactionId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{amount::Amount, month::Month};
use crate::error::{LedgerError, LedgerResult};

/// Income or expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Budgeting category, expenses only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Need,
    Want,
    Investment,
}

/// Transaction entity
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Internal object-id identifier
    pub transaction_id: TransactionId,
    /// Owning user; all reads and writes are gated on this
    pub user_id: UserId,
    /// Calendar month the transaction belongs to
    pub month: Month,
    /// Display name
    pub name: String,
    /// Positive amount
    pub amount: Amount,
    /// Income or expense
    pub kind: TransactionKind,
    /// Present exactly when `kind` is expense
    pub expense_category: Option<ExpenseCategory>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp (refreshed on every mutation)
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction, enforcing the category rule
    pub fn new(
        user_id: UserId,
        month: Month,
        name: String,
        amount: Amount,
        kind: TransactionKind,
        expense_category: Option<ExpenseCategory>,
        now: DateTime<Utc>,
    ) -> LedgerResult<Self> {
        Self::check_category(kind, expense_category)?;

        if name.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Transaction name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            transaction_id: TransactionId::new(),
            user_id,
            month,
            name,
            amount,
            kind,
            expense_category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the mutable fields, re-checking the category rule
    pub fn update(
        &mut self,
        month: Month,
        name: String,
        amount: Amount,
        kind: TransactionKind,
        expense_category: Option<ExpenseCategory>,
        now: DateTime<Utc>,
    ) -> LedgerResult<()> {
        Self::check_category(kind, expense_category)?;

        if name.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Transaction name cannot be empty".to_string(),
            ));
        }

        self.month = month;
        self.name = name;
        self.amount = amount;
        self.kind = kind;
        self.expense_category = expense_category;
        self.updated_at = now;
        Ok(())
    }

    fn check_category(
        kind: TransactionKind,
        category: Option<ExpenseCategory>,
    ) -> LedgerResult<()> {
        match (kind, category) {
            (TransactionKind::Expense, None) => Err(LedgerError::Validation(
                "Expense transactions require a category".to_string(),
            )),
            (TransactionKind::Income, Some(_)) => Err(LedgerError::Validation(
                "Income transactions cannot carry a category".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month() -> Month {
        Month::new("2024-03").unwrap()
    }

    fn amount() -> Amount {
        Amount::new(42.50).unwrap()
    }

    #[test]
    fn test_expense_requires_category() {
        let result = Transaction::new(
            UserId::new(),
            month(),
            "Groceries".to_string(),
            amount(),
            TransactionKind::Expense,
            None,
            Utc::now(),
        );
        assert!(matches!(result, Err(LedgerError::Validation(_))));
    }

    #[test]
    fn test_income_rejects_category() {
        let result = Transaction::new(
            UserId::new(),
            month(),
            "Salary".to_string(),
            amount(),
            TransactionKind::Income,
            Some(ExpenseCategory::Need),
            Utc::now(),
        );
        assert!(matches!(result, Err(LedgerError::Validation(_))));
    }

    #[test]
    fn test_valid_combinations() {
        let expense = Transaction::new(
            UserId::new(),
            month(),
            "Groceries".to_string(),
            amount(),
            TransactionKind::Expense,
            Some(ExpenseCategory::Need),
            Utc::now(),
        );
        assert!(expense.is_ok());

        let income = Transaction::new(
            UserId::new(),
            month(),
            "Salary".to_string(),
            amount(),
            TransactionKind::Income,
            None,
            Utc::now(),
        );
        assert!(income.is_ok());
    }

    #[test]
    fn test_update_recheck_and_timestamps() {
        let created = Utc::now();
        let mut tx = Transaction::new(
            UserId::new(),
            month(),
            "Groceries".to_string(),
            amount(),
            TransactionKind::Expense,
            Some(ExpenseCategory::Need),
            created,
        )
        .unwrap();

        // Switching to income must drop the category or fail
        let bad = tx.update(
            month(),
            "Salary".to_string(),
            amount(),
            TransactionKind::Income,
            Some(ExpenseCategory::Want),
            created,
        );
        assert!(bad.is_err());

        let later = created + chrono::Duration::minutes(1);
        tx.update(
            month(),
            "Salary".to_string(),
            amount(),
            TransactionKind::Income,
            None,
            later,
        )
        .unwrap();
        assert_eq!(tx.updated_at, later);
        assert_eq!(tx.created_at, created);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Transaction::new(
            UserId::new(),
            month(),
            "   ".to_string(),
            amount(),
            TransactionKind::Income,
            None,
            Utc::now(),
        );
        assert!(matches!(result, Err(LedgerError::Validation(_))));
    }
}
