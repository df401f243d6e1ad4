//! MongoDB Repository Implementation

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use bson::{doc, oid::ObjectId};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

use kernel::id::{TransactionId, UserId};

use crate::domain::entity::transaction::{ExpenseCategory, Transaction, TransactionKind};
use crate::domain::repository::TransactionRepository;
use crate::domain::value_object::{amount::Amount, month::Month};
use crate::error::{LedgerError, LedgerResult};

const TRANSACTIONS_COLLECTION: &str = "transactions";

#[derive(Debug, Serialize, Deserialize)]
struct TransactionDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    user_id: ObjectId,
    month: String,
    name: String,
    value: f64,
    kind: TransactionKind,
    expense_category: Option<ExpenseCategory>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl TransactionDocument {
    fn from_entity(transaction: &Transaction) -> Self {
        Self {
            id: transaction.transaction_id.as_object_id(),
            user_id: transaction.user_id.as_object_id(),
            month: transaction.month.as_str().to_string(),
            name: transaction.name.clone(),
            value: transaction.amount.value(),
            kind: transaction.kind,
            expense_category: transaction.expense_category,
            created_at: transaction.created_at,
            updated_at: transaction.updated_at,
        }
    }

    fn into_entity(self) -> Transaction {
        Transaction {
            transaction_id: TransactionId::from_object_id(self.id),
            user_id: UserId::from_object_id(self.user_id),
            month: Month::from_db(self.month),
            name: self.name,
            amount: Amount::from_db(self.value),
            kind: self.kind,
            expense_category: self.expense_category,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// MongoDB-backed transaction store
#[derive(Clone)]
pub struct MongoTransactionStore {
    transactions: Collection<TransactionDocument>,
}

impl MongoTransactionStore {
    pub fn new(db: &Database) -> Self {
        Self {
            transactions: db.collection(TRANSACTIONS_COLLECTION),
        }
    }

    /// Create the compound index the monthly listing query runs on.
    /// Idempotent; run at startup.
    pub async fn ensure_indexes(&self) -> LedgerResult<()> {
        self.transactions
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "user_id": 1, "month": 1 })
                    .options(IndexOptions::builder().build())
                    .build(),
                None,
            )
            .await?;

        tracing::info!("Transaction store indexes ensured");

        Ok(())
    }
}

impl TransactionRepository for MongoTransactionStore {
    async fn create(&self, transaction: &Transaction) -> LedgerResult<()> {
        let doc = TransactionDocument::from_entity(transaction);
        self.transactions.insert_one(doc, None).await?;
        Ok(())
    }

    async fn find_by_id(
        &self,
        transaction_id: &TransactionId,
    ) -> LedgerResult<Option<Transaction>> {
        let doc = self
            .transactions
            .find_one(doc! { "_id": transaction_id.as_object_id() }, None)
            .await?;
        Ok(doc.map(TransactionDocument::into_entity))
    }

    async fn list_by_month(
        &self,
        user_id: &UserId,
        month: &Month,
    ) -> LedgerResult<Vec<Transaction>> {
        let cursor = self
            .transactions
            .find(
                doc! { "user_id": user_id.as_object_id(), "month": month.as_str() },
                None,
            )
            .await?;

        let docs: Vec<TransactionDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(TransactionDocument::into_entity).collect())
    }

    async fn update(&self, transaction: &Transaction) -> LedgerResult<()> {
        let doc = TransactionDocument::from_entity(transaction);
        let result = self
            .transactions
            .update_one(
                doc! { "_id": doc.id },
                doc! { "$set": {
                    "month": doc.month,
                    "name": doc.name,
                    "value": doc.value,
                    "kind": bson::to_bson(&doc.kind)
                        .map_err(|e| LedgerError::Internal(e.to_string()))?,
                    "expense_category": bson::to_bson(&doc.expense_category)
                        .map_err(|e| LedgerError::Internal(e.to_string()))?,
                    "updated_at": bson::DateTime::from_chrono(doc.updated_at),
                }},
                None,
            )
            .await?;

        if result.matched_count == 0 {
            return Err(LedgerError::TransactionNotFound);
        }
        Ok(())
    }

    async fn delete(&self, transaction_id: &TransactionId) -> LedgerResult<()> {
        self.transactions
            .delete_one(doc! { "_id": transaction_id.as_object_id() }, None)
            .await?;
        Ok(())
    }
}
