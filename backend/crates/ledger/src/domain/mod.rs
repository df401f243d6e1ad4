//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::transaction::{ExpenseCategory, Transaction, TransactionKind};
pub use repository::TransactionRepository;
pub use value_object::{amount::Amount, month::Month};
