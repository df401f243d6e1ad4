//! Ledger Error Types

use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Ledger-specific result type alias
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-specific error variants
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Transaction missing, or owned by someone else. The two cases are
    /// deliberately indistinguishable from the outside.
    #[error("Transaction not found")]
    TransactionNotFound,

    /// Value-object validation failed (month format, amount, category rule)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Document store error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LedgerError {
    /// Stable external identifier for the boundary layer
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::TransactionNotFound => "TRANSACTION_NOT_FOUND",
            LedgerError::Validation(_) => "VALIDATION_FAILED",
            LedgerError::Database(_) => "SERVICE_UNAVAILABLE",
            LedgerError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::TransactionNotFound => ErrorKind::NotFound,
            LedgerError::Validation(_) => ErrorKind::BadRequest,
            LedgerError::Database(_) => ErrorKind::ServiceUnavailable,
            LedgerError::Internal(_) => ErrorKind::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            LedgerError::TransactionNotFound.code(),
            "TRANSACTION_NOT_FOUND"
        );
        assert_eq!(
            LedgerError::Validation("x".into()).code(),
            "VALIDATION_FAILED"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(LedgerError::TransactionNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            LedgerError::Validation("x".into()).kind(),
            ErrorKind::BadRequest
        );
    }
}
