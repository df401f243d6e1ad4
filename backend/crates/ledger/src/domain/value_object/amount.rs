//! Amount Value Object
//!
//! Positive monetary value with at most two decimal places, stored as the
//! exact number the client sent.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Positive monetary amount, two decimal places max
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> LedgerResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(LedgerError::Validation(format!(
                "Amount must be a positive number, got {value}"
            )));
        }

        // At most two decimal places: scaling by 100 must land on a whole
        // number (within float tolerance).
        let cents = value * 100.0;
        if (cents - cents.round()).abs() > 1e-6 {
            return Err(LedgerError::Validation(format!(
                "Amount must have at most two decimal places, got {value}"
            )));
        }

        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
