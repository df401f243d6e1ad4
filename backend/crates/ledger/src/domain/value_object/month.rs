//! Month Value Object
//!
//! Calendar month in `YYYY-MM` form, the bucketing key for transactions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};

/// Calendar month, `YYYY-MM`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Month(String);

impl Month {
    pub fn new(value: impl Into<String>) -> LedgerResult<Self> {
        let value = value.into();

        let b = value.as_bytes();
        let valid = b.len() == 7
            && b[4] == b'-'
            && b[..4].iter().all(u8::is_ascii_digit)
            && b[5..].iter().all(u8::is_ascii_digit)
            && matches!((b[5] - b'0') * 10 + (b[6] - b'0'), 1..=12);

        if !valid {
            return Err(LedgerError::Validation(format!(
                "Month must be in YYYY-MM format, got '{value}'"
            )));
        }

        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Month {
    type Err = LedgerError;

    fn from_str(s: &str) -> LedgerResult<Self> {
        Month::new(s)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_valid() {
        assert!(Month::new("2024-01").is_ok());
        assert!(Month::new("2024-12").is_ok());
        assert!(Month::new("1999-06").is_ok());
    }

    #[test]
    fn test_month_invalid() {
        assert!(Month::new("").is_err());
        assert!(Month::new("2024-13").is_err());
        assert!(Month::new("2024-00").is_err());
        assert!(Month::new("2024-1").is_err());
        assert!(Month::new("2024/01").is_err());
        assert!(Month::new("202401").is_err());
        assert!(Month::new("abcd-01").is_err());
    }
}
