//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.
//!
//! Entity ids follow the document store's object-id scheme: 24 hex
//! characters (12 bytes: timestamp + random). The scheme is swappable by
//! changing this one module; domains only see the typed aliases.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use bson::oid::ObjectId;

use crate::error::app_error::{AppError, AppResult};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// ```
pub struct Id<T> {
    value: ObjectId,
    _marker: PhantomData<T>,
}

// Manual impls: derives would demand the same bounds of the marker type,
// which is phantom and never instantiated.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Id<T> {
    /// Create a new random ID
    pub fn new() -> Self {
        Self {
            value: ObjectId::new(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing object id
    pub fn from_object_id(oid: ObjectId) -> Self {
        Self {
            value: oid,
            _marker: PhantomData,
        }
    }

    /// Parse and validate a 24-hex-character id string
    pub fn parse(s: &str) -> AppResult<Self> {
        let oid = ObjectId::parse_str(s)?;
        Ok(Self::from_object_id(oid))
    }

    /// Check whether a string is a well-formed id
    pub fn is_valid(s: &str) -> bool {
        ObjectId::parse_str(s).is_ok()
    }

    /// Get the underlying object id
    pub fn as_object_id(&self) -> ObjectId {
        self.value
    }

    /// Hex representation (24 lowercase hex chars)
    pub fn to_hex(&self) -> String {
        self.value.to_hex()
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value.to_hex())
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.to_hex())
    }
}

impl<T> From<ObjectId> for Id<T> {
    fn from(oid: ObjectId) -> Self {
        Self::from_object_id(oid)
    }
}

impl<T> From<Id<T>> for ObjectId {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> FromStr for Id<T> {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Id::parse(s)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for RefreshToken IDs
    pub struct RefreshToken;

    /// Marker for Transaction IDs
    pub struct Transaction;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type RefreshTokenId = Id<markers::RefreshToken>;
pub type TransactionId = Id<markers::Transaction>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::new();
        let token_id: RefreshTokenId = Id::new();

        // These are different types, cannot be mixed
        let _u: ObjectId = user_id.into();
        let _t: ObjectId = token_id.into();
    }

    #[test]
    fn test_id_hex_roundtrip() {
        let id: UserId = Id::new();
        let hex = id.to_hex();
        assert_eq!(hex.len(), 24);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));

        let parsed = UserId::parse(&hex).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_rejects_malformed() {
        assert!(UserId::parse("").is_err());
        assert!(UserId::parse("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        assert!(UserId::parse("abc123").is_err());
        assert!(!UserId::is_valid("not-an-id"));
        assert!(UserId::is_valid("507f1f77bcf86cd799439011"));
    }
}
