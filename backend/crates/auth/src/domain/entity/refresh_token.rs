//! Refresh Token Entity
//!
//! One opaque, single-use credential per login session. The value is a
//! random hex string generated by the platform crate; rotation swaps the
//! value and pushes the expiry forward while keeping the same identity.
//! Expired rows are removed by the store's TTL mechanism, not by code.

use std::time::Duration;

use chrono::{DateTime, Utc};
use kernel::id::{RefreshTokenId, UserId};

/// Refresh token entity
#[derive(Debug, Clone)]
pub struct RefreshToken {
    /// Internal object-id identifier (stable across rotations)
    pub token_id: RefreshTokenId,
    /// Owning user
    pub user_id: UserId,
    /// Opaque random value presented by the client
    pub value: String,
    /// Hard expiry; tokens past this point can no longer rotate
    pub expires_at: DateTime<Utc>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp (refreshed on rotation)
    pub updated_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Issue a fresh token for a user
    pub fn issue(user_id: UserId, value: String, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            token_id: RefreshTokenId::new(),
            user_id,
            value,
            expires_at: now + chrono::Duration::seconds(ttl.as_secs() as i64),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rotate in place: new value, expiry pushed forward from `now`
    ///
    /// Identity (`token_id`, `user_id`, `created_at`) is preserved so the
    /// session stays the same session.
    pub fn rotate(&mut self, new_value: String, now: DateTime<Utc>, ttl: Duration) {
        self.value = new_value;
        self.expires_at = now + chrono::Duration::seconds(ttl.as_secs() as i64);
        self.updated_at = now;
    }

    /// Whether the token has passed its expiry at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK: Duration = Duration::from_secs(7 * 24 * 60 * 60);

    #[test]
    fn test_issue_sets_expiry_from_ttl() {
        let now = Utc::now();
        let token = RefreshToken::issue(UserId::new(), "abc123".to_string(), now, WEEK);

        assert_eq!(token.expires_at, now + chrono::Duration::days(7));
        assert!(!token.is_expired(now));
        assert!(token.is_expired(now + chrono::Duration::days(8)));
    }

    #[test]
    fn test_rotate_preserves_identity() {
        let now = Utc::now();
        let mut token = RefreshToken::issue(UserId::new(), "old-value".to_string(), now, WEEK);
        let token_id = token.token_id;
        let user_id = token.user_id;

        let later = now + chrono::Duration::days(3);
        token.rotate("new-value".to_string(), later, WEEK);

        assert_eq!(token.token_id, token_id);
        assert_eq!(token.user_id, user_id);
        assert_eq!(token.created_at, now);
        assert_eq!(token.value, "new-value");
        assert_eq!(token.expires_at, later + chrono::Duration::days(7));
        assert_eq!(token.updated_at, later);
    }

    #[test]
    fn test_boundary_is_not_expired() {
        let now = Utc::now();
        let token = RefreshToken::issue(UserId::new(), "abc".to_string(), now, WEEK);

        // Exactly at expires_at the token is still usable
        assert!(!token.is_expired(token.expires_at));
        assert!(token.is_expired(token.expires_at + chrono::Duration::seconds(1)));
    }
}
