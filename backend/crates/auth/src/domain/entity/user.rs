//! User Entity
//!
//! Account identity: normalized email, password hash, verification flag.
//! The hash is write-once and never exposed outward of the use-case layer.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::email::Email;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal object-id identifier
    pub user_id: UserId,
    /// Normalized email (unique)
    pub email: Email,
    /// Argon2id PHC hash, set once at registration
    pub password_hash: HashedPassword,
    /// Flips false -> true exactly once, via email verification
    pub email_verified: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp (refreshed on every mutation)
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, unverified user
    pub fn new(email: Email, password_hash: HashedPassword, now: DateTime<Utc>) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            email_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful email verification
    ///
    /// The caller guards against double verification; this just flips the
    /// flag and bumps `updated_at`.
    pub fn mark_email_verified(&mut self, now: DateTime<Utc>) {
        self.email_verified = true;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn hash() -> HashedPassword {
        ClearTextPassword::new("TestPassword123!".to_string())
            .unwrap()
            .hash()
            .unwrap()
    }

    #[test]
    fn test_new_user_starts_unverified() {
        let now = Utc::now();
        let user = User::new(Email::new("user@example.com").unwrap(), hash(), now);
        assert!(!user.email_verified);
        assert_eq!(user.created_at, now);
        assert_eq!(user.updated_at, now);
    }

    #[test]
    fn test_mark_email_verified_bumps_updated_at() {
        let created = Utc::now();
        let mut user = User::new(Email::new("user@example.com").unwrap(), hash(), created);

        let later = created + chrono::Duration::minutes(5);
        user.mark_email_verified(later);

        assert!(user.email_verified);
        assert_eq!(user.created_at, created);
        assert_eq!(user.updated_at, later);
    }
}
