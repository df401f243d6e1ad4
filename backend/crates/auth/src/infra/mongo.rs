//! MongoDB Repository Implementations
//!
//! One store over two collections: `users` (unique email) and
//! `refresh_tokens` (unique value, TTL index on expiry). The TTL index is
//! load-bearing: expired token rows are never deleted in code.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use bson::{doc, oid::ObjectId};
use chrono::{DateTime, Utc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use kernel::id::{RefreshTokenId, UserId};
use platform::password::HashedPassword;

use crate::domain::entity::{refresh_token::RefreshToken, user::User};
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

const USERS_COLLECTION: &str = "users";
const REFRESH_TOKENS_COLLECTION: &str = "refresh_tokens";

/// Mongo server error code for a unique-index violation
const DUPLICATE_KEY: i32 = 11000;

// ============================================================================
// Documents
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    email: String,
    password_hash: String,
    email_verified: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl UserDocument {
    fn from_entity(user: &User) -> Self {
        Self {
            id: user.user_id.as_object_id(),
            email: user.email.as_str().to_string(),
            password_hash: user.password_hash.as_phc_string().to_string(),
            email_verified: user.email_verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }

    fn into_entity(self) -> AuthResult<User> {
        Ok(User {
            user_id: UserId::from_object_id(self.id),
            email: Email::from_db(self.email),
            password_hash: HashedPassword::from_phc_string(self.password_hash)
                .map_err(|e| AuthError::Internal(format!("Corrupt password hash: {e}")))?,
            email_verified: self.email_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RefreshTokenDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    user_id: ObjectId,
    value: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    expires_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl RefreshTokenDocument {
    fn from_entity(token: &RefreshToken) -> Self {
        Self {
            id: token.token_id.as_object_id(),
            user_id: token.user_id.as_object_id(),
            value: token.value.clone(),
            expires_at: token.expires_at,
            created_at: token.created_at,
            updated_at: token.updated_at,
        }
    }

    fn into_entity(self) -> RefreshToken {
        RefreshToken {
            token_id: RefreshTokenId::from_object_id(self.id),
            user_id: UserId::from_object_id(self.user_id),
            value: self.value,
            expires_at: self.expires_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// ============================================================================
// Store
// ============================================================================

/// MongoDB-backed auth store
#[derive(Clone)]
pub struct MongoAuthStore {
    users: Collection<UserDocument>,
    refresh_tokens: Collection<RefreshTokenDocument>,
}

impl MongoAuthStore {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
            refresh_tokens: db.collection(REFRESH_TOKENS_COLLECTION),
        }
    }

    /// Create the indexes the store relies on. Idempotent; run at startup.
    ///
    /// - unique index on `users.email`
    /// - unique index on `refresh_tokens.value`
    /// - TTL index on `refresh_tokens.expires_at` (expire the moment the
    ///   stored timestamp passes)
    pub async fn ensure_indexes(&self) -> AuthResult<()> {
        self.users
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "email": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
                None,
            )
            .await?;

        self.refresh_tokens
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "value": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
                None,
            )
            .await?;

        self.refresh_tokens
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "expires_at": 1 })
                    .options(IndexOptions::builder().expire_after(Duration::ZERO).build())
                    .build(),
                None,
            )
            .await?;

        tracing::info!("Auth store indexes ensured");

        Ok(())
    }
}

/// Whether a driver error is a unique-index violation
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY
    )
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for MongoAuthStore {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let doc = UserDocument::from_entity(user);
        match self.users.insert_one(doc, None).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(AuthError::DuplicateEmail),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let doc = self
            .users
            .find_one(doc! { "_id": user_id.as_object_id() }, None)
            .await?;
        doc.map(UserDocument::into_entity).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let doc = self
            .users
            .find_one(doc! { "email": email.as_str() }, None)
            .await?;
        doc.map(UserDocument::into_entity).transpose()
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let doc = UserDocument::from_entity(user);
        let result = self
            .users
            .update_one(
                doc! { "_id": doc.id },
                doc! { "$set": {
                    "email": doc.email,
                    "password_hash": doc.password_hash,
                    "email_verified": doc.email_verified,
                    "updated_at": bson::DateTime::from_chrono(doc.updated_at),
                }},
                None,
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AuthError::UserNotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Refresh Token Repository Implementation
// ============================================================================

impl RefreshTokenRepository for MongoAuthStore {
    async fn create(&self, token: &RefreshToken) -> AuthResult<()> {
        let doc = RefreshTokenDocument::from_entity(token);
        match self.refresh_tokens.insert_one(doc, None).await {
            Ok(_) => Ok(()),
            // A value collision is astronomically unlikely at 32 bytes of
            // entropy; if it ever happens, surface it loudly.
            Err(e) if is_duplicate_key(&e) => Err(AuthError::Internal(
                "Refresh token value collision".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_value(&self, value: &str) -> AuthResult<Option<RefreshToken>> {
        let doc = self
            .refresh_tokens
            .find_one(doc! { "value": value }, None)
            .await?;
        Ok(doc.map(RefreshTokenDocument::into_entity))
    }

    async fn rotate(&self, rotated: &RefreshToken, previous_value: &str) -> AuthResult<bool> {
        // Conditional write: matches only while the stored value is still
        // the one the caller presented. Two racing rotations of the same
        // value resolve to exactly one matched write.
        let result = self
            .refresh_tokens
            .update_one(
                doc! {
                    "_id": rotated.token_id.as_object_id(),
                    "value": previous_value,
                },
                doc! { "$set": {
                    "value": &rotated.value,
                    "expires_at": bson::DateTime::from_chrono(rotated.expires_at),
                    "updated_at": bson::DateTime::from_chrono(rotated.updated_at),
                }},
                None,
            )
            .await?;

        Ok(result.matched_count == 1)
    }

    async fn delete(&self, value: &str) -> AuthResult<()> {
        self.refresh_tokens
            .delete_one(doc! { "value": value }, None)
            .await?;
        Ok(())
    }
}
