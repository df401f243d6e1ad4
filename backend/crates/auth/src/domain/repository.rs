//! Repository and service ports
//!
//! Async ports the use-cases depend on. Implementations live under `infra`;
//! the test suite wires in-memory fakes.

use kernel::id::UserId;

use crate::domain::entity::{refresh_token::RefreshToken, user::User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User persistence port
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user. Fails with `DuplicateEmail` when the normalized
    /// email is already taken.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find a user by id
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find a user by normalized email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Persist changes to an existing user
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Refresh token persistence port
#[trait_variant::make(RefreshTokenRepository: Send)]
pub trait LocalRefreshTokenRepository {
    /// Persist a newly issued token
    async fn create(&self, token: &RefreshToken) -> AuthResult<()>;

    /// Look up a token by its opaque value
    async fn find_by_value(&self, value: &str) -> AuthResult<Option<RefreshToken>>;

    /// Conditionally replace a token's value and expiry.
    ///
    /// The write only applies if the stored value still equals
    /// `previous_value`; returns `false` when another rotation won the race
    /// or the token disappeared in between.
    async fn rotate(&self, rotated: &RefreshToken, previous_value: &str) -> AuthResult<bool>;

    /// Delete a token by value. Deleting a missing token is not an error.
    async fn delete(&self, value: &str) -> AuthResult<()>;
}

/// Verification-email cooldown port
///
/// Backed by a TTL cache; a key exists while the user's cooldown is active
/// and disappears on its own when it lapses.
#[trait_variant::make(CooldownStore: Send)]
pub trait LocalCooldownStore {
    /// Whether the user currently has an active cooldown
    async fn is_active(&self, user_id: &UserId) -> AuthResult<bool>;

    /// Start a cooldown for the user lasting `ttl_secs` seconds
    async fn activate(&self, user_id: &UserId, ttl_secs: u64) -> AuthResult<()>;
}

/// Outbound email
#[derive(Debug, Clone)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Mail delivery port
#[trait_variant::make(Mailer: Send)]
pub trait LocalMailer {
    /// Deliver a message. An error here means the mail did NOT go out and
    /// callers must not treat the request as sent.
    async fn send(&self, message: &MailMessage) -> AuthResult<()>;
}
