//! Verify Email Use Case
//!
//! Consumes an email-verification token and flips the user's verified
//! flag. Tokens are stateless, so replay within the one-hour window is
//! possible; after the first success the already-verified guard turns a
//! replay into an explicit, reported outcome instead of a silent no-op.

use std::sync::Arc;

use kernel::id::UserId;
use platform::clock::Clock;
use platform::token::TokenCodec;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Verify email use case
pub struct VerifyEmailUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: TokenCodec,
    clock: Arc<dyn Clock>,
}

impl<U> VerifyEmailUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repo,
            codec: config.token_codec(),
            clock,
        }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let subject = self.codec.verify_email_verification(token)?;
        let user_id = UserId::parse(&subject).map_err(|_| AuthError::InvalidToken)?;

        let mut user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.email_verified {
            return Err(AuthError::EmailAlreadyVerified);
        }

        user.mark_email_verified(self.clock.now());
        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "Email verified");

        Ok(user)
    }
}
