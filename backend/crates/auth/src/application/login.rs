//! Login Use Case
//!
//! Authenticates credentials and opens a new, independent session.

use std::sync::Arc;

use platform::clock::Clock;
use platform::crypto;
use platform::password::ClearTextPassword;
use platform::token::TokenCodec;

use crate::application::SessionOutput;
use crate::application::config::AuthConfig;
use crate::domain::entity::refresh_token::RefreshToken;
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    /// Email address
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<R>,
    codec: TokenCodec,
    config: Arc<AuthConfig>,
    clock: Arc<dyn Clock>,
}

impl<U, R> LoginUseCase<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        token_repo: Arc<R>,
        config: Arc<AuthConfig>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            token_repo,
            codec: config.token_codec(),
            config,
            clock,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<SessionOutput> {
        let email = Email::new(input.email).map_err(|e| AuthError::Validation(e.to_string()))?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidPassword)?;
        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidPassword);
        }

        // Sessions are independent: a login does not touch tokens from
        // earlier logins on the same account.
        let now = self.clock.now();
        let refresh_token = RefreshToken::issue(
            user.user_id,
            crypto::opaque_token(self.config.refresh_token_length),
            now,
            self.config.refresh_token_ttl,
        );
        self.token_repo.create(&refresh_token).await?;

        let access_token = self.codec.sign_access(&user.user_id.to_hex(), now)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(SessionOutput {
            user,
            access_token,
            refresh_token: refresh_token.value,
        })
    }
}
