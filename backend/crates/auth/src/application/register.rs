//! Register Use Case
//!
//! Creates an account and opens its first session.

use std::sync::Arc;

use platform::clock::Clock;
use platform::crypto;
use platform::password::ClearTextPassword;
use platform::token::TokenCodec;

use crate::application::SessionOutput;
use crate::application::config::AuthConfig;
use crate::domain::entity::{refresh_token::RefreshToken, user::User};
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    /// Email address (any case; normalized here)
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U, R>
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

impl<U, R> RegisterUseCase<U, R>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<SessionOutput> {
        let email = Email::new(input.email).map_err(|e| AuthError::Validation(e.to_string()))?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let now = self.clock.now();
        let user = User::new(email, password_hash, now);
        self.user_repo.create(&user).await?;

        // If token persistence fails past this point the user row stays
        // behind without a session. Accepted: the account exists, the
        // client just has to log in.
        let refresh_token = RefreshToken::issue(
            user.user_id,
            crypto::opaque_token(self.config.refresh_token_length),
            now,
            self.config.refresh_token_ttl,
        );
        self.token_repo.create(&refresh_token).await?;

        let access_token = self.codec.sign_access(&user.user_id.to_hex(), now)?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(SessionOutput {
            user,
            access_token,
            refresh_token: refresh_token.value,
        })
    }
}
