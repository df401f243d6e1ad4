//! Refresh Use Case
//!
//! Exchanges a live refresh token for a fresh access token, rotating the
//! refresh token's value in the same step. Rotation is a destructive read:
//! once the new value is persisted the old one can never resolve again,
//! so a replayed stale value surfaces as not-found.

use std::sync::Arc;

use platform::clock::Clock;
use platform::crypto;
use platform::token::TokenCodec;

use crate::application::config::AuthConfig;
use crate::domain::repository::RefreshTokenRepository;
use crate::error::{AuthError, AuthResult};

/// Refresh output
pub struct RefreshOutput {
    /// Fresh signed access token
    pub access_token: String,
    /// The rotated refresh token value; the presented one is now dead
    pub refresh_token: String,
}

/// Refresh use case
pub struct RefreshUseCase<R>
where
    R: RefreshTokenRepository,
{
    token_repo: Arc<R>,
    codec: TokenCodec,
    config: Arc<AuthConfig>,
    clock: Arc<dyn Clock>,
}

impl<R> RefreshUseCase<R>
where
    R: RefreshTokenRepository,
{
    pub fn new(token_repo: Arc<R>, config: Arc<AuthConfig>, clock: Arc<dyn Clock>) -> Self {
        Self {
            token_repo,
            codec: config.token_codec(),
            config,
            clock,
        }
    }

    pub async fn execute(&self, refresh_token: Option<String>) -> AuthResult<RefreshOutput> {
        let presented = refresh_token
            .filter(|v| !v.is_empty())
            .ok_or(AuthError::MissingRefreshToken)?;

        let mut token = self
            .token_repo
            .find_by_value(&presented)
            .await?
            .ok_or(AuthError::RefreshTokenNotFound)?;

        let now = self.clock.now();
        if token.is_expired(now) {
            // The row is left in place; the store's TTL index owns deletion.
            return Err(AuthError::ExpiredRefreshToken);
        }

        token.rotate(
            crypto::opaque_token(self.config.refresh_token_length),
            now,
            self.config.refresh_token_ttl,
        );

        // Conditional write keyed on the presented value. When two callers
        // race with the same value, exactly one write applies; the loser
        // gets the same answer as any other stale replay.
        let applied = self.token_repo.rotate(&token, &presented).await?;
        if !applied {
            tracing::warn!(token_id = %token.token_id, "Refresh token rotation lost a race");
            return Err(AuthError::RefreshTokenNotFound);
        }

        let access_token = self.codec.sign_access(&token.user_id.to_hex(), now)?;

        tracing::info!(user_id = %token.user_id, token_id = %token.token_id, "Session refreshed");

        Ok(RefreshOutput {
            access_token,
            refresh_token: token.value,
        })
    }
}
