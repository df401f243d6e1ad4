//! Logout Use Case
//!
//! Deletes the presented refresh token. Idempotent: logging out an unknown
//! or already-deleted value succeeds silently. Outstanding access tokens
//! stay valid until their natural expiry.

use std::sync::Arc;

use crate::domain::repository::RefreshTokenRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<R>
where
    R: RefreshTokenRepository,
{
    token_repo: Arc<R>,
}

impl<R> LogoutUseCase<R>
where
    R: RefreshTokenRepository,
{
    pub fn new(token_repo: Arc<R>) -> Self {
        Self { token_repo }
    }

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<()> {
        self.token_repo.delete(refresh_token).await?;
        tracing::info!("Session ended");
        Ok(())
    }
}
