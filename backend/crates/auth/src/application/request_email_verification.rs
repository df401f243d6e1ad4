//! Request Email Verification Use Case
//!
//! Sends a verification link to the user's address, throttled by a
//! per-user cooldown. The cooldown is only armed after the mail actually
//! went out, so a failed send never locks the user out of retrying.

use std::sync::Arc;

use kernel::id::UserId;
use platform::clock::Clock;
use platform::token::TokenCodec;

use crate::application::config::AuthConfig;
use crate::domain::repository::{CooldownStore, MailMessage, Mailer, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Request email verification use case
pub struct RequestEmailVerificationUseCase<U, C, M>
where
    U: UserRepository,
    C: CooldownStore,
    M: Mailer,
{
    user_repo: Arc<U>,
    cooldown: Arc<C>,
    mailer: Arc<M>,
    codec: TokenCodec,
    config: Arc<AuthConfig>,
    clock: Arc<dyn Clock>,
}

impl<U, C, M> RequestEmailVerificationUseCase<U, C, M>
where
    U: UserRepository,
    C: CooldownStore,
    M: Mailer,
{
    pub fn new(
        user_repo: Arc<U>,
        cooldown: Arc<C>,
        mailer: Arc<M>,
        config: Arc<AuthConfig>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            cooldown,
            mailer,
            codec: config.token_codec(),
            config,
            clock,
        }
    }

    /// `frontend_base_url` is caller-supplied and must already be checked
    /// against an allow-list at the boundary.
    pub async fn execute(&self, user_id: &UserId, frontend_base_url: &str) -> AuthResult<()> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.email_verified {
            return Err(AuthError::EmailAlreadyVerified);
        }

        if self.cooldown.is_active(user_id).await? {
            return Err(AuthError::ActiveCooldown);
        }

        let token = self
            .codec
            .sign_email_verification(&user.user_id.to_hex(), self.clock.now())?;
        let link = self.config.verification_link(frontend_base_url, &token);

        let message = MailMessage {
            from: self.config.mail_from.clone(),
            to: user.email.as_str().to_string(),
            subject: "Verify your email address".to_string(),
            html: format!(
                "<p>Click the link below to verify your email address. \
                 The link expires in one hour.</p>\
                 <p><a href=\"{link}\">Verify email</a></p>"
            ),
        };
        self.mailer.send(&message).await?;

        // Armed only after a successful send.
        self.cooldown
            .activate(user_id, self.config.verification_cooldown_secs())
            .await?;

        tracing::info!(user_id = %user.user_id, "Verification email sent");

        Ok(())
    }
}
