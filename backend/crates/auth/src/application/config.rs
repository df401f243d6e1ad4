//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::token::TokenCodec;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared HMAC secret for signed tokens
    pub token_secret: Vec<u8>,
    /// Access token TTL (15 minutes)
    pub access_token_ttl: Duration,
    /// Refresh token TTL (1 week)
    pub refresh_token_ttl: Duration,
    /// Email-verification token TTL (1 hour)
    pub email_token_ttl: Duration,
    /// Cooldown between verification emails per user (5 minutes)
    pub verification_cooldown: Duration,
    /// Length of the opaque refresh token value, in hex characters
    pub refresh_token_length: usize,
    /// From address for outbound mail
    pub mail_from: String,
    /// Path under the caller-supplied frontend base URL that accepts the
    /// verification token
    pub verification_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; 32],
            access_token_ttl: Duration::from_secs(15 * 60),
            refresh_token_ttl: Duration::from_secs(7 * 24 * 3600),
            email_token_ttl: Duration::from_secs(3600),
            verification_cooldown: Duration::from_secs(5 * 60),
            refresh_token_length: 64,
            mail_from: "no-reply@localhost".to_string(),
            verification_path: "/verify-email".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Build the token codec from this config
    pub fn token_codec(&self) -> TokenCodec {
        TokenCodec::new(
            &self.token_secret,
            self.access_token_ttl,
            self.email_token_ttl,
        )
    }

    /// Full verification link for a signed email token
    ///
    /// `base_url` comes from the caller and is assumed to already be
    /// allow-list checked at the boundary.
    pub fn verification_link(&self, base_url: &str, token: &str) -> String {
        format!(
            "{}{}?token={}",
            base_url.trim_end_matches('/'),
            self.verification_path,
            token
        )
    }

    /// Cooldown in whole seconds, as the cache expects it
    pub fn verification_cooldown_secs(&self) -> u64 {
        self.verification_cooldown.as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetimes() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_ttl, Duration::from_secs(900));
        assert_eq!(config.refresh_token_ttl, Duration::from_secs(604800));
        assert_eq!(config.email_token_ttl, Duration::from_secs(3600));
        assert_eq!(config.verification_cooldown, Duration::from_secs(300));
        assert_eq!(config.refresh_token_length, 64);
    }

    #[test]
    fn test_verification_link_handles_trailing_slash() {
        let config = AuthConfig::default();
        assert_eq!(
            config.verification_link("https://app.example.com/", "abc"),
            "https://app.example.com/verify-email?token=abc"
        );
    }
}
