//! Signed Token Codec
//!
//! Audience-scoped, time-bounded signed assertions (JWT, HS256) for the
//! two stateless token kinds the system issues:
//! - access tokens (15 minutes)
//! - email-verification tokens (1 hour)
//!
//! Verification is pure signature + claim checking, no store lookup.
//! By design an issued token cannot be revoked before its natural expiry;
//! the short access-token lifetime is the mitigation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Token purpose, carried as the `aud` claim
///
/// Verifying against the wrong audience fails, which prevents cross-purpose
/// replay (an access token can never pass as a verification link).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenAudience {
    Access,
    EmailVerification,
}

impl TokenAudience {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenAudience::Access => "access",
            TokenAudience::EmailVerification => "email-verification",
        }
    }
}

/// Token codec errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature invalid, audience mismatch, expired, malformed subject, or
    /// otherwise unusable. Deliberately one variant: callers (and attackers)
    /// cannot tell which check failed.
    #[error("Invalid token")]
    Invalid,

    /// Signing failed (key/serialization problem, not user input)
    #[error("Token signing failed: {0}")]
    Signing(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    aud: String,
    iat: i64,
    exp: i64,
}

/// Stateless signing/verification of audience-scoped tokens
///
/// Holds the derived keys; retains no per-token state between calls.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    email_verification_ttl: Duration,
}

impl TokenCodec {
    /// Build a codec from the shared HMAC secret and the two lifetimes
    pub fn new(secret: &[u8], access_ttl: Duration, email_verification_ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            access_ttl,
            email_verification_ttl,
        }
    }

    /// Sign an access token for `subject`, expiring 15 minutes after `now`
    /// (per the configured TTL)
    pub fn sign_access(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        self.sign(subject, TokenAudience::Access, self.access_ttl, now)
    }

    /// Sign an email-verification token for `subject`, expiring 1 hour
    /// after `now` (per the configured TTL)
    pub fn sign_email_verification(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        self.sign(
            subject,
            TokenAudience::EmailVerification,
            self.email_verification_ttl,
            now,
        )
    }

    /// Verify an access token and return its subject
    pub fn verify_access(&self, token: &str) -> Result<String, TokenError> {
        self.verify(token, TokenAudience::Access)
    }

    /// Verify an email-verification token and return its subject
    pub fn verify_email_verification(&self, token: &str) -> Result<String, TokenError> {
        self.verify(token, TokenAudience::EmailVerification)
    }

    fn sign(
        &self,
        subject: &str,
        audience: TokenAudience,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let exp = now + chrono::Duration::seconds(ttl.as_secs() as i64);
        let claims = Claims {
            sub: subject.to_string(),
            aud: audience.as_str().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str, audience: TokenAudience) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "aud"]);
        validation.leeway = 0;

        let data =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|_| TokenError::Invalid)?;

        // The subject must be a well-formed entity id (24 lowercase hex
        // chars); anything else is as unusable as a bad signature.
        if !is_well_formed_subject(&data.claims.sub) {
            return Err(TokenError::Invalid);
        }

        Ok(data.claims.sub)
    }
}

/// Check the 24-hex-character object-id shape without a store dependency
fn is_well_formed_subject(s: &str) -> bool {
    s.len() == 24
        && s.chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBJECT: &str = "507f1f77bcf86cd799439011";

    fn codec(secret: &[u8]) -> TokenCodec {
        TokenCodec::new(
            secret,
            Duration::from_secs(15 * 60),
            Duration::from_secs(60 * 60),
        )
    }

    #[test]
    fn test_access_roundtrip() {
        let codec = codec(b"test-secret");
        let token = codec.sign_access(SUBJECT, Utc::now()).unwrap();
        let subject = codec.verify_access(&token).unwrap();
        assert_eq!(subject, SUBJECT);
    }

    #[test]
    fn test_email_verification_roundtrip() {
        let codec = codec(b"test-secret");
        let token = codec
            .sign_email_verification(SUBJECT, Utc::now())
            .unwrap();
        let subject = codec.verify_email_verification(&token).unwrap();
        assert_eq!(subject, SUBJECT);
    }

    #[test]
    fn test_wrong_secret_fails() {
        let signer = codec(b"secret-a");
        let verifier = codec(b"secret-b");
        let token = signer.sign_access(SUBJECT, Utc::now()).unwrap();
        assert!(matches!(
            verifier.verify_access(&token),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_audience_is_enforced_both_ways() {
        let codec = codec(b"test-secret");

        let access = codec.sign_access(SUBJECT, Utc::now()).unwrap();
        assert!(matches!(
            codec.verify_email_verification(&access),
            Err(TokenError::Invalid)
        ));

        let verification = codec
            .sign_email_verification(SUBJECT, Utc::now())
            .unwrap();
        assert!(matches!(
            codec.verify_access(&verification),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_expired_token_fails() {
        let codec = codec(b"test-secret");
        // Issued an hour ago with a 15 minute TTL
        let token = codec
            .sign_access(SUBJECT, Utc::now() - chrono::Duration::hours(1))
            .unwrap();
        assert!(matches!(
            codec.verify_access(&token),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_garbage_token_fails() {
        let codec = codec(b"test-secret");
        assert!(matches!(
            codec.verify_access("not.a.token"),
            Err(TokenError::Invalid)
        ));
        assert!(matches!(
            codec.verify_access(""),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_malformed_subject_rejected() {
        let codec = codec(b"test-secret");
        let token = codec.sign_access("not-an-object-id", Utc::now()).unwrap();
        assert!(matches!(
            codec.verify_access(&token),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_subject_shape() {
        assert!(is_well_formed_subject(SUBJECT));
        assert!(!is_well_formed_subject(""));
        assert!(!is_well_formed_subject("507F1F77BCF86CD799439011")); // uppercase
        assert!(!is_well_formed_subject("507f1f77bcf86cd79943901")); // 23 chars
        assert!(!is_well_formed_subject("507f1f77bcf86cd7994390111")); // 25 chars
        assert!(!is_well_formed_subject("zzzf1f77bcf86cd799439011")); // non-hex
    }
}
