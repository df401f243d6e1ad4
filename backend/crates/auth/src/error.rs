//! Auth Error Types
//!
//! Business-rule failures are expected, named outcomes with a stable
//! `code()` per variant; infrastructure failures are carried uninterpreted
//! and abort the use-case. Use-cases never retry internally.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email already registered (normalized, case-insensitive)
    #[error("Email is already registered")]
    DuplicateEmail,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Wrong password
    #[error("Invalid password")]
    InvalidPassword,

    /// Refresh token absent from the request
    #[error("Refresh token is missing")]
    MissingRefreshToken,

    /// Refresh token unknown - never issued, already rotated, or deleted
    #[error("Refresh token not found")]
    RefreshTokenNotFound,

    /// Refresh token found but past its expiry
    #[error("Refresh token expired")]
    ExpiredRefreshToken,

    /// Signed token failed verification (signature/audience/expiry/subject)
    #[error("Invalid token")]
    InvalidToken,

    /// Email verification requested or replayed for a verified account
    #[error("Email is already verified")]
    EmailAlreadyVerified,

    /// Verification email requested again inside the cooldown window
    #[error("A verification email was sent recently")]
    ActiveCooldown,

    /// Value-object validation failed (email format, password policy)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Document store error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Cooldown cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Mail transport error
    #[error("Mail transport error: {0}")]
    Mail(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Stable external identifier for the boundary layer
    ///
    /// Business failures map 1:1; infra failures collapse into generic
    /// codes so nothing internal leaks outward.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::DuplicateEmail => "DUPLICATE_EMAIL",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::InvalidPassword => "INVALID_PASSWORD",
            AuthError::MissingRefreshToken => "MISSING_REFRESH_TOKEN",
            AuthError::RefreshTokenNotFound => "REFRESH_TOKEN_NOT_FOUND",
            AuthError::ExpiredRefreshToken => "EXPIRED_REFRESH_TOKEN",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::EmailAlreadyVerified => "EMAIL_ALREADY_VERIFIED",
            AuthError::ActiveCooldown => "ACTIVE_COOLDOWN",
            AuthError::Validation(_) => "VALIDATION_FAILED",
            AuthError::Mail(_) => "MAIL_SEND_FAILED",
            AuthError::Database(_) | AuthError::Cache(_) => "SERVICE_UNAVAILABLE",
            AuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::DuplicateEmail | AuthError::EmailAlreadyVerified => ErrorKind::Conflict,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidPassword
            | AuthError::RefreshTokenNotFound
            | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::ExpiredRefreshToken => ErrorKind::Gone,
            AuthError::MissingRefreshToken | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::ActiveCooldown => ErrorKind::TooManyRequests,
            AuthError::Database(_) | AuthError::Cache(_) | AuthError::Mail(_) => {
                ErrorKind::ServiceUnavailable
            }
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError for the boundary layer
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => AuthError::InvalidToken,
            TokenError::Signing(msg) => AuthError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(AuthError::DuplicateEmail.code(), "DUPLICATE_EMAIL");
        assert_eq!(AuthError::UserNotFound.code(), "USER_NOT_FOUND");
        assert_eq!(AuthError::InvalidPassword.code(), "INVALID_PASSWORD");
        assert_eq!(
            AuthError::MissingRefreshToken.code(),
            "MISSING_REFRESH_TOKEN"
        );
        assert_eq!(
            AuthError::RefreshTokenNotFound.code(),
            "REFRESH_TOKEN_NOT_FOUND"
        );
        assert_eq!(
            AuthError::ExpiredRefreshToken.code(),
            "EXPIRED_REFRESH_TOKEN"
        );
        assert_eq!(AuthError::InvalidToken.code(), "INVALID_TOKEN");
        assert_eq!(
            AuthError::EmailAlreadyVerified.code(),
            "EMAIL_ALREADY_VERIFIED"
        );
        assert_eq!(AuthError::ActiveCooldown.code(), "ACTIVE_COOLDOWN");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(AuthError::DuplicateEmail.kind(), ErrorKind::Conflict);
        assert_eq!(AuthError::ExpiredRefreshToken.kind(), ErrorKind::Gone);
        assert_eq!(AuthError::ActiveCooldown.kind(), ErrorKind::TooManyRequests);
        assert_eq!(
            AuthError::RefreshTokenNotFound.kind(),
            ErrorKind::Unauthorized
        );
    }

    #[test]
    fn test_token_error_conversion() {
        assert!(matches!(
            AuthError::from(TokenError::Invalid),
            AuthError::InvalidToken
        ));
        assert!(matches!(
            AuthError::from(TokenError::Signing("key".into())),
            AuthError::Internal(_)
        ));
    }
}
