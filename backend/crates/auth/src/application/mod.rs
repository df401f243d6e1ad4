//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod request_email_verification;
pub mod verify_email;

use crate::domain::entity::user::User;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use refresh::{RefreshOutput, RefreshUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use request_email_verification::RequestEmailVerificationUseCase;
pub use verify_email::VerifyEmailUseCase;

/// A freshly established session: the user plus both credentials
///
/// Returned by register, login, and refresh alike.
pub struct SessionOutput {
    /// The authenticated user
    pub user: User,
    /// Short-lived signed access token
    pub access_token: String,
    /// Opaque, store-backed refresh token value
    pub refresh_token: String,
}
