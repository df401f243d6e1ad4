//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, persistence/service ports
//! - `application/` - Use cases and application configuration
//! - `infra/` - MongoDB, Redis, and SMTP adapters
//!
//! ## Features
//! - Register/login with email + password
//! - Rotating refresh tokens (7 days) exchanged for access tokens (15 min)
//! - Email verification gated by a 5 minute cooldown
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - Refresh-token rotation is a destructive read: the old value is dead
//!   the instant the new one is persisted, so replay surfaces as not-found
//! - Access tokens are stateless and expire naturally; no revocation list

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::mongo::MongoAuthStore;
pub use infra::redis::RedisCooldownStore;
pub use infra::smtp::SmtpMailer;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
