//! Domain Layer
//!
//! Contains entities, value objects, and the ports the use-cases consume.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{refresh_token::RefreshToken, user::User};
pub use repository::{CooldownStore, MailMessage, Mailer, RefreshTokenRepository, UserRepository};
pub use value_object::email::Email;
