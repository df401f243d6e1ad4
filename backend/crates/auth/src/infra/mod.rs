//! Infrastructure Layer
//!
//! MongoDB, Redis, and SMTP implementations of the domain ports.

pub mod mongo;
pub mod redis;
pub mod smtp;

// Re-exports
pub use mongo::MongoAuthStore;
pub use redis::RedisCooldownStore;
pub use smtp::SmtpMailer;
