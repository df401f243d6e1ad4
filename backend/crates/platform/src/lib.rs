//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Injected clock for testable expiry logic
//! - Cryptographically secure opaque token generation
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Signed, audience-scoped, time-bounded token codec (JWT)

pub mod clock;
pub mod crypto;
pub mod password;
pub mod token;
