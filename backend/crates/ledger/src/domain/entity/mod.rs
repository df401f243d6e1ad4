//! Entities

pub mod transaction;
