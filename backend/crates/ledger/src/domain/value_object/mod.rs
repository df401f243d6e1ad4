//! Value Objects

pub mod amount;
pub mod month;
