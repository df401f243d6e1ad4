//! Injected Clock
//!
//! Expiry arithmetic (refresh-token TTLs, cooldown windows) reads time
//! through this trait rather than calling `Utc::now()` at the call site,
//! so tests can pin or advance time deterministically.

use chrono::{DateTime, Utc};

/// Time source
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used in production wiring
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
