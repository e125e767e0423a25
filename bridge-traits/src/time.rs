//! Time Abstractions
//!
//! Provides an injectable time source so record timestamps and
//! timestamp-prefixed filenames are deterministic under test.

use chrono::{DateTime, Utc};

/// Time source trait
///
/// # Example
///
/// ```ignore
/// use bridge_traits::time::Clock;
///
/// fn stamp(clock: &dyn Clock) -> String {
///     clock.now().to_rfc3339()
/// }
/// ```
pub trait Clock: Send + Sync {
    /// Get current UTC time
    fn now(&self) -> DateTime<Utc>;

    /// Get current Unix timestamp in milliseconds
    fn unix_timestamp_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// System clock implementation using actual system time
#[derive(Debug, Clone, Default)]
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
    fn system_clock_millis_track_now() {
        let clock = SystemClock;
        let before = Utc::now().timestamp_millis();
        let millis = clock.unix_timestamp_millis();
        let after = Utc::now().timestamp_millis();
        assert!(millis >= before && millis <= after);
    }
}
