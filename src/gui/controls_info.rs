//! Controls Info Pause
//!
//! Showing the controls info holds the settings screen for a fixed time.
//! Instead of sleeping, the pause is a deadline that every tick compares
//! against its own timestamp, so window events keep flowing while it is up.

use std::time::{Duration, Instant};

/// Default time the info stays on screen
pub const DEFAULT_INFO_DURATION: Duration = Duration::from_secs(3);

/// An active info pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsInfo {
    until: Instant,
}

impl ControlsInfo {
    /// Starts a pause at `now` lasting `duration`
    pub fn start(now: Instant, duration: Duration) -> Self {
        ControlsInfo {
            until: now + duration,
        }
    }

    pub fn until(&self) -> Instant {
        self.until
    }

    /// True once `now` reaches the deadline
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.until
    }

    /// Time left before the pause ends
    pub fn remaining(&self, now: Instant) -> Duration {
        self.until.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_at_deadline() {
        let start = Instant::now();
        let info = ControlsInfo::start(start, Duration::from_secs(3));

        assert!(!info.is_expired(start));
        assert!(!info.is_expired(start + Duration::from_millis(2_999)));
        assert!(info.is_expired(start + Duration::from_secs(3)));
        assert!(info.is_expired(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_remaining_time() {
        let start = Instant::now();
        let info = ControlsInfo::start(start, Duration::from_secs(3));

        assert_eq!(info.remaining(start + Duration::from_secs(1)), Duration::from_secs(2));
        assert_eq!(info.remaining(start + Duration::from_secs(5)), Duration::ZERO);
    }
}
