//! Injectable hour-of-day source for time-based recommendations.

use chrono::{Local, Timelike};

/// Provides the current hour of day (0-23).
pub trait Clock: Send + Sync {
    fn hour(&self) -> u32;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Always reports the same hour. Hours above 23 wrap around.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(u32);

impl FixedClock {
    #[must_use]
    pub const fn new(hour: u32) -> Self {
        Self(hour % 24)
    }
}

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock::new(8).hour(), 8);
        assert_eq!(FixedClock::new(26).hour(), 2);
    }

    #[test]
    fn test_system_clock_in_range() {
        assert!(SystemClock.hour() < 24);
    }
}
