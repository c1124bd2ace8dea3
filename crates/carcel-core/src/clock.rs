//! Day clock for the simulated season.
//!
//! The clock is the single source of truth for which day is being played.
//! It starts before day 1, advances once per simulated day, and refuses to
//! advance past the configured season length.

/// Errors that can occur during clock operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// The season has no days.
    #[error("invalid clock configuration: season must last at least one day")]
    EmptySeason,

    /// Every configured day has already been played.
    #[error("season exhausted: all {days} days already played")]
    Exhausted {
        /// Configured season length.
        days: u32,
    },
}

/// Counts simulated days from 1 to a fixed season length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayClock {
    /// Last day played; 0 before the first day.
    day: u32,
    /// Season length.
    days: u32,
}

impl DayClock {
    /// Create a clock for a season of `days` days.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::EmptySeason`] if `days` is zero.
    pub const fn new(days: u32) -> Result<Self, ClockError> {
        if days == 0 {
            return Err(ClockError::EmptySeason);
        }
        Ok(Self { day: 0, days })
    }

    /// Move to the next day and return its number.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Exhausted`] once the last day has been played.
    pub const fn advance(&mut self) -> Result<u32, ClockError> {
        if self.day >= self.days {
            return Err(ClockError::Exhausted { days: self.days });
        }
        // day < days <= u32::MAX, so the increment cannot overflow.
        match self.day.checked_add(1) {
            Some(next) => {
                self.day = next;
                Ok(next)
            }
            None => Err(ClockError::Exhausted { days: self.days }),
        }
    }

    /// Last day played; 0 before the first [`advance`](Self::advance).
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Season length.
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Whether every configured day has been played.
    pub const fn is_finished(&self) -> bool {
        self.day >= self.days
    }

    /// Days left to play.
    pub const fn remaining(&self) -> u32 {
        self.days.saturating_sub(self.day)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_day_season_rejected() {
        assert_eq!(DayClock::new(0), Err(ClockError::EmptySeason));
    }

    #[test]
    fn starts_before_day_one() {
        let clock = DayClock::new(6).unwrap();
        assert_eq!(clock.day(), 0);
        assert_eq!(clock.days(), 6);
        assert_eq!(clock.remaining(), 6);
        assert!(!clock.is_finished());
    }

    #[test]
    fn advances_through_the_season() {
        let mut clock = DayClock { day: 0, days: 3 };
        assert_eq!(clock.advance(), Ok(1));
        assert_eq!(clock.advance(), Ok(2));
        assert_eq!(clock.advance(), Ok(3));
        assert!(clock.is_finished());
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn refuses_to_advance_past_the_end() {
        let mut clock = DayClock { day: 0, days: 1 };
        assert_eq!(clock.advance(), Ok(1));
        assert_eq!(clock.advance(), Err(ClockError::Exhausted { days: 1 }));
        assert_eq!(clock.day(), 1);
    }

    #[test]
    fn max_length_season_does_not_overflow() {
        let mut clock = DayClock {
            day: u32::MAX.saturating_sub(1),
            days: u32::MAX,
        };
        assert_eq!(clock.advance(), Ok(u32::MAX));
        assert!(clock.advance().is_err());
    }
}
