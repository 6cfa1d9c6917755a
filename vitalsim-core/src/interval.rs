// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Validated sampling interval.

use crate::error::{Result, SchedulerError};
use core::fmt;
use core::time::Duration;

/// Fallback delay, in milliseconds, substituted when a configuration push
/// carries an interval of exactly zero.
pub const FALLBACK_MILLIS: u64 = 1_000;

/// A positive sampling period with millisecond granularity.
///
/// The constructors take signed milliseconds so that the invalid inputs a
/// misbehaving configuration source can produce (zero, negative) are
/// representable and handled explicitly rather than clamped on the way in.
///
/// # Example
///
/// ```
/// use vitalsim_core::Interval;
///
/// let interval = Interval::try_from_millis(5_000).unwrap();
/// assert_eq!(interval.as_millis(), 5_000);
///
/// assert!(Interval::try_from_millis(0).is_err());
/// assert!(Interval::try_from_millis(-5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval(Duration);

impl Interval {
    /// Create an interval from milliseconds, rejecting non-positive values.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidInterval`] if `millis <= 0`.
    pub fn try_from_millis(millis: i64) -> Result<Self> {
        if millis <= 0 {
            return Err(SchedulerError::invalid_interval(millis));
        }
        Ok(Self(Duration::from_millis(millis as u64)))
    }

    /// Create an interval from milliseconds, substituting the documented
    /// fallback delay ([`FALLBACK_MILLIS`]) for exactly zero.
    ///
    /// This is the reconfiguration-path constructor: a configuration push
    /// carrying a zero period falls back to a short default delay instead
    /// of failing, so a misbehaving configuration source cannot stall the
    /// device.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidInterval`] for negative values; the
    /// fallback covers exactly zero only.
    pub fn from_millis_or_fallback(millis: i64) -> Result<Self> {
        if millis == 0 {
            return Ok(Self(Duration::from_millis(FALLBACK_MILLIS)));
        }
        Self::try_from_millis(millis)
    }

    /// The interval as a `Duration`.
    pub const fn as_duration(&self) -> Duration {
        self.0
    }

    /// The interval in whole milliseconds.
    pub const fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }
}

impl From<Interval> for Duration {
    fn from(interval: Interval) -> Self {
        interval.0
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_intervals_are_accepted() {
        let interval = Interval::try_from_millis(1).unwrap();
        assert_eq!(interval.as_duration(), Duration::from_millis(1));
    }

    #[test]
    fn zero_and_negative_are_rejected() {
        assert!(matches!(
            Interval::try_from_millis(0),
            Err(SchedulerError::InvalidInterval { millis: 0 })
        ));
        assert!(matches!(
            Interval::try_from_millis(-5),
            Err(SchedulerError::InvalidInterval { millis: -5 })
        ));
    }

    #[test]
    fn zero_falls_back_on_the_reconfigure_path() {
        let interval = Interval::from_millis_or_fallback(0).unwrap();
        assert_eq!(interval.as_millis(), u128::from(FALLBACK_MILLIS));
    }

    #[test]
    fn negative_still_fails_on_the_reconfigure_path() {
        assert!(Interval::from_millis_or_fallback(-1).is_err());
    }

    #[test]
    fn displays_in_milliseconds() {
        let interval = Interval::try_from_millis(2_500).unwrap();
        assert_eq!(interval.to_string(), "2500ms");
    }
}
