// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Named measurement ranges.

use core::fmt;

/// A half-open measurement range `[min, max)` in mmol/L.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeProfile {
    min: f64,
    max: f64,
}

impl RangeProfile {
    /// Euglycemic readings. The profile wired into the periodic path.
    pub const NORMAL: Self = Self {
        min: 3.9,
        max: 11.0,
    };

    /// Hypoglycemic readings, for fault-injection scenarios.
    pub const LOW: Self = Self { min: 0.0, max: 3.9 };

    /// Hyperglycemic readings, for fault-injection scenarios.
    pub const HIGH: Self = Self {
        min: 11.1,
        max: 33.3,
    };

    /// Look up a profile by its configuration name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(Self::NORMAL),
            "low" => Some(Self::LOW),
            "high" => Some(Self::HIGH),
            _ => None,
        }
    }

    /// Inclusive lower bound.
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Exclusive upper bound.
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether `value` lies within `[min, max)`.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value < self.max
    }
}

impl fmt::Display for RangeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}
