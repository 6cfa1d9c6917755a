// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-tick sample generation.

use crate::profile::RangeProfile;
use rand::Rng;
use std::time::SystemTime;
use vitalsim_core::{DeviceIdentity, Sample};

/// Draws one uniform value from a range profile per call.
///
/// Each call uses the thread-local generator, so draws are independent and
/// uniform without shared mutable state. There is no error path: generation
/// is pure arithmetic over a random draw, with no I/O.
#[derive(Clone, Copy, Debug)]
pub struct SampleGenerator {
    profile: RangeProfile,
}

impl SampleGenerator {
    /// A generator over the given range profile.
    pub const fn new(profile: RangeProfile) -> Self {
        Self { profile }
    }

    /// A generator over the normal range, as wired into the periodic path.
    pub const fn normal() -> Self {
        Self::new(RangeProfile::NORMAL)
    }

    /// The range this generator draws from.
    pub const fn profile(&self) -> RangeProfile {
        self.profile
    }

    /// Produce one sample: a uniform draw from `[min, max)`, stamped with
    /// `device_id` and the current wall-clock time.
    pub fn next_sample(&self, device_id: &DeviceIdentity) -> Sample {
        let value = rand::rng().random_range(self.profile.min()..self.profile.max());
        Sample::new(device_id.clone(), value, SystemTime::now())
    }
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::normal()
    }
}
