// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synthetic measurement generation.
//!
//! The device simulates a blood glucose monitor: every scheduler tick draws
//! one value (mmol/L) uniformly from a named [`RangeProfile`] and stamps it
//! into a [`vitalsim_core::Sample`]. Only the "normal" profile is wired
//! into the periodic path; the "low" and "high" profiles exist for
//! fault-injection scenarios.

pub mod generator;
pub mod profile;

pub use self::generator::SampleGenerator;
pub use self::profile::RangeProfile;
