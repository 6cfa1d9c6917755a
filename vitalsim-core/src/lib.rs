// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared across the vitalsim workspace.
//!
//! This crate defines the data model of the simulated telemetry device:
//! the [`Sample`] produced on every scheduler tick, the process-wide
//! [`DeviceIdentity`] stamped onto each sample, the validated sampling
//! [`Interval`], the [`SchedulerError`] taxonomy, and the [`ReportSink`]
//! trait at the boundary to the upstream reporting collaborator.

pub mod error;
pub mod identity;
pub mod interval;
pub mod sample;
pub mod sink;

pub use self::error::{Result, SchedulerError};
pub use self::identity::DeviceIdentity;
pub use self::interval::Interval;
pub use self::sample::Sample;
pub use self::sink::ReportSink;
