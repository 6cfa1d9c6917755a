// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Periodic sampling scheduler with safe live reconfiguration.
//!
//! The [`Scheduler`] owns a single repeating fixed-rate timer. On every
//! tick it draws one sample from the generator and hands it to the
//! reporting sink. The sampling period can be replaced at runtime:
//! [`Scheduler::reconfigure`] atomically cancels the active timer and
//! installs a new one whose first tick fires immediately, so a
//! configuration change always produces a sample right away and a
//! superseded timer can never deliver after the call returns.
//!
//! # Example
//!
//! ```no_run
//! use vitalsim_core::DeviceIdentity;
//! use vitalsim_sampler::SampleGenerator;
//! use vitalsim_sched::Scheduler;
//! use vitalsim_test_utils::CollectingSink;
//!
//! # #[tokio::main]
//! # async fn main() -> vitalsim_core::Result<()> {
//! let scheduler = Scheduler::new(
//!     DeviceIdentity::generate(),
//!     SampleGenerator::normal(),
//!     CollectingSink::new(),
//! );
//! scheduler.start(5_000)?;
//! // ... later, from a configuration callback:
//! scheduler.reconfigure(2_000)?;
//! // ... on shutdown:
//! scheduler.stop();
//! # Ok(())
//! # }
//! ```

pub mod scheduler;
mod timer_task;

pub use self::scheduler::Scheduler;
