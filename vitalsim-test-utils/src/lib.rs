// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the vitalsim workspace.
//!
//! Provides [`ReportSink`](vitalsim_core::ReportSink) implementations that
//! make scheduler deliveries observable from tests, plus await helpers for
//! asserting on emissions under Tokio's paused clock. For development and
//! testing only, not for production code.

pub mod helpers;
pub mod sinks;

pub use self::helpers::{expect_no_sample, expect_sample, settle};
pub use self::sinks::{channel_sink, ChannelSink, CollectingSink};
