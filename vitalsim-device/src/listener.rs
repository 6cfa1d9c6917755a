// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Inbound boundary: the configuration listener.
//!
//! The platform pushes configuration changes asynchronously, at most one
//! at a time, carrying the new sample period in minutes. The listener
//! converts to milliseconds and reconfigures the scheduler; ordering
//! relative to ticks is governed entirely by the scheduler's own
//! mutual-exclusion discipline.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};
use vitalsim_core::ReportSink;
use vitalsim_sched::Scheduler;

/// One configuration push from the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigUpdate {
    /// New sampling period, in minutes.
    pub sample_period_mins: i64,
}

/// Convert a period in minutes to the scheduler's millisecond unit.
pub fn minutes_to_millis(mins: i64) -> i64 {
    mins.saturating_mul(60_000)
}

/// Spawn the listener task bridging `updates` onto the scheduler.
///
/// A rejected update (negative period, scheduler stopped) is logged and
/// dropped; the active timer keeps running. The task ends when the update
/// channel closes.
pub fn spawn_listener<S: ReportSink>(
    scheduler: Scheduler<S>,
    mut updates: mpsc::Receiver<ConfigUpdate>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(update) = updates.recv().await {
            info!(
                mins = update.sample_period_mins,
                "received configuration data, new sample period"
            );
            if let Err(err) = scheduler.reconfigure(minutes_to_millis(update.sample_period_mins)) {
                error!(%err, "rejected configuration update");
            }
        }
    })
}
