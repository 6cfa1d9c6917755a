// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Process lifecycle wiring.

use crate::config::DeviceConfig;
use crate::listener::{spawn_listener, ConfigUpdate};
use crate::upload::UploadQueue;
use anyhow::Context;
use core::future::Future;
use tokio::sync::mpsc;
use tracing::info;
use vitalsim_core::DeviceIdentity;
use vitalsim_sampler::SampleGenerator;
use vitalsim_sched::Scheduler;

/// Run the device until `shutdown` resolves.
///
/// Generates the process-wide identity, starts the upload worker and the
/// scheduler, registers the configuration listener, then blocks on
/// `shutdown`. The teardown order is scheduler first, upload queue last,
/// so no tick can fire against a torn-down queue and every accepted
/// sample is drained before exit.
///
/// # Errors
///
/// Fails if the configured initial sampling period is not positive.
pub async fn run(
    config: DeviceConfig,
    updates: mpsc::Receiver<ConfigUpdate>,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let identity = DeviceIdentity::generate();
    info!(device = %identity, "telemetry device starting");

    let (queue, worker) = UploadQueue::bounded(config.upload_queue_capacity);
    let uploader = tokio::spawn(worker.run());

    let generator = SampleGenerator::new(config.range_profile());
    let scheduler = Scheduler::new(identity, generator, queue);
    scheduler
        .start(config.sample_period_ms())
        .context("invalid initial sample period in configuration")?;

    let listener = spawn_listener(scheduler.clone(), updates);

    shutdown.await;
    info!("stopping");

    scheduler.stop();
    listener.abort();
    let _ = listener.await;
    // The last queue handle lives inside the scheduler; dropping it closes
    // the channel and lets the worker drain and exit.
    drop(scheduler);
    let _ = uploader.await;

    info!("telemetry device stopped");
    Ok(())
}
