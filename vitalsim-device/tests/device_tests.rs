// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tokio::sync::mpsc;
use tokio::time::pause;
use vitalsim_core::{DeviceIdentity, ReportSink, Sample};
use vitalsim_device::app;
use vitalsim_device::config::DeviceConfig;
use vitalsim_device::listener::{minutes_to_millis, spawn_listener, ConfigUpdate};
use vitalsim_device::upload::UploadQueue;
use vitalsim_sampler::SampleGenerator;
use vitalsim_sched::Scheduler;
use vitalsim_test_utils::{channel_sink, expect_no_sample, expect_sample, settle};

fn sample() -> Sample {
    SampleGenerator::normal().next_sample(&DeviceIdentity::generate())
}

#[tokio::test]
async fn listener_converts_minutes_and_reconfigures() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (sink, rx) = channel_sink();
    let scheduler = Scheduler::new(DeviceIdentity::generate(), SampleGenerator::normal(), sink);
    scheduler.start(minutes_to_millis(5))?;
    expect_sample(&rx).await;

    let (tx, updates) = mpsc::channel(1);
    let _listener = spawn_listener(scheduler.clone(), updates);

    // Act
    tx.send(ConfigUpdate {
        sample_period_mins: 2,
    })
    .await?;
    settle().await;

    // Assert: period converted to milliseconds, immediate tick delivered
    assert_eq!(
        scheduler.current_interval().map(|i| i.as_millis()),
        Some(120_000)
    );
    expect_sample(&rx).await;
    Ok(())
}

#[tokio::test]
async fn listener_drops_rejected_updates() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (sink, rx) = channel_sink();
    let scheduler = Scheduler::new(DeviceIdentity::generate(), SampleGenerator::normal(), sink);
    scheduler.start(60_000)?;
    expect_sample(&rx).await;

    let (tx, updates) = mpsc::channel(1);
    let _listener = spawn_listener(scheduler.clone(), updates);

    // Act: a negative period is rejected by the scheduler
    tx.send(ConfigUpdate {
        sample_period_mins: -3,
    })
    .await?;
    settle().await;

    // Assert: the active timer is untouched and nothing extra fired
    assert_eq!(
        scheduler.current_interval().map(|i| i.as_millis()),
        Some(60_000)
    );
    expect_no_sample(&rx).await;
    Ok(())
}

#[tokio::test]
async fn listener_forwards_the_zero_fallback() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (sink, rx) = channel_sink();
    let scheduler = Scheduler::new(DeviceIdentity::generate(), SampleGenerator::normal(), sink);
    scheduler.start(60_000)?;
    expect_sample(&rx).await;

    let (tx, updates) = mpsc::channel(1);
    let _listener = spawn_listener(scheduler.clone(), updates);

    // Act
    tx.send(ConfigUpdate {
        sample_period_mins: 0,
    })
    .await?;
    settle().await;

    // Assert: the documented fallback delay took effect
    assert_eq!(
        scheduler.current_interval().map(|i| i.as_millis()),
        Some(1_000)
    );
    expect_sample(&rx).await;
    Ok(())
}

#[tokio::test]
async fn upload_queue_accepts_without_blocking_when_full() {
    // Arrange: capacity 1 and no worker draining
    let (queue, _worker) = UploadQueue::bounded(1);

    // Act & Assert: the second accept drops instead of stalling the caller
    queue.accept(sample());
    queue.accept(sample());
}

#[tokio::test]
async fn upload_worker_drains_and_exits_when_the_queue_closes() {
    // Arrange
    let (queue, worker) = UploadQueue::bounded(8);
    let handle = tokio::spawn(worker.run());

    // Act
    queue.accept(sample());
    queue.accept(sample());
    drop(queue);

    // Assert: the worker finishes once every queue handle is gone
    handle.await.expect("worker should exit cleanly");
}

#[tokio::test]
async fn run_starts_and_stops_cleanly() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (_tx, updates) = mpsc::channel(1);

    // Act & Assert: immediate shutdown still goes through the full
    // start / stop / drain sequence
    app::run(DeviceConfig::default(), updates, async {}).await
}

#[tokio::test]
async fn run_rejects_an_invalid_initial_period() {
    // Arrange
    pause();
    let (_tx, updates) = mpsc::channel(1);
    let config = DeviceConfig {
        sample_period_mins: 0,
        ..DeviceConfig::default()
    };

    // Act
    let result = app::run(config, updates, async {}).await;

    // Assert
    let err = result.expect_err("a zero startup period is a startup error");
    assert!(err.to_string().contains("invalid initial sample period"));
}
