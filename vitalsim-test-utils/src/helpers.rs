// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Await helpers for scheduler tests.
//!
//! Scheduler tests run under `tokio::time::pause()` and drive the clock
//! with `advance`. After an `advance`, the timer task is runnable but has
//! not executed yet; [`settle`] yields until it has, so assertions on the
//! sink channel are deterministic without real-time waits.

use async_channel::Receiver;
use vitalsim_core::Sample;

/// Yield to the runtime until spawned timer tasks have processed every
/// tick made ready by a clock advance.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// Expect exactly one delivered sample, after letting pending ticks run.
///
/// If nothing has arrived after yielding, waits up to 1 ms of (paused)
/// clock time: Tokio's timer rounds deadlines up to the next millisecond,
/// so an immediately-due tick installed while the paused clock sits
/// between millisecond boundaries only fires once the clock auto-advances
/// past that rounding. A tick that is not yet due is a full period away
/// and still fails the expectation.
///
/// # Panics
///
/// Panics if no sample, or more than one, has been delivered.
pub async fn expect_sample(rx: &Receiver<Sample>) -> Sample {
    settle().await;
    let sample = match rx.try_recv() {
        Ok(sample) => sample,
        Err(_) => tokio::select! {
            received = rx.recv() => received.expect("expected one delivered sample"),
            _ = tokio::time::sleep(core::time::Duration::from_millis(1)) => {
                panic!("expected one delivered sample")
            }
        },
    };
    settle().await;
    assert!(
        rx.is_empty(),
        "expected exactly one delivered sample, found more"
    );
    sample
}

/// Expect that no sample has been delivered, after letting pending ticks
/// run.
///
/// # Panics
///
/// Panics if a sample is waiting in the channel.
pub async fn expect_no_sample(rx: &Receiver<Sample>) {
    settle().await;
    if let Ok(sample) = rx.try_recv() {
        panic!("unexpected delivered sample: {sample:?}");
    }
}
