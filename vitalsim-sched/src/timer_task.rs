// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The spawned repeating-timer task backing one active timer.

use core::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Handle to a spawned fixed-rate timer task.
///
/// The task drives a `tokio::time::interval` whose first tick fires
/// immediately and whose successive firing times are computed from the
/// original schedule (`MissedTickBehavior::Burst`), not from handler
/// completion. Cancelling the handle ends the task at its next poll;
/// whether a tick that has already fired may still deliver is decided by
/// the callback itself (the scheduler checks the token under its state
/// lock). The handle cancels on drop.
#[derive(Debug)]
pub(crate) struct TimerTask {
    cancel: CancellationToken,
}

impl TimerTask {
    /// Spawn a timer task firing `on_tick` every `period`, starting
    /// immediately. The callback receives the task's own token so it can
    /// recheck cancellation at delivery time.
    ///
    /// Panics if called outside a Tokio runtime.
    pub(crate) fn spawn<F>(period: Duration, on_tick: F) -> Self
    where
        F: Fn(&CancellationToken) + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => on_tick(&token),
                }
            }
        });

        Self { cancel }
    }

    /// Cancel the timer. Idempotent.
    pub(crate) fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for TimerTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
