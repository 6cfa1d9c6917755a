// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The scheduler state machine.

use crate::timer_task::TimerTask;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};
use vitalsim_core::interval::FALLBACK_MILLIS;
use vitalsim_core::{DeviceIdentity, Interval, ReportSink, Result, SchedulerError};
use vitalsim_sampler::SampleGenerator;

/// Periodic sampling scheduler.
///
/// State machine: `Idle → Running` on [`start`](Self::start),
/// `Running → Running` on [`reconfigure`](Self::reconfigure) (replacing the
/// timer), anything `→ Stopped` on [`stop`](Self::stop); `Stopped` is
/// absorbing. At most one timer is active at any time.
///
/// One mutex guards the scheduler state. It is held across the
/// cancel-and-install pair in `reconfigure` and across each tick's
/// cancelled-check and delivery, which makes the two mutually exclusive:
/// an in-flight tick finishes delivering before its timer counts as
/// cancelled, and once `reconfigure` or `stop` returns, a superseded
/// timer's tick can observe only the cancelled token and delivers nothing.
///
/// Cloning is shallow; clones share the same state, so a configuration
/// listener can reconfigure the scheduler the entry point will later stop.
#[derive(Debug)]
pub struct Scheduler<S: ReportSink> {
    inner: Arc<Inner<S>>,
}

#[derive(Debug)]
struct Inner<S> {
    identity: DeviceIdentity,
    generator: SampleGenerator,
    sink: S,
    state: Mutex<State>,
}

#[derive(Debug)]
enum State {
    Idle,
    Running {
        interval: Interval,
        timer: TimerTask,
    },
    Stopped,
}

impl<S: ReportSink> Scheduler<S> {
    /// A scheduler in the `Idle` state. No timer runs until `start`.
    pub fn new(identity: DeviceIdentity, generator: SampleGenerator, sink: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                identity,
                generator,
                sink,
                state: Mutex::new(State::Idle),
            }),
        }
    }

    /// Install the initial repeating timer. The first tick fires
    /// immediately, then every `interval_ms` milliseconds.
    ///
    /// Panics if called outside a Tokio runtime.
    ///
    /// # Errors
    ///
    /// - [`SchedulerError::InvalidInterval`] if `interval_ms <= 0`; there
    ///   is no sensible sampling behavior without a valid period.
    /// - [`SchedulerError::AlreadyRunning`] if a timer is already active.
    /// - [`SchedulerError::Stopped`] after `stop`.
    pub fn start(&self, interval_ms: i64) -> Result<()> {
        let interval = Interval::try_from_millis(interval_ms)?;
        let mut state = self.inner.state.lock();
        match *state {
            State::Running { .. } => Err(SchedulerError::AlreadyRunning),
            State::Stopped => Err(SchedulerError::Stopped),
            State::Idle => {
                info!(period = %interval, "starting sampling");
                *state = State::Running {
                    interval,
                    timer: self.install(interval),
                };
                Ok(())
            }
        }
    }

    /// Replace the active timer with one of period `interval_ms`.
    ///
    /// The cancel-and-install pair is observed as a single transition: no
    /// tick from the superseded timer is delivered after this returns, and
    /// the new timer's first tick fires immediately, producing a sample
    /// right away as fast feedback that the change took effect.
    ///
    /// An interval of exactly 0 substitutes the documented fallback delay
    /// of 1000 ms rather than failing, tolerating a misbehaving
    /// configuration source. Called while still `Idle`, this installs the
    /// timer as an implicit start.
    ///
    /// Panics if called outside a Tokio runtime.
    ///
    /// # Errors
    ///
    /// - [`SchedulerError::InvalidInterval`] if `interval_ms < 0` (the
    ///   fallback covers exactly zero only); the active timer keeps
    ///   running.
    /// - [`SchedulerError::Stopped`] after `stop`.
    pub fn reconfigure(&self, interval_ms: i64) -> Result<()> {
        let interval = Interval::from_millis_or_fallback(interval_ms)?;
        if interval_ms == 0 {
            warn!(
                fallback_ms = FALLBACK_MILLIS,
                "zero sampling interval from configuration, using fallback delay"
            );
        }

        let mut state = self.inner.state.lock();
        match *state {
            State::Stopped => Err(SchedulerError::Stopped),
            State::Idle => {
                info!(period = %interval, "starting sampling from configuration update");
                *state = State::Running {
                    interval,
                    timer: self.install(interval),
                };
                Ok(())
            }
            State::Running {
                interval: ref mut current,
                ref mut timer,
            } => {
                info!(period = %interval, "replacing sampling timer");
                timer.cancel();
                *timer = self.install(interval);
                *current = interval;
                Ok(())
            }
        }
    }

    /// Cancel the active timer. No tick is delivered after this returns.
    /// Idempotent; the scheduler cannot be restarted afterwards.
    pub fn stop(&self) {
        let mut state = self.inner.state.lock();
        if let State::Running { ref timer, .. } = *state {
            info!("stopping sampling");
            timer.cancel();
        }
        *state = State::Stopped;
    }

    /// Whether a timer is currently active.
    pub fn is_running(&self) -> bool {
        matches!(*self.inner.state.lock(), State::Running { .. })
    }

    /// The period of the active timer, if running.
    pub fn current_interval(&self) -> Option<Interval> {
        match *self.inner.state.lock() {
            State::Running { interval, .. } => Some(interval),
            _ => None,
        }
    }

    fn install(&self, interval: Interval) -> TimerTask {
        let inner = Arc::clone(&self.inner);
        TimerTask::spawn(interval.as_duration(), move |token| {
            // Delivery and cancellation are serialized by the state lock:
            // a timer superseded while we waited for the lock must not
            // deliver its tick.
            let _guard = inner.state.lock();
            if token.is_cancelled() {
                return;
            }
            let sample = inner.generator.next_sample(&inner.identity);
            info!(value = sample.value(), device = %sample.device_id(), "sampled reading");
            inner.sink.accept(sample);
        })
    }
}

impl<S: ReportSink> Clone for Scheduler<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
