// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observable [`ReportSink`] implementations.

use parking_lot::Mutex;
use std::sync::Arc;
use vitalsim_core::{ReportSink, Sample};

/// A sink that appends every accepted sample to a shared vector.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    samples: Arc<Mutex<Vec<Sample>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything accepted so far.
    pub fn samples(&self) -> Vec<Sample> {
        self.samples.lock().clone()
    }

    /// Number of samples accepted so far.
    pub fn len(&self) -> usize {
        self.samples.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.lock().is_empty()
    }
}

impl ReportSink for CollectingSink {
    fn accept(&self, sample: Sample) {
        self.samples.lock().push(sample);
    }
}

/// A sink that forwards every accepted sample into an unbounded channel,
/// so tests can await or drain deliveries.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: async_channel::Sender<Sample>,
}

/// Create a [`ChannelSink`] together with the receiving end.
pub fn channel_sink() -> (ChannelSink, async_channel::Receiver<Sample>) {
    let (tx, rx) = async_channel::unbounded();
    (ChannelSink { tx }, rx)
}

impl ReportSink for ChannelSink {
    fn accept(&self, sample: Sample) {
        // Unbounded, so this only fails once the test drops the receiver.
        let _ = self.tx.try_send(sample);
    }
}
