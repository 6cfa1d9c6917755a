// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Outbound boundary: the upload queue.
//!
//! Stands in for the platform SDK's log collector. Samples are queued on
//! accept and drained by a single worker, one record at a time; every
//! queued record is eligible for upload immediately. The "upload" itself
//! is a structured log line carrying the JSON-encoded record — transport,
//! retries and backoff belong to a real platform and are out of scope.

use async_channel::TrySendError;
use tracing::{debug, error, info, warn};
use vitalsim_core::{ReportSink, Sample};

/// The sink handed to the scheduler. Accepts without blocking; a full
/// queue drops the sample rather than stalling a tick.
#[derive(Clone, Debug)]
pub struct UploadQueue {
    tx: async_channel::Sender<Sample>,
}

/// Drains the queue. Runs until every [`UploadQueue`] handle is gone.
#[derive(Debug)]
pub struct UploadWorker {
    rx: async_channel::Receiver<Sample>,
}

impl UploadQueue {
    /// A bounded queue of the given capacity together with its worker.
    pub fn bounded(capacity: usize) -> (Self, UploadWorker) {
        let (tx, rx) = async_channel::bounded(capacity);
        (Self { tx }, UploadWorker { rx })
    }
}

impl ReportSink for UploadQueue {
    fn accept(&self, sample: Sample) {
        match self.tx.try_send(sample) {
            Ok(()) => {}
            Err(TrySendError::Full(sample)) => {
                warn!(value = sample.value(), "upload queue full, dropping sample");
            }
            // Worker already gone; the scheduler is being shut down.
            Err(TrySendError::Closed(_)) => {}
        }
    }
}

impl UploadWorker {
    /// Upload queued records one at a time until the queue closes.
    pub async fn run(self) {
        while let Ok(sample) = self.rx.recv().await {
            match serde_json::to_string(&sample) {
                Ok(record) => info!(%record, "uploaded sample record"),
                Err(err) => error!(%err, "failed to encode sample record"),
            }
        }
        debug!("upload queue closed, worker exiting");
    }
}
