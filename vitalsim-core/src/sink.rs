// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Boundary to the upstream reporting collaborator.

use crate::sample::Sample;
use std::sync::Arc;

/// Accepts produced samples for eventual upstream delivery.
///
/// The contract is "accept and queue": implementations must not block the
/// caller and give no synchronous acknowledgment. How and when a sample is
/// actually transmitted, and how transport failures are retried, belong to
/// the implementing collaborator — the scheduler neither knows nor masks
/// them.
pub trait ReportSink: Send + Sync + 'static {
    /// Accept one sample for upload.
    fn accept(&self, sample: Sample);
}

impl<S: ReportSink> ReportSink for Arc<S> {
    fn accept(&self, sample: Sample) {
        (**self).accept(sample);
    }
}
