// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The measurement record produced on every scheduler tick.

use crate::identity::DeviceIdentity;
use serde::{Serialize, Serializer};
use std::time::{SystemTime, UNIX_EPOCH};

/// One synthetic measurement, stamped with the device identity and the
/// wall-clock capture time.
///
/// Immutable once constructed; produced by the sample generator and
/// consumed exactly once by the reporting sink.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sample {
    device_id: DeviceIdentity,
    value: f64,
    #[serde(serialize_with = "serialize_unix_millis")]
    captured_at: SystemTime,
}

impl Sample {
    /// Construct a sample. `captured_at` is the wall-clock time at
    /// generation, supplied by the generator.
    pub fn new(device_id: DeviceIdentity, value: f64, captured_at: SystemTime) -> Self {
        Self {
            device_id,
            value,
            captured_at,
        }
    }

    /// Identity of the device that produced this sample.
    pub fn device_id(&self) -> &DeviceIdentity {
        &self.device_id
    }

    /// The measured value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Wall-clock capture time.
    pub fn captured_at(&self) -> SystemTime {
        self.captured_at
    }
}

fn serialize_unix_millis<S: Serializer>(
    time: &SystemTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let millis = time
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    serializer.serialize_u64(millis as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn accessors_return_the_constructed_triple() {
        let identity = DeviceIdentity::from_octets([4, 5, 6, 7, 8, 9]);
        let at = UNIX_EPOCH + Duration::from_millis(1_700_000_000_000);
        let sample = Sample::new(identity.clone(), 7.25, at);

        assert_eq!(sample.device_id(), &identity);
        assert_eq!(sample.value(), 7.25);
        assert_eq!(sample.captured_at(), at);
    }

    #[test]
    fn serializes_capture_time_as_unix_millis() {
        let identity = DeviceIdentity::from_octets([4, 5, 6, 7, 8, 9]);
        let at = UNIX_EPOCH + Duration::from_millis(1_700_000_000_000);
        let sample = Sample::new(identity, 5.5, at);

        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["device_id"], "04:05:06:07:08:09");
        assert_eq!(json["value"], 5.5);
        assert_eq!(json["captured_at"], 1_700_000_000_000u64);
    }
}
