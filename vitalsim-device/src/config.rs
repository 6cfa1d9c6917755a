// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Device configuration.

use crate::listener::minutes_to_millis;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;
use vitalsim_sampler::RangeProfile;

/// Default location of the cached configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "device_config.json";

/// Startup configuration of the simulated device.
///
/// Loaded from a JSON file when one exists, otherwise every field takes
/// its default. The file format is a local cache, not a contract; the
/// authoritative configuration arrives at runtime through the
/// configuration listener.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    /// Initial sampling period, in minutes.
    pub sample_period_mins: i64,
    /// Measurement range profile: "normal", "low" or "high".
    pub profile: String,
    /// Capacity of the upload queue before samples are dropped.
    pub upload_queue_capacity: usize,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            sample_period_mins: 1,
            profile: "normal".to_owned(),
            upload_queue_capacity: 64,
        }
    }
}

impl DeviceConfig {
    /// Load the configuration from `path`, falling back to defaults if the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading configuration from {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing configuration from {}", path.display()))
    }

    /// The initial sampling period in milliseconds, as the scheduler
    /// expects it.
    pub fn sample_period_ms(&self) -> i64 {
        minutes_to_millis(self.sample_period_mins)
    }

    /// The configured measurement range. An unknown profile name falls
    /// back to the normal range.
    pub fn range_profile(&self) -> RangeProfile {
        RangeProfile::by_name(&self.profile).unwrap_or_else(|| {
            warn!(profile = %self.profile, "unknown range profile, using normal");
            RangeProfile::NORMAL
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = DeviceConfig::load(Path::new("does_not_exist.json")).unwrap();
        assert_eq!(config, DeviceConfig::default());
        assert_eq!(config.sample_period_ms(), 60_000);
        assert_eq!(config.range_profile(), RangeProfile::NORMAL);
    }

    #[test]
    fn partial_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("device_config.json");
        fs::write(&path, r#"{ "sample_period_mins": 5 }"#).unwrap();

        let config = DeviceConfig::load(&path).unwrap();
        assert_eq!(config.sample_period_mins, 5);
        assert_eq!(config.profile, "normal");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("device_config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(DeviceConfig::load(&path).is_err());
    }

    #[test]
    fn unknown_profile_falls_back_to_normal() {
        let config = DeviceConfig {
            profile: "medium".to_owned(),
            ..DeviceConfig::default()
        };
        assert_eq!(config.range_profile(), RangeProfile::NORMAL);
    }
}
