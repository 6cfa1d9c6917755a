// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simulated blood glucose monitor, console edition.
//!
//! Runs the device against the console in place of a real platform
//! connection: an integer typed on stdin is a simulated configuration push
//! (new sample period in minutes), and Ctrl-C stops the device. Set
//! `RUST_LOG` to adjust verbosity.

use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vitalsim_device::app;
use vitalsim_device::config::{DeviceConfig, DEFAULT_CONFIG_PATH};
use vitalsim_device::listener::ConfigUpdate;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DeviceConfig::load(Path::new(DEFAULT_CONFIG_PATH))?;

    // The platform delivers at most one configuration update at a time.
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(console_driver(tx));

    app::run(config, rx, shutdown_signal()).await
}

/// Feed console input into the configuration channel: one integer per
/// line, the new sampling period in minutes. Ends at EOF.
async fn console_driver(tx: mpsc::Sender<ConfigUpdate>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match input.parse::<i64>() {
            Ok(mins) => {
                if tx.send(ConfigUpdate {
                    sample_period_mins: mins,
                })
                .await
                .is_err()
                {
                    break;
                }
            }
            Err(_) => warn!(%input, "ignoring console input, expected a period in minutes"),
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown requested");
}
