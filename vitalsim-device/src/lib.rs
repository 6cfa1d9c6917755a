// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simulated blood glucose monitor.
//!
//! Glue between the scheduler core and the (simulated) device platform:
//! configuration loading, the inbound configuration listener, the outbound
//! upload queue, and the process lifecycle. The actual transport and
//! session handling of a real device platform are out of scope; their
//! boundaries are the [`listener::ConfigUpdate`] channel on the way in and
//! the [`upload::UploadQueue`] on the way out.

pub mod app;
pub mod config;
pub mod listener;
pub mod upload;
