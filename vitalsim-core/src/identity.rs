// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Process-wide device identity.

use core::fmt;
use rand::Rng;
use serde::{Serialize, Serializer};

/// A pseudo-random hardware address identifying this device process.
///
/// Six random octets with the two low-order bits of the first octet
/// cleared, marking the address as unicast and locally administered (a
/// convention borrowed from real link-layer addresses, not a network
/// requirement here). Rendered as six colon-separated two-digit lowercase
/// hex octets, e.g. `a4:3f:00:5b:9c:1e`.
///
/// Generated once at process start and shared by every [`crate::Sample`]
/// the process produces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeviceIdentity {
    octets: [u8; 6],
}

impl DeviceIdentity {
    /// Generate a fresh random identity.
    pub fn generate() -> Self {
        Self::from_octets(rand::rng().random())
    }

    /// Build an identity from raw octets, applying the unicast and
    /// locally-administered masking to the first octet.
    pub const fn from_octets(mut octets: [u8; 6]) -> Self {
        octets[0] &= 0xfc;
        Self { octets }
    }

    /// The raw octets, masking applied.
    pub const fn octets(&self) -> [u8; 6] {
        self.octets
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.octets;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for DeviceIdentity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
