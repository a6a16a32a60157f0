/*
 * This file is part of insteon-fan.
 *
 * Copyright (C) 2026 insteon-fan contributors
 *
 * insteon-fan is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * insteon-fan is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with insteon-fan. If not, see <https://www.gnu.org/licenses/>.
 */

//! Device library boundary.
//!
//! The external Insteon library owns the modem, the link-layer protocol, and
//! every retry/timeout decision. This module models the narrow surface the
//! fan platform consumes: the device address, the per-group value cache the
//! library keeps current, and the two async commands fan devices answer to.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::error::PlatformError;

/// Errors raised by the device library while settling a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("Device {0} did not acknowledge the command")]
    NoAck(Address),

    #[error("Command to device {0} timed out")]
    Timeout(Address),

    #[error("Modem is offline")]
    ModemOffline,
}

/// Three-byte Insteon hardware address.
///
/// Displays as `AA.BB.CC` (upper-case hex, dot separated), the form the
/// device library renders. Parses from that form or from undotted hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 3]);

impl Address {
    pub const fn new(high: u8, middle: u8, low: u8) -> Self {
        Self([high, middle, low])
    }

    pub const fn bytes(&self) -> [u8; 3] {
        self.0
    }

    /// Lower-case undotted hex form used in entity unique ids.
    pub fn id(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}.{:02X}.{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for Address {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex: String = s.chars().filter(|c| *c != '.').collect();
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PlatformError::InvalidAddress(s.to_string()));
        }
        let mut bytes = [0u8; 3];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| PlatformError::InvalidAddress(s.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

// Config entries store addresses as strings, so (de)serialize through the
// display form rather than as a byte array.
impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Cached state of one sub-addressable channel on a device.
///
/// The library side writes the last known raw level here when a status
/// update or acknowledgment settles; entities only read. `None` until the
/// library has observed any value.
#[derive(Debug, Clone, Default)]
pub struct DeviceGroup {
    value: Arc<RwLock<Option<u8>>>,
}

impl DeviceGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known raw level, or `None` if uninitialized.
    pub fn value(&self) -> Option<u8> {
        *self.value.read()
    }

    /// Library-side hook: record a settled raw level (or clear it).
    pub fn set_value(&self, value: Option<u8>) {
        *self.value.write() = value;
    }
}

/// Command surface the device library exposes for fan-capable devices.
///
/// Implementations issue one command over the modem per call and resolve
/// when the library settles the transaction. Callers hold no lock across
/// the await and never retry.
#[async_trait]
pub trait FanCommands: Send + Sync {
    fn address(&self) -> Address;

    /// Channel cache for one sub-group, if the device exposes it.
    fn group(&self, group: u8) -> Option<DeviceGroup>;

    /// Whether the library currently considers the device reachable.
    fn is_reachable(&self) -> bool {
        true
    }

    /// Turn the sub-group on at the given raw on-level.
    async fn on(&self, group: u8, on_level: u8) -> Result<(), DeviceError>;

    /// Issue the device's explicit fan-off command.
    async fn fan_off(&self) -> Result<(), DeviceError>;
}

/// Devices the external library has loaded for one modem connection.
///
/// The library populates this as its own discovery completes; the platform
/// only resolves addresses handed to it through discovery signals.
#[derive(Clone, Default)]
pub struct DeviceRegistry {
    inner: Arc<RwLock<HashMap<Address, Arc<dyn FanCommands>>>>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, device: Arc<dyn FanCommands>) {
        self.inner.write().insert(device.address(), device);
    }

    pub fn get(&self, address: Address) -> Option<Arc<dyn FanCommands>> {
        self.inner.read().get(&address).cloned()
    }

    /// Addresses currently known, in unspecified order.
    pub fn addresses(&self) -> Vec<Address> {
        self.inner.read().keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display_and_id() {
        let addr = Address::new(0x1A, 0x2B, 0x3C);
        assert_eq!(addr.to_string(), "1A.2B.3C");
        assert_eq!(addr.id(), "1a2b3c");
    }

    #[test]
    fn test_address_parses_dotted_and_plain() {
        let dotted: Address = "1a.2b.3c".parse().unwrap();
        let plain: Address = "1A2B3C".parse().unwrap();
        assert_eq!(dotted, Address::new(0x1A, 0x2B, 0x3C));
        assert_eq!(dotted, plain);
    }

    #[test]
    fn test_address_rejects_garbage() {
        assert!("1a.2b".parse::<Address>().is_err());
        assert!("zz.zz.zz".parse::<Address>().is_err());
        assert!("1a2b3c4d".parse::<Address>().is_err());
    }

    #[test]
    fn test_address_serde_round_trip() {
        let addr = Address::new(0xAA, 0x00, 0xFF);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"AA.00.FF\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_device_group_cache() {
        let group = DeviceGroup::new();
        assert_eq!(group.value(), None);
        group.set_value(Some(0x80));
        assert_eq!(group.value(), Some(0x80));
        // Clones share the cache, as entities and the library side must
        let clone = group.clone();
        clone.set_value(None);
        assert_eq!(group.value(), None);
    }
}
