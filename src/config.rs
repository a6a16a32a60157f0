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

//! Config entry types.
//!
//! The hub persists one `ConfigEntry` per integration instance and hands it
//! to `setup_entry` as JSON-backed data. Storage itself is the hub's job;
//! this module only defines the shape and validates it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::device::Address;
use crate::error::{PlatformError, Result};

/// Modem connection described by a config entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ModemConfig {
    /// PowerLinc modem on a serial device.
    Serial { device: String },
    /// Network-attached hub modem.
    Network { host: String, port: u16 },
}

/// The hub's persisted configuration unit for one Insteon instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub entry_id: String,
    pub title: String,
    pub modem: ModemConfig,
    /// Optional display-name overrides keyed by device address.
    #[serde(default)]
    pub device_names: HashMap<Address, String>,
}

impl ConfigEntry {
    pub fn from_json(json: &str) -> Result<Self> {
        let entry: Self = serde_json::from_str(json)?;
        entry.validate()?;
        Ok(entry)
    }

    pub fn validate(&self) -> Result<()> {
        if self.entry_id.is_empty() {
            return Err(PlatformError::invalid_config("entry_id", "must not be empty"));
        }
        match &self.modem {
            ModemConfig::Serial { device } if device.is_empty() => {
                Err(PlatformError::invalid_config("modem.device", "must not be empty"))
            }
            ModemConfig::Network { host, .. } if host.is_empty() => {
                Err(PlatformError::invalid_config("modem.host", "must not be empty"))
            }
            ModemConfig::Network { port: 0, .. } => {
                Err(PlatformError::invalid_config("modem.port", "must not be 0"))
            }
            _ => Ok(()),
        }
    }

    /// Configured display name for a device, if any.
    pub fn device_name(&self, address: Address) -> Option<String> {
        self.device_names.get(&address).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_json() {
        let json = r#"{
            "entry_id": "abc123",
            "title": "Insteon",
            "modem": { "type": "serial", "device": "/dev/ttyUSB0" },
            "device_names": { "1A.2B.3C": "Attic Fan" }
        }"#;
        let entry = ConfigEntry::from_json(json).unwrap();
        assert_eq!(entry.entry_id, "abc123");
        assert_eq!(
            entry.modem,
            ModemConfig::Serial {
                device: "/dev/ttyUSB0".to_string()
            }
        );
        let addr: Address = "1A.2B.3C".parse().unwrap();
        assert_eq!(entry.device_name(addr).as_deref(), Some("Attic Fan"));
    }

    #[test]
    fn test_device_names_default_empty() {
        let json = r#"{
            "entry_id": "abc123",
            "title": "Insteon",
            "modem": { "type": "network", "host": "10.0.0.5", "port": 25105 }
        }"#;
        let entry = ConfigEntry::from_json(json).unwrap();
        assert!(entry.device_names.is_empty());
    }

    #[test]
    fn test_validation_rejects_bad_entries() {
        let empty_id = r#"{
            "entry_id": "",
            "title": "Insteon",
            "modem": { "type": "serial", "device": "/dev/ttyUSB0" }
        }"#;
        assert!(ConfigEntry::from_json(empty_id).is_err());

        let zero_port = r#"{
            "entry_id": "abc",
            "title": "Insteon",
            "modem": { "type": "network", "host": "10.0.0.5", "port": 0 }
        }"#;
        assert!(ConfigEntry::from_json(zero_port).is_err());
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry = ConfigEntry {
            entry_id: "e1".to_string(),
            title: "Insteon".to_string(),
            modem: ModemConfig::Network {
                host: "10.0.0.5".to_string(),
                port: 25105,
            },
            device_names: HashMap::new(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back = ConfigEntry::from_json(&json).unwrap();
        assert_eq!(back.entry_id, entry.entry_id);
        assert_eq!(back.modem, entry.modem);
    }
}
