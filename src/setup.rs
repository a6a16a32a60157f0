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

//! Config-entry setup for the fan platform.
//!
//! `setup_entry` wires the platform into the hub: it subscribes to the
//! add-entities dispatcher signal, then runs one immediate add pass for
//! devices the library already knows. Both paths share one add routine and
//! one per-session dedup set, so a device-group is registered at most once
//! no matter how often discovery fires.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ConfigEntry;
use crate::constants::{FAN_DOMAIN, FAN_GROUP, SIGNAL_ADD_ENTITIES};
use crate::device::{Address, DeviceRegistry};
use crate::dispatch::Dispatcher;
use crate::entity::{AddEntities, FanEntity};
use crate::error::Result;
use crate::fan::InsteonFanEntity;

/// Payload carried on the add-entities signal: devices newly known to the
/// modem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryInfo {
    pub addresses: Vec<Address>,
}

/// Dispatcher signal name the fan platform listens on.
pub fn add_entities_signal() -> String {
    format!("{}_{}", SIGNAL_ADD_ENTITIES, FAN_DOMAIN)
}

/// Set up the Insteon fan platform for one config entry.
///
/// Entities live until the hub unloads the entry; the spawned listener ends
/// when the dispatcher drops the subscription's sender side.
pub async fn setup_entry(
    devices: &DeviceRegistry,
    dispatcher: &Dispatcher<DiscoveryInfo>,
    entry: &ConfigEntry,
    add_entities: AddEntities,
) -> Result<()> {
    entry.validate()?;

    let signal = add_entities_signal();
    let mut rx = dispatcher.connect(&signal);

    // (address, group) pairs already registered this session
    let seen: Arc<Mutex<HashSet<(Address, u8)>>> = Arc::default();
    let names = Arc::new(entry.device_names.clone());

    {
        let devices = devices.clone();
        let add_entities = add_entities.clone();
        let seen = seen.clone();
        let names = names.clone();
        tokio::spawn(async move {
            while let Some(info) = rx.recv().await {
                add_fan_entities(&devices, &info.addresses, &names, &add_entities, &seen);
            }
            debug!("fan add-entities subscription closed");
        });
    }

    // Immediate pass for devices the library loaded before setup ran
    let known = devices.addresses();
    add_fan_entities(devices, &known, &names, &add_entities, &seen);

    info!(entry = %entry.entry_id, devices = known.len(), "Insteon fan platform ready");
    Ok(())
}

fn add_fan_entities(
    devices: &DeviceRegistry,
    addresses: &[Address],
    names: &HashMap<Address, String>,
    add_entities: &AddEntities,
    seen: &Mutex<HashSet<(Address, u8)>>,
) {
    let mut batch: Vec<Box<dyn FanEntity>> = Vec::new();
    for &address in addresses {
        let Some(device) = devices.get(address) else {
            warn!(%address, "discovery named a device the library does not know");
            continue;
        };
        if !seen.lock().insert((address, FAN_GROUP)) {
            continue;
        }
        match InsteonFanEntity::new(device, names.get(&address).cloned()) {
            Some(entity) => batch.push(Box::new(entity)),
            None => debug!(%address, "device has no fan speed group, skipping"),
        }
    }
    if !batch.is_empty() {
        (add_entities.as_ref())(batch);
    }
}
