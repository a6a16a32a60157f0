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

//! insteon-fan - Insteon fan platform adapter for a home-automation hub
//!
//! This library presents Insteon fan devices as hub fan entities. It maps the
//! hub's percentage speed abstraction (0-100) onto the device's raw on-level
//! byte (0x00-0xFF) and wires entity discovery into the hub's dispatcher
//! signal during config-entry setup. Modem I/O, retries, and device discovery
//! live in the external device library behind the [`FanCommands`] boundary.

pub mod config;
pub mod constants;
pub mod device;
pub mod dispatch;
pub mod entity;
pub mod error;
pub mod fan;
pub mod percentage;
pub mod setup;

#[cfg(test)]
pub mod test_utils;

pub use config::{ConfigEntry, ModemConfig};
pub use constants::{
    DEFAULT_ON_PERCENTAGE, FAN_DOMAIN, FAN_GROUP, SIGNAL_ADD_ENTITIES, SPEED_COUNT, SPEED_RANGE,
};
pub use device::{Address, DeviceError, DeviceGroup, DeviceRegistry, FanCommands};
pub use dispatch::Dispatcher;
pub use entity::{AddEntities, FanEntity, FanEntityFeatures};
pub use error::{PlatformError, Result};
pub use fan::InsteonFanEntity;
pub use percentage::{percentage_to_ranged_value, ranged_value_to_percentage, SpeedRange};
pub use setup::{setup_entry, DiscoveryInfo};
