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

//! Shared test doubles for the device library boundary.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::constants::FAN_GROUP;
use crate::device::{Address, DeviceError, DeviceGroup, FanCommands};

/// A command the fake device recorded instead of touching a modem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuedCommand {
    On { group: u8, on_level: u8 },
    FanOff,
}

/// In-memory stand-in for a fan-capable Insteon device.
pub struct FakeFanDevice {
    address: Address,
    group: Option<DeviceGroup>,
    reachable: Mutex<bool>,
    issued: Mutex<Vec<IssuedCommand>>,
    fail_with: Mutex<Option<DeviceError>>,
}

impl FakeFanDevice {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            group: Some(DeviceGroup::new()),
            reachable: Mutex::new(true),
            issued: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    /// A device that exposes no fan speed channel.
    pub fn without_group(address: Address) -> Self {
        Self {
            group: None,
            ..Self::new(address)
        }
    }

    /// Simulate the library settling a status update for the fan group.
    pub fn set_group_value(&self, value: Option<u8>) {
        if let Some(group) = &self.group {
            group.set_value(value);
        }
    }

    pub fn set_reachable(&self, reachable: bool) {
        *self.reachable.lock() = reachable;
    }

    /// Make every subsequent command fail with the given error.
    pub fn fail_with(&self, error: DeviceError) {
        *self.fail_with.lock() = Some(error);
    }

    /// Commands recorded so far, in issue order.
    pub fn issued(&self) -> Vec<IssuedCommand> {
        self.issued.lock().clone()
    }

    fn record(&self, command: IssuedCommand) -> Result<(), DeviceError> {
        if let Some(err) = self.fail_with.lock().clone() {
            return Err(err);
        }
        self.issued.lock().push(command);
        Ok(())
    }
}

#[async_trait]
impl FanCommands for FakeFanDevice {
    fn address(&self) -> Address {
        self.address
    }

    fn group(&self, group: u8) -> Option<DeviceGroup> {
        if group == FAN_GROUP {
            self.group.clone()
        } else {
            None
        }
    }

    fn is_reachable(&self) -> bool {
        *self.reachable.lock()
    }

    async fn on(&self, group: u8, on_level: u8) -> Result<(), DeviceError> {
        self.record(IssuedCommand::On { group, on_level })
    }

    async fn fan_off(&self) -> Result<(), DeviceError> {
        self.record(IssuedCommand::FanOff)
    }
}
