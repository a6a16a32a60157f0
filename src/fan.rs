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

//! Insteon fan entity adapter.
//!
//! Binds one device-group (the fan speed channel, group 2) to one hub fan
//! entity. Reads come from the group's value cache, kept current by the
//! device library; writes issue a single command and return. There is no
//! state machine here and no retry logic.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::constants::{DEFAULT_ON_PERCENTAGE, FAN_GROUP, SPEED_COUNT, SPEED_RANGE};
use crate::device::{DeviceGroup, FanCommands};
use crate::entity::{FanEntity, FanEntityFeatures};
use crate::error::Result;
use crate::percentage::{percentage_to_ranged_value, ranged_value_to_percentage};

/// An Insteon fan entity.
pub struct InsteonFanEntity {
    device: Arc<dyn FanCommands>,
    group: DeviceGroup,
    name: String,
}

impl InsteonFanEntity {
    /// Bind the device's fan speed channel. Returns `None` when the device
    /// does not expose group 2.
    pub fn new(device: Arc<dyn FanCommands>, name: Option<String>) -> Option<Self> {
        let group = device.group(FAN_GROUP)?;
        let name = name.unwrap_or_else(|| device.address().to_string());
        Some(Self { device, group, name })
    }
}

#[async_trait]
impl FanEntity for InsteonFanEntity {
    fn unique_id(&self) -> String {
        format!("{}_{}", self.device.address().id(), FAN_GROUP)
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn available(&self) -> bool {
        self.device.is_reachable()
    }

    fn percentage(&self) -> Option<u8> {
        let raw = self.group.value()?;
        Some(ranged_value_to_percentage(SPEED_RANGE, raw))
    }

    fn supported_features(&self) -> FanEntityFeatures {
        FanEntityFeatures::SET_SPEED
    }

    fn speed_count(&self) -> u8 {
        SPEED_COUNT
    }

    async fn turn_on(&self, percentage: Option<u8>) -> Result<()> {
        self.set_percentage(percentage.unwrap_or(DEFAULT_ON_PERCENTAGE))
            .await
    }

    async fn turn_off(&self) -> Result<()> {
        debug!(device = %self.device.address(), "issuing fan off");
        self.device.fan_off().await?;
        Ok(())
    }

    async fn set_percentage(&self, percentage: u8) -> Result<()> {
        // 0 means the explicit off command; the device's off behavior is not
        // the same as "on at minimum level".
        if percentage == 0 {
            return self.turn_off().await;
        }
        let on_level = percentage_to_ranged_value(SPEED_RANGE, percentage);
        debug!(
            device = %self.device.address(),
            group = FAN_GROUP,
            percentage,
            on_level,
            "issuing fan on"
        );
        self.device.on(FAN_GROUP, on_level).await?;
        Ok(())
    }
}
