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

//! Hub entity surface.
//!
//! The hub holds entities as trait objects and invokes this fixed interface
//! in response to user and automation actions. Command methods run on the
//! hub's cooperative executor, one invocation at a time per entity.

use std::ops::BitOr;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// Capability flags the hub reads from a fan entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FanEntityFeatures(u32);

impl FanEntityFeatures {
    pub const SET_SPEED: Self = Self(1);
    pub const OSCILLATE: Self = Self(1 << 1);
    pub const DIRECTION: Self = Self(1 << 2);
    pub const PRESET_MODE: Self = Self(1 << 3);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for FanEntityFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Fixed interface the hub invokes on fan entities through dynamic dispatch.
#[async_trait]
pub trait FanEntity: Send + Sync {
    /// Stable id the hub's registry keys this entity on.
    fn unique_id(&self) -> String;

    /// Display name.
    fn name(&self) -> String;

    /// Whether the backing device is currently reachable.
    fn available(&self) -> bool {
        true
    }

    /// Current speed percentage, or `None` if the device state is unknown.
    fn percentage(&self) -> Option<u8>;

    fn supported_features(&self) -> FanEntityFeatures;

    /// Number of discrete non-zero speed steps; the hub snaps arbitrary
    /// percentages to these.
    fn speed_count(&self) -> u8;

    async fn turn_on(&self, percentage: Option<u8>) -> Result<()>;

    async fn turn_off(&self) -> Result<()>;

    async fn set_percentage(&self, percentage: u8) -> Result<()>;
}

/// Entity-registration callback supplied by the hub during config-entry
/// setup. Each call hands a batch of newly discovered entities to the hub.
pub type AddEntities = Arc<dyn Fn(Vec<Box<dyn FanEntity>>) + Send + Sync>;
