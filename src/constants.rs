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

//! Platform-wide constants.

use crate::percentage::SpeedRange;

/// Hub domain under which fan entities are registered.
pub const FAN_DOMAIN: &str = "fan";

/// Dispatcher signal prefix for discovery. The fan platform listens on
/// `"{SIGNAL_ADD_ENTITIES}_{FAN_DOMAIN}"`.
pub const SIGNAL_ADD_ENTITIES: &str = "insteon_add_entities";

/// Device sub-group carrying the fan speed channel.
pub const FAN_GROUP: u8 = 2;

/// Raw on-level range. 0 is the reserved off value and is excluded from the
/// active range.
pub const SPEED_RANGE: SpeedRange = SpeedRange { low: 0x00, high: 0xFF };

/// Percentage used when `turn_on` is called without one; maps to the
/// device's medium/default-on level.
pub const DEFAULT_ON_PERCENTAGE: u8 = 67;

/// Number of discrete non-zero speed steps the device exposes
/// (low/medium/high).
pub const SPEED_COUNT: u8 = 3;
