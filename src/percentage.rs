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

//! Percentage <-> raw range conversions.
//!
//! Hub-side numeric helpers shared by fan-like platforms. Conversions are
//! linear; percentage -> raw rounds up so every non-zero percentage lands
//! strictly above the reserved off value.

/// Inclusive raw value range for a device quantity. `low` is the reserved
/// off value and is excluded from the active range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedRange {
    pub low: u8,
    pub high: u8,
}

impl SpeedRange {
    /// Width of the range, off value included.
    pub const fn span(&self) -> u16 {
        (self.high - self.low) as u16
    }
}

/// Map a raw value onto 0-100 with nearest-integer rounding.
///
/// The range top maps exactly to 100. Values outside the range are clamped
/// before conversion.
pub fn ranged_value_to_percentage(range: SpeedRange, value: u8) -> u8 {
    let value = value.clamp(range.low, range.high);
    let offset = f64::from(value - range.low);
    (offset * 100.0 / f64::from(range.span())).round() as u8
}

/// Map a percentage in 1-100 onto the active raw sub-range with ceiling
/// rounding.
///
/// The result is clamped to `[range.low + 1, range.high]`: 0 stays reserved
/// for off, so even 1% produces a raw level the device treats as on.
pub fn percentage_to_ranged_value(range: SpeedRange, percentage: u8) -> u8 {
    let pct = f64::from(percentage.min(100));
    let raw = (pct / 100.0 * f64::from(range.span())).ceil() as u16 + u16::from(range.low);
    raw.clamp(u16::from(range.low) + 1, u16::from(range.high)) as u8
}
