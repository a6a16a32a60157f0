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

//! Platform error type.
//!
//! Device-communication failures are the device library's errors; they pass
//! through untranslated to the hub's service-call error surface.

use crate::device::DeviceError;

/// Result type alias using PlatformError
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Errors surfaced by the fan platform.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    /// A command issued through the device library failed. Not retried here.
    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("Invalid Insteon address: {0}")]
    InvalidAddress(String),

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl PlatformError {
    /// Create an invalid config error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
