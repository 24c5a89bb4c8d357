// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding configuration: per-model flags and per-device user options.
//!
//! [`DeviceConfig`] and [`BatteryConfig`] capture what a *model* does (they
//! are derived from a definition's features), while [`UserOptions`] carries
//! what the *user* asked for on one particular device. The decoders take
//! both, so the same definition can serve devices with different options.

/// Static decoding flags for a window-covering model.
///
/// # Examples
///
/// ```
/// use zbcover_lib::{DeviceConfig, UserOptions};
///
/// let config = DeviceConfig::new().with_cover_inverted(true);
/// assert!(config.effective_invert(&UserOptions::default()));
/// assert!(!config.effective_invert(&UserOptions::inverted()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// The model reports positions already matching the published
    /// convention (100 = open) instead of the usual device convention.
    pub cover_inverted: bool,
    /// The open/close state derives from tilt instead of lift.
    pub cover_state_from_tilt: bool,
}

impl DeviceConfig {
    /// Creates a configuration with both flags off, the common case.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cover_inverted: false,
            cover_state_from_tilt: false,
        }
    }

    /// Sets whether the model reports positions pre-inverted.
    #[must_use]
    pub const fn with_cover_inverted(mut self, inverted: bool) -> Self {
        self.cover_inverted = inverted;
        self
    }

    /// Sets whether the open/close state derives from tilt.
    #[must_use]
    pub const fn with_state_from_tilt(mut self, from_tilt: bool) -> Self {
        self.cover_state_from_tilt = from_tilt;
        self
    }

    /// The inversion applied to numeric positions, in both directions.
    ///
    /// The model flag and the user option cancel each other out: a user can
    /// un-invert a pre-inverted model, or invert a regular one. The
    /// open/close threshold does *not* use this; it keys on
    /// `cover_inverted` alone.
    #[must_use]
    pub const fn effective_invert(&self, options: &UserOptions) -> bool {
        self.cover_inverted ^ options.invert_cover
    }
}

/// Decoding flags for a model's battery reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    /// The model reports whole percent instead of ZCL half-percent units.
    pub percentage_raw: bool,
}

impl BatteryConfig {
    /// Creates a configuration for standard half-percent reporting.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            percentage_raw: false,
        }
    }

    /// Sets whether the model reports whole percent.
    #[must_use]
    pub const fn with_percentage_raw(mut self, raw: bool) -> Self {
        self.percentage_raw = raw;
        self
    }
}

/// Per-device options supplied by the user through the host.
///
/// Hosts keep these in a free-form options map; unknown keys are ignored on
/// deserialization so the whole map can be passed as-is.
///
/// # Examples
///
/// ```
/// use zbcover_lib::UserOptions;
///
/// let json = r#"{"invert_cover":true,"transition":2}"#;
/// let options: UserOptions = serde_json::from_str(json).unwrap();
/// assert!(options.invert_cover);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UserOptions {
    /// Invert reported and commanded positions on top of the model default.
    pub invert_cover: bool,
}

impl UserOptions {
    /// Creates options with everything off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            invert_cover: false,
        }
    }

    /// Creates options with position inversion enabled.
    #[must_use]
    pub const fn inverted() -> Self {
        Self { invert_cover: true }
    }
}
