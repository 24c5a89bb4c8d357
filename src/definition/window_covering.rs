// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Window-covering feature for device definitions.

use super::{REPORT_CHANGE_POSITION, REPORT_MAX_INTERVAL, REPORT_MIN_INTERVAL, ReportingConfig};
use crate::cluster;
use crate::config::DeviceConfig;

/// A movement axis a covering exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Control {
    /// Vertical movement (roller shades, curtains).
    Lift,
    /// Slat rotation (venetian blinds, tilt shades).
    Tilt,
}

/// The axis the open/close state derives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateSource {
    /// State follows the lift position.
    Lift,
    /// State follows the tilt position.
    Tilt,
}

/// Window-covering feature of a device definition.
///
/// Declares the controls the model exposes, which axis its open/close state
/// derives from, and whether it reports positions pre-inverted. The
/// constructors cover the common shapes; tilt-only coverings necessarily
/// take their state from tilt.
///
/// # Examples
///
/// ```
/// use zbcover_lib::{StateSource, WindowCovering};
///
/// let covering = WindowCovering::tilt().with_cover_inverted(true);
/// assert!(covering.supports_tilt());
/// assert!(!covering.supports_lift());
/// assert_eq!(covering.state_source(), StateSource::Tilt);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WindowCovering {
    controls: Vec<Control>,
    state_source: StateSource,
    #[serde(default)]
    cover_inverted: bool,
}

impl WindowCovering {
    /// Creates a lift-only covering, state from lift.
    #[must_use]
    pub fn lift() -> Self {
        Self {
            controls: vec![Control::Lift],
            state_source: StateSource::Lift,
            cover_inverted: false,
        }
    }

    /// Creates a tilt-only covering, state from tilt.
    #[must_use]
    pub fn tilt() -> Self {
        Self {
            controls: vec![Control::Tilt],
            state_source: StateSource::Tilt,
            cover_inverted: false,
        }
    }

    /// Creates a covering with both axes, state from lift.
    #[must_use]
    pub fn lift_and_tilt() -> Self {
        Self {
            controls: vec![Control::Lift, Control::Tilt],
            state_source: StateSource::Lift,
            cover_inverted: false,
        }
    }

    /// Sets the axis the open/close state derives from.
    #[must_use]
    pub fn with_state_source(mut self, source: StateSource) -> Self {
        self.state_source = source;
        self
    }

    /// Sets whether the model reports positions pre-inverted.
    #[must_use]
    pub fn with_cover_inverted(mut self, inverted: bool) -> Self {
        self.cover_inverted = inverted;
        self
    }

    /// Returns `true` if the model exposes lift control.
    #[must_use]
    pub fn supports_lift(&self) -> bool {
        self.controls.contains(&Control::Lift)
    }

    /// Returns `true` if the model exposes tilt control.
    #[must_use]
    pub fn supports_tilt(&self) -> bool {
        self.controls.contains(&Control::Tilt)
    }

    /// Returns the axis the open/close state derives from.
    #[must_use]
    pub const fn state_source(&self) -> StateSource {
        self.state_source
    }

    /// Returns `true` if the model reports positions pre-inverted.
    #[must_use]
    pub const fn cover_inverted(&self) -> bool {
        self.cover_inverted
    }

    /// Returns the decoding flags for the cover converter.
    #[must_use]
    pub const fn device_config(&self) -> DeviceConfig {
        DeviceConfig {
            cover_inverted: self.cover_inverted,
            cover_state_from_tilt: matches!(self.state_source, StateSource::Tilt),
        }
    }

    /// Returns the attribute reporting this feature asks the host to
    /// configure on the device, one entry per declared control.
    #[must_use]
    pub fn reporting(&self) -> Vec<ReportingConfig> {
        self.controls
            .iter()
            .map(|control| ReportingConfig {
                cluster: cluster::id::WINDOW_COVERING,
                attribute: match control {
                    Control::Lift => cluster::window_covering::CURRENT_POSITION_LIFT_PERCENTAGE,
                    Control::Tilt => cluster::window_covering::CURRENT_POSITION_TILT_PERCENTAGE,
                },
                min_interval: REPORT_MIN_INTERVAL,
                max_interval: REPORT_MAX_INTERVAL,
                change: REPORT_CHANGE_POSITION,
            })
            .collect()
    }
}
