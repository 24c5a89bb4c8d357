// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State update records decoded from attribute reports.

use crate::types::{CoverMode, CoverState, Percentage};

/// A normalized state update decoded from a single attribute report.
///
/// Every field is optional: a field is set only when the source attribute
/// was present in the report and carried a usable value. Hosts merge
/// updates into the state they publish, so an absent field means "leave the
/// previous value alone", never "reset".
///
/// Serialization skips absent fields, which makes an update directly
/// publishable as an MQTT state payload:
///
/// ```
/// use zbcover_lib::{Percentage, StateUpdate};
///
/// let mut update = StateUpdate::new();
/// update.tilt = Some(Percentage::new(25).unwrap());
///
/// let json = serde_json::to_string(&update).unwrap();
/// assert_eq!(json, r#"{"tilt":25}"#);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StateUpdate {
    /// Cover lift position (100 = open).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub position: Option<Percentage>,

    /// Cover tilt position (100 = open).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tilt: Option<Percentage>,

    /// Open/close state.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state: Option<CoverState>,

    /// Operating-mode flags.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cover_mode: Option<CoverMode>,

    /// Remaining battery in percent. Fractional because ZCL reports in
    /// half-percent units.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub battery: Option<f32>,

    /// Battery voltage in millivolts.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub voltage: Option<u16>,
}

impl StateUpdate {
    /// Creates an update with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no field is set.
    ///
    /// Hosts typically skip publishing empty updates, which arise from
    /// reports that carried only unusable values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.tilt.is_none()
            && self.state.is_none()
            && self.cover_mode.is_none()
            && self.battery.is_none()
            && self.voltage.is_none()
    }

    /// Combines two updates; fields set in `other` take precedence.
    ///
    /// Useful when one frame produces reports on several clusters and the
    /// host wants a single update out.
    #[must_use]
    pub fn merged(self, other: Self) -> Self {
        Self {
            position: other.position.or(self.position),
            tilt: other.tilt.or(self.tilt),
            state: other.state.or(self.state),
            cover_mode: other.cover_mode.or(self.cover_mode),
            battery: other.battery.or(self.battery),
            voltage: other.voltage.or(self.voltage),
        }
    }
}
