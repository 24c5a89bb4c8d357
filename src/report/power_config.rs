// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser and decoder for Power Configuration cluster reports.

use serde::Deserialize;

use crate::config::BatteryConfig;
use crate::state::StateUpdate;

/// A parsed attribute report from the Power Configuration cluster
/// (`genPowerCfg`).
///
/// ZCL reports remaining battery in half-percent units and voltage in
/// 100 mV units; 255 marks either as invalid.
///
/// # Examples
///
/// ```
/// use zbcover_lib::{BatteryConfig, PowerConfigReport};
///
/// let json = r#"{"batteryPercentageRemaining":175,"batteryVoltage":30}"#;
/// let report: PowerConfigReport = serde_json::from_str(json).unwrap();
///
/// let update = report.decode(&BatteryConfig::new());
/// assert_eq!(update.battery, Some(87.5));
/// assert_eq!(update.voltage, Some(3000));
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PowerConfigReport {
    /// Remaining battery in half-percent units (0-200, 255 = invalid).
    #[serde(
        rename = "batteryPercentageRemaining",
        default,
        deserialize_with = "super::lenient_u16"
    )]
    battery_percentage_remaining: Option<u16>,

    /// Battery voltage in 100 mV units (255 = invalid).
    #[serde(
        rename = "batteryVoltage",
        default,
        deserialize_with = "super::lenient_u16"
    )]
    battery_voltage: Option<u16>,
}

impl PowerConfigReport {
    /// Returns the raw remaining-battery value, if reported.
    #[must_use]
    pub const fn percentage_remaining(&self) -> Option<u16> {
        self.battery_percentage_remaining
    }

    /// Returns the raw voltage value, if reported.
    #[must_use]
    pub const fn voltage(&self) -> Option<u16> {
        self.battery_voltage
    }

    /// Decodes this report into a normalized state update.
    ///
    /// The remaining battery is halved into whole percent unless the model
    /// reports raw percent, and the voltage is scaled to millivolts. Raw
    /// values of 255 or more are invalid and leave their field unset.
    #[must_use]
    pub fn decode(&self, config: &BatteryConfig) -> StateUpdate {
        let mut update = StateUpdate::new();

        if let Some(raw) = self.battery_percentage_remaining {
            if raw < 255 {
                let percent = f32::from(raw);
                update.battery = Some(if config.percentage_raw {
                    percent
                } else {
                    percent / 2.0
                });
            } else {
                tracing::trace!(raw, "ignoring invalid battery percentage");
            }
        }

        if let Some(raw) = self.battery_voltage {
            if raw < 255 {
                update.voltage = Some(raw * 100);
            } else {
                tracing::trace!(raw, "ignoring invalid battery voltage");
            }
        }

        update
    }
}
