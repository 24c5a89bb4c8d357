// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Battery feature for device definitions.

use super::{REPORT_CHANGE_BATTERY, REPORT_HOUR, REPORT_MAX_INTERVAL, ReportingConfig};
use crate::cluster;
use crate::config::BatteryConfig;

/// Battery reporting feature of a device definition.
///
/// Selects the Power Configuration converter and describes how the model
/// reports: percentage is always decoded, voltage only when enabled.
///
/// # Examples
///
/// ```
/// use zbcover_lib::Battery;
///
/// let battery = Battery::new().with_voltage();
/// assert!(battery.voltage());
/// assert!(!battery.percentage_raw());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Battery {
    voltage: bool,
    percentage_raw: bool,
}

impl Battery {
    /// Creates a battery feature with standard half-percent reporting and
    /// no voltage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            voltage: false,
            percentage_raw: false,
        }
    }

    /// Enables voltage decoding and reporting.
    #[must_use]
    pub const fn with_voltage(mut self) -> Self {
        self.voltage = true;
        self
    }

    /// Marks the model as reporting whole percent instead of ZCL
    /// half-percent units.
    #[must_use]
    pub const fn with_percentage_raw(mut self) -> Self {
        self.percentage_raw = true;
        self
    }

    /// Returns `true` if voltage decoding is enabled.
    #[must_use]
    pub const fn voltage(&self) -> bool {
        self.voltage
    }

    /// Returns `true` if the model reports whole percent.
    #[must_use]
    pub const fn percentage_raw(&self) -> bool {
        self.percentage_raw
    }

    /// Returns the decoding flags for the battery converter.
    #[must_use]
    pub const fn config(&self) -> BatteryConfig {
        BatteryConfig {
            percentage_raw: self.percentage_raw,
        }
    }

    /// Returns the attribute reporting this feature asks the host to
    /// configure on the device.
    #[must_use]
    pub fn reporting(&self) -> Vec<ReportingConfig> {
        let mut configs = vec![ReportingConfig {
            cluster: cluster::id::POWER_CONFIG,
            attribute: cluster::power_config::BATTERY_PERCENTAGE_REMAINING,
            min_interval: REPORT_HOUR,
            max_interval: REPORT_MAX_INTERVAL,
            change: REPORT_CHANGE_BATTERY,
        }];
        if self.voltage {
            configs.push(ReportingConfig {
                cluster: cluster::id::POWER_CONFIG,
                attribute: cluster::power_config::BATTERY_VOLTAGE,
                min_interval: REPORT_HOUR,
                max_interval: REPORT_MAX_INTERVAL,
                change: REPORT_CHANGE_BATTERY,
            });
        }
        configs
    }
}
