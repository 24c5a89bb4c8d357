// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ZCL cluster, attribute, and command identifiers used by the converters.

/// Cluster identifiers.
pub mod id {
    /// Power Configuration cluster.
    pub const POWER_CONFIG: u16 = 0x0001;
    /// Window Covering cluster.
    pub const WINDOW_COVERING: u16 = 0x0102;
}

/// Cluster names as Zigbee host stacks report them.
pub mod name {
    /// Power Configuration cluster.
    pub const POWER_CONFIG: &str = "genPowerCfg";
    /// Window Covering cluster.
    pub const WINDOW_COVERING: &str = "closuresWindowCovering";
}

/// Window Covering cluster attributes and commands.
pub mod window_covering {
    /// `currentPositionLiftPercentage` (uint8, 0-100, 255 = unknown).
    pub const CURRENT_POSITION_LIFT_PERCENTAGE: u16 = 0x0008;
    /// `currentPositionTiltPercentage` (uint8, 0-100, 255 = unknown).
    pub const CURRENT_POSITION_TILT_PERCENTAGE: u16 = 0x0009;
    /// `windowCoveringMode` (bitmap8).
    pub const WINDOW_COVERING_MODE: u16 = 0x0017;

    /// Cluster command identifiers.
    pub mod cmd {
        /// Up / Open.
        pub const UP_OPEN: u8 = 0x00;
        /// Down / Close.
        pub const DOWN_CLOSE: u8 = 0x01;
        /// Stop.
        pub const STOP: u8 = 0x02;
        /// Go To Lift Percentage (one-byte payload).
        pub const GO_TO_LIFT_PERCENTAGE: u8 = 0x05;
        /// Go To Tilt Percentage (one-byte payload).
        pub const GO_TO_TILT_PERCENTAGE: u8 = 0x08;
    }
}

/// Power Configuration cluster attributes.
pub mod power_config {
    /// `batteryVoltage` (uint8, units of 100 mV, 255 = invalid).
    pub const BATTERY_VOLTAGE: u16 = 0x0020;
    /// `batteryPercentageRemaining` (uint8, units of 0.5 %, 255 = invalid).
    pub const BATTERY_PERCENTAGE_REMAINING: u16 = 0x0021;
}
