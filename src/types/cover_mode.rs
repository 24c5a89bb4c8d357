// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating-mode flags reported by the Window Covering cluster.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

bitflags::bitflags! {
    /// Decoded `windowCoveringMode` attribute (ZCL bitmap8).
    ///
    /// Only the low four bits are defined; the rest of the byte is reserved
    /// and dropped on decode. Serialized as an object with one boolean per
    /// flag, the shape hosts publish:
    ///
    /// ```
    /// use zbcover_lib::CoverMode;
    ///
    /// let mode = CoverMode::from_raw(0b0000_1010);
    /// assert!(mode.calibration());
    /// assert!(mode.led());
    /// assert!(!mode.reversed());
    ///
    /// let json = serde_json::to_value(mode).unwrap();
    /// assert_eq!(json["calibration"], true);
    /// assert_eq!(json["maintenance"], false);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CoverMode: u8 {
        /// Motor direction is reversed.
        const REVERSED = 1 << 0;
        /// The device is running in calibration mode.
        const CALIBRATION = 1 << 1;
        /// The device is in maintenance mode.
        const MAINTENANCE = 1 << 2;
        /// Status feedback LEDs are enabled.
        const LED = 1 << 3;
    }
}

impl CoverMode {
    /// Decodes the raw attribute byte, dropping reserved bits.
    #[must_use]
    pub const fn from_raw(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }

    /// Returns `true` if the motor direction is reversed.
    #[must_use]
    pub const fn reversed(&self) -> bool {
        self.contains(Self::REVERSED)
    }

    /// Returns `true` if the device is in calibration mode.
    #[must_use]
    pub const fn calibration(&self) -> bool {
        self.contains(Self::CALIBRATION)
    }

    /// Returns `true` if the device is in maintenance mode.
    #[must_use]
    pub const fn maintenance(&self) -> bool {
        self.contains(Self::MAINTENANCE)
    }

    /// Returns `true` if status feedback LEDs are enabled.
    #[must_use]
    pub const fn led(&self) -> bool {
        self.contains(Self::LED)
    }
}

impl Serialize for CoverMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CoverMode", 4)?;
        state.serialize_field("reversed", &self.reversed())?;
        state.serialize_field("calibration", &self.calibration())?;
        state.serialize_field("maintenance", &self.maintenance())?;
        state.serialize_field("led", &self.led())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for CoverMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Default, serde::Deserialize)]
        #[serde(default)]
        struct Fields {
            reversed: bool,
            calibration: bool,
            maintenance: bool,
            led: bool,
        }

        let fields = Fields::deserialize(deserializer)?;
        let mut mode = Self::empty();
        mode.set(Self::REVERSED, fields.reversed);
        mode.set(Self::CALIBRATION, fields.calibration);
        mode.set(Self::MAINTENANCE, fields.maintenance);
        mode.set(Self::LED, fields.led);
        Ok(mode)
    }
}
