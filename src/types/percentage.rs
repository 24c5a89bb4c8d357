// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Percentage type for cover positions and tilt angles.
//!
//! This module provides a type-safe representation of position values,
//! ensuring they are always within the valid range of 0-100%.

use std::fmt;

use crate::error::ValueError;

/// A position or tilt value as a percentage (0-100).
///
/// Published values follow the convention that 100 is fully open and 0 is
/// fully closed. Devices report the opposite, so decoded values usually pass
/// through [`Percentage::inverted`] on the way in and out.
///
/// # Examples
///
/// ```
/// use zbcover_lib::Percentage;
///
/// let position = Percentage::new(75).unwrap();
/// assert_eq!(position.value(), 75);
/// assert_eq!(position.to_string(), "75%");
///
/// // Invalid values return error
/// assert!(Percentage::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Minimum percentage (0%).
    pub const MIN: Percentage = Percentage(0);

    /// Maximum percentage (100%).
    pub const MAX: Percentage = Percentage(100);

    /// Creates a new percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::OutOfRange`] if `value` exceeds 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use zbcover_lib::Percentage;
    ///
    /// let tilt = Percentage::new(25).unwrap();
    /// assert_eq!(tilt.value(), 25);
    /// ```
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a percentage, clamping the value to the valid range.
    ///
    /// # Examples
    ///
    /// ```
    /// use zbcover_lib::Percentage;
    ///
    /// assert_eq!(Percentage::clamped(150).value(), 100);
    /// assert_eq!(Percentage::clamped(42).value(), 42);
    /// ```
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the raw percentage value (0-100).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the complementary percentage (`100 - value`).
    ///
    /// This converts between the device convention (0 = open) and the
    /// published convention (100 = open). Applying it twice yields the
    /// original value.
    ///
    /// # Examples
    ///
    /// ```
    /// use zbcover_lib::Percentage;
    ///
    /// let reported = Percentage::new(30).unwrap();
    /// assert_eq!(reported.inverted().value(), 70);
    /// assert_eq!(reported.inverted().inverted(), reported);
    /// ```
    #[must_use]
    pub const fn inverted(&self) -> Self {
        Self(Self::MAX.0 - self.0)
    }

    /// Returns the percentage as a fraction (0.0 to 1.0).
    #[must_use]
    pub fn as_fraction(&self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(percentage: Percentage) -> Self {
        percentage.0
    }
}
