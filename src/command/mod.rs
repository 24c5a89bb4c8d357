// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed cover commands and their encoding into cluster command frames.
//!
//! Commands take positions in the published convention (100 = open) and
//! encode them back into the device convention, mirroring the transform the
//! decoder applies to reports. Sending a position and reading it back
//! through the decoder yields the same number.

use std::fmt;
use std::str::FromStr;

use crate::cluster::{self, window_covering::cmd};
use crate::config::{DeviceConfig, UserOptions};
use crate::error::ValueError;
use crate::types::Percentage;

/// A command for a window-covering device.
///
/// # Examples
///
/// ```
/// use zbcover_lib::{CoverCommand, DeviceConfig, Percentage, UserOptions};
///
/// let command = CoverCommand::GoToPosition(Percentage::new(75).unwrap());
/// let frame = command.encode(&DeviceConfig::new(), &UserOptions::default());
///
/// assert_eq!(frame.cluster, 0x0102);
/// assert_eq!(frame.command, 0x05);
/// // 75% open is raw 25 in the device convention.
/// assert_eq!(frame.payload, vec![25]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverCommand {
    /// Move fully open.
    Open,
    /// Move fully closed.
    Close,
    /// Stop movement.
    Stop,
    /// Move the lift to a position.
    GoToPosition(Percentage),
    /// Move the tilt to a position.
    GoToTilt(Percentage),
}

impl CoverCommand {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Stop => "stop",
            Self::GoToPosition(_) => "go_to_position",
            Self::GoToTilt(_) => "go_to_tilt",
        }
    }

    /// Encodes the command into a Window Covering cluster frame.
    ///
    /// Target positions are converted with the same inversion rule the
    /// decoder uses, so the position later reported back decodes to the
    /// value that was requested.
    #[must_use]
    pub fn encode(&self, config: &DeviceConfig, options: &UserOptions) -> ZclCommand {
        let effective_invert = config.effective_invert(options);
        let (command, payload) = match self {
            Self::Open => (cmd::UP_OPEN, Vec::new()),
            Self::Close => (cmd::DOWN_CLOSE, Vec::new()),
            Self::Stop => (cmd::STOP, Vec::new()),
            Self::GoToPosition(position) => (
                cmd::GO_TO_LIFT_PERCENTAGE,
                vec![device_value(*position, effective_invert)],
            ),
            Self::GoToTilt(position) => (
                cmd::GO_TO_TILT_PERCENTAGE,
                vec![device_value(*position, effective_invert)],
            ),
        };

        ZclCommand {
            cluster: cluster::id::WINDOW_COVERING,
            command,
            payload,
        }
    }
}

impl fmt::Display for CoverCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("OPEN"),
            Self::Close => f.write_str("CLOSE"),
            Self::Stop => f.write_str("STOP"),
            Self::GoToPosition(position) => write!(f, "POSITION {position}"),
            Self::GoToTilt(position) => write!(f, "TILT {position}"),
        }
    }
}

impl FromStr for CoverCommand {
    type Err = ValueError;

    /// Parses the movement keywords hosts accept in set payloads.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("OPEN") {
            Ok(Self::Open)
        } else if s.eq_ignore_ascii_case("CLOSE") {
            Ok(Self::Close)
        } else if s.eq_ignore_ascii_case("STOP") {
            Ok(Self::Stop)
        } else {
            Err(ValueError::InvalidCoverCommand(s.to_string()))
        }
    }
}

/// A ZCL cluster command frame ready for the host to transmit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ZclCommand {
    /// Target cluster identifier.
    pub cluster: u16,
    /// Command identifier within the cluster.
    pub command: u8,
    /// Command payload bytes.
    pub payload: Vec<u8>,
}

fn device_value(position: Percentage, effective_invert: bool) -> u8 {
    if effective_invert {
        position.value()
    } else {
        position.inverted().value()
    }
}
