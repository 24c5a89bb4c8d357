// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `zbcover` Lib - device definitions and state converters for Zigbee
//! window-covering devices.
//!
//! This library is the pure conversion layer of a Zigbee bridge: it maps
//! raw attribute reports to normalized state updates, and typed cover
//! commands to cluster command frames. It owns no I/O. The host parses its
//! radio traffic into JSON payloads, hands them here, and transmits the
//! frames it gets back.
//!
//! # Supported Features
//!
//! - **Definition registry**: Resolve the Zigbee model a device announces
//!   to its converters
//! - **Cover conversion**: Position, tilt, open/close state, and
//!   operating-mode flags
//! - **Inversion handling**: Pre-inverted models and the per-device
//!   `invert_cover` user option
//! - **Battery decoding**: ZCL Power Configuration percentage and voltage
//!   conventions
//! - **Reporting setup**: Attribute-reporting intervals for hosts to apply
//!   on join
//!
//! # Quick Start
//!
//! ## Decoding a Report
//!
//! ```
//! use zbcover_lib::{AttributeReport, Registry, UserOptions};
//!
//! fn main() -> zbcover_lib::Result<()> {
//!     let registry = Registry::with_builtin();
//!     let definition = registry.find("zbShade").expect("built-in model");
//!
//!     let report = AttributeReport::from_cluster_name(
//!         "closuresWindowCovering",
//!         r#"{"currentPositionTiltPercentage":25}"#,
//!     )?;
//!
//!     let update = definition.decode(&report, &UserOptions::default());
//!     assert_eq!(update.tilt.map(|t| t.value()), Some(25));
//!     Ok(())
//! }
//! ```
//!
//! ## Encoding a Command
//!
//! ```
//! use zbcover_lib::{CoverCommand, Percentage, Registry, UserOptions};
//!
//! fn main() -> zbcover_lib::Result<()> {
//!     let registry = Registry::with_builtin();
//!     let definition = registry.find("zbShade").expect("built-in model");
//!
//!     let command = CoverCommand::GoToTilt(Percentage::new(80)?);
//!     let frame = definition.command(&command, &UserOptions::default())?;
//!
//!     assert_eq!(frame.cluster, 0x0102);
//!     assert_eq!(frame.payload, vec![80]);
//!     Ok(())
//! }
//! ```
//!
//! # Position Conventions
//!
//! ZCL devices report 0 as fully open and 100 as fully closed; published
//! state uses the opposite convention. The decoders flip values between the
//! two, unless a model's definition marks it `cover_inverted` (it already
//! reports published-convention numbers) or the user sets `invert_cover`
//! (flip the other way). The two flags cancel when both are set.
//!
//! The open/close *state* does not follow the user option: its threshold
//! keys on the model flag alone, so the published OPEN/CLOSE meaning stays
//! stable no matter how the user likes their numbers.

pub mod cluster;
pub mod command;
mod config;
pub mod definition;
pub mod error;
pub mod report;
pub mod state;
pub mod types;

pub use command::{CoverCommand, ZclCommand};
pub use config::{BatteryConfig, DeviceConfig, UserOptions};
pub use definition::{
    Battery, Control, Definition, Extend, Registry, ReportingConfig, StateSource, WindowCovering,
};
pub use error::{DefinitionError, Error, ParseError, Result, ValueError};
pub use report::{AttributeReport, PowerConfigReport, WindowCoveringReport};
pub use state::StateUpdate;
pub use types::{CoverMode, CoverState, Percentage};
