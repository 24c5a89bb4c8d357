// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute-report parsing for the supported clusters.
//!
//! Zigbee host stacks deliver attribute reports as JSON objects keyed by
//! ZCL attribute name, together with the cluster they arrived on. This
//! module parses those payloads into typed reports; the report types then
//! decode into [`StateUpdate`](crate::state::StateUpdate)s.
//!
//! Parsing is permissive: a field holding a value of the wrong type reads
//! as absent rather than failing the report, so one junk attribute never
//! discards the valid ones next to it.
//!
//! # Examples
//!
//! ```
//! use zbcover_lib::AttributeReport;
//!
//! let report = AttributeReport::from_cluster_name(
//!     "closuresWindowCovering",
//!     r#"{"currentPositionTiltPercentage":25}"#,
//! )
//! .unwrap();
//! assert_eq!(report.cluster_id(), 0x0102);
//! ```

mod power_config;
mod window_covering;

pub use power_config::PowerConfigReport;
pub use window_covering::WindowCoveringReport;

use serde::Deserialize;

use crate::cluster;
use crate::error::ParseError;

/// A parsed attribute report from one of the supported clusters.
#[derive(Debug, Clone, Copy)]
pub enum AttributeReport {
    /// Report from the Window Covering cluster.
    WindowCovering(WindowCoveringReport),
    /// Report from the Power Configuration cluster.
    PowerConfig(PowerConfigReport),
}

impl AttributeReport {
    /// Parses a report payload for the named cluster.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedCluster`] for clusters this library
    /// has no converter for, or [`ParseError::Json`] if the payload is not
    /// a JSON object.
    pub fn from_cluster_name(cluster: &str, payload: &str) -> Result<Self, ParseError> {
        match cluster {
            cluster::name::WINDOW_COVERING => {
                Ok(Self::WindowCovering(serde_json::from_str(payload)?))
            }
            cluster::name::POWER_CONFIG => Ok(Self::PowerConfig(serde_json::from_str(payload)?)),
            other => Err(ParseError::UnsupportedCluster(other.to_string())),
        }
    }

    /// Parses a report payload for a numeric cluster identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedCluster`] for clusters this library
    /// has no converter for, or [`ParseError::Json`] if the payload is not
    /// a JSON object.
    pub fn from_cluster_id(cluster: u16, payload: &str) -> Result<Self, ParseError> {
        match cluster {
            cluster::id::WINDOW_COVERING => {
                Ok(Self::WindowCovering(serde_json::from_str(payload)?))
            }
            cluster::id::POWER_CONFIG => Ok(Self::PowerConfig(serde_json::from_str(payload)?)),
            other => Err(ParseError::UnsupportedCluster(format!("{other:#06x}"))),
        }
    }

    /// Returns the identifier of the cluster this report came from.
    #[must_use]
    pub const fn cluster_id(&self) -> u16 {
        match self {
            Self::WindowCovering(_) => cluster::id::WINDOW_COVERING,
            Self::PowerConfig(_) => cluster::id::POWER_CONFIG,
        }
    }
}

// Devices put junk in attribute fields often enough that a strict number
// parse would drop whole reports. Anything that is not an integer fitting
// the target type reads as absent.
pub(crate) fn lenient_u16<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|raw| u16::try_from(raw).ok()))
}

pub(crate) fn lenient_u8<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|raw| u8::try_from(raw).ok()))
}
