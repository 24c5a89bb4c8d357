// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the window-covering converter library.
//!
//! This module provides the error hierarchy used across the crate. The
//! top-level [`Error`] wraps the specific error kinds so callers can match
//! on the failure class they care about. A crate-wide [`Result`] alias is
//! provided for convenience.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while validating a value.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing an attribute report.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error related to a device definition or the definition registry.
    #[error("definition error: {0}")]
    Definition(#[from] DefinitionError),
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Value is outside the acceptable range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum acceptable value.
        min: u16,
        /// Maximum acceptable value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// String does not name a cover state.
    #[error("invalid cover state: {0}")]
    InvalidCoverState(String),

    /// String does not name a cover command.
    #[error("invalid cover command: {0}")]
    InvalidCoverCommand(String),
}

/// Errors that occur while parsing attribute reports.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Report payload is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Report came from a cluster this library has no converter for.
    #[error("unsupported cluster: {0}")]
    UnsupportedCluster(String),
}

/// Errors related to device definitions and the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// Definition declares no Zigbee model identifiers to match on.
    #[error("definition for '{model}' declares no zigbee model identifiers")]
    MissingZigbeeModels {
        /// Vendor model name of the offending definition.
        model: String,
    },

    /// Zigbee model identifier is already claimed by another definition.
    #[error("zigbee model '{zigbee_model}' is already registered by '{existing}'")]
    DuplicateZigbeeModel {
        /// The contested Zigbee model identifier.
        zigbee_model: String,
        /// Vendor model name of the definition that registered it first.
        existing: String,
    },

    /// Command targets a control the definition does not declare.
    #[error("'{model}' does not support {control} control")]
    UnsupportedControl {
        /// Vendor model name of the definition.
        model: String,
        /// The control the command needed.
        control: &'static str,
    },
}

/// A specialized `Result` type for this library's operations.
pub type Result<T> = std::result::Result<T, Error>;
