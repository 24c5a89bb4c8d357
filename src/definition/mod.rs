// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device definitions and the model registry.
//!
//! A [`Definition`] ties the Zigbee model identifier a device announces to
//! the features it supports. Features select the converters: a definition
//! with a window-covering feature decodes Window Covering reports and
//! encodes cover commands, one with a battery feature decodes Power
//! Configuration reports. The [`Registry`] resolves announcements to
//! definitions.
//!
//! # Examples
//!
//! ```
//! use zbcover_lib::{AttributeReport, Registry, UserOptions};
//!
//! let registry = Registry::with_builtin();
//! let definition = registry.find("zbShade").expect("built-in model");
//!
//! let report = AttributeReport::from_cluster_name(
//!     "closuresWindowCovering",
//!     r#"{"currentPositionTiltPercentage":25}"#,
//! )
//! .unwrap();
//! let update = definition.decode(&report, &UserOptions::default());
//! assert_eq!(update.tilt.map(|t| t.value()), Some(25));
//! ```

mod battery;
mod window_covering;

pub use battery::Battery;
pub use window_covering::{Control, StateSource, WindowCovering};

use crate::command::{CoverCommand, ZclCommand};
use crate::config::UserOptions;
use crate::error::{DefinitionError, Result};
use crate::report::AttributeReport;
use crate::state::StateUpdate;

// Reporting intervals in seconds; 62000 is the conventional host maximum.
pub(crate) const REPORT_MIN_INTERVAL: u16 = 1;
pub(crate) const REPORT_HOUR: u16 = 3600;
pub(crate) const REPORT_MAX_INTERVAL: u16 = 62000;
// Minimum change, in attribute units, that triggers an early report.
pub(crate) const REPORT_CHANGE_POSITION: u16 = 1;
pub(crate) const REPORT_CHANGE_BATTERY: u16 = 10;

/// An attribute-reporting entry a definition asks the host to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReportingConfig {
    /// Cluster the attribute lives on.
    pub cluster: u16,
    /// Attribute identifier.
    pub attribute: u16,
    /// Minimum seconds between reports.
    pub min_interval: u16,
    /// Maximum seconds between reports.
    pub max_interval: u16,
    /// Minimum change that triggers an early report.
    pub change: u16,
}

/// A feature attached to a definition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extend {
    /// Window-covering conversion: position, tilt, open/close state.
    WindowCovering(WindowCovering),
    /// Battery reporting.
    Battery(Battery),
}

/// A device definition: identity metadata plus the features that select
/// converters.
///
/// # Examples
///
/// ```
/// use zbcover_lib::{Battery, Definition, Extend, WindowCovering};
///
/// let definition = Definition::new("RollerOne", "Acme", "Roller shade motor")
///     .with_zigbee_model("ACME.ROLLER.1")
///     .with_extend(Extend::WindowCovering(WindowCovering::lift()))
///     .with_extend(Extend::Battery(Battery::new().with_voltage()));
///
/// assert!(definition.matches("ACME.ROLLER.1"));
/// assert!(definition.supports_lift());
/// assert!(definition.has_battery());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Definition {
    zigbee_models: Vec<String>,
    model: String,
    vendor: String,
    description: String,
    #[serde(default)]
    extends: Vec<Extend>,
}

impl Definition {
    /// Creates a definition with no Zigbee models or features attached.
    #[must_use]
    pub fn new(
        model: impl Into<String>,
        vendor: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            zigbee_models: Vec::new(),
            model: model.into(),
            vendor: vendor.into(),
            description: description.into(),
            extends: Vec::new(),
        }
    }

    /// The built-in definition for the DIY `zbShade` tilt shade controller.
    ///
    /// A tilt-only covering that reports positions pre-inverted and derives
    /// its open/close state from tilt, plus standard battery reporting.
    #[must_use]
    pub fn zb_shade() -> Self {
        Self::new("zbShade", "DIY", "Tilt-controlled window shade")
            .with_zigbee_model("zbShade")
            .with_extend(Extend::WindowCovering(
                WindowCovering::tilt().with_cover_inverted(true),
            ))
            .with_extend(Extend::Battery(Battery::new()))
    }

    /// Adds a Zigbee model identifier this definition matches.
    #[must_use]
    pub fn with_zigbee_model(mut self, zigbee_model: impl Into<String>) -> Self {
        self.zigbee_models.push(zigbee_model.into());
        self
    }

    /// Adds a feature.
    #[must_use]
    pub fn with_extend(mut self, extend: Extend) -> Self {
        self.extends.push(extend);
        self
    }

    /// Returns the vendor model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the vendor name.
    #[must_use]
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the Zigbee model identifiers this definition matches.
    #[must_use]
    pub fn zigbee_models(&self) -> &[String] {
        &self.zigbee_models
    }

    /// Returns the attached features.
    #[must_use]
    pub fn extends(&self) -> &[Extend] {
        &self.extends
    }

    /// Returns `true` if this definition matches an announced model
    /// identifier. Announce strings often arrive NUL-padded.
    #[must_use]
    pub fn matches(&self, model_id: &str) -> bool {
        let model_id = normalize_model_id(model_id);
        self.zigbee_models
            .iter()
            .any(|candidate| candidate == model_id)
    }

    /// Returns the window-covering feature, if attached.
    #[must_use]
    pub fn window_covering(&self) -> Option<&WindowCovering> {
        self.extends.iter().find_map(|extend| match extend {
            Extend::WindowCovering(covering) => Some(covering),
            Extend::Battery(_) => None,
        })
    }

    /// Returns the battery feature, if attached.
    #[must_use]
    pub fn battery(&self) -> Option<&Battery> {
        self.extends.iter().find_map(|extend| match extend {
            Extend::Battery(battery) => Some(battery),
            Extend::WindowCovering(_) => None,
        })
    }

    /// Returns `true` if the model exposes lift control.
    #[must_use]
    pub fn supports_lift(&self) -> bool {
        self.window_covering()
            .is_some_and(WindowCovering::supports_lift)
    }

    /// Returns `true` if the model exposes tilt control.
    #[must_use]
    pub fn supports_tilt(&self) -> bool {
        self.window_covering()
            .is_some_and(WindowCovering::supports_tilt)
    }

    /// Returns `true` if the model reports battery state.
    #[must_use]
    pub fn has_battery(&self) -> bool {
        self.battery().is_some()
    }

    /// Decodes a report using the feature that owns its cluster.
    ///
    /// Reports on clusters no attached feature covers decode to an empty
    /// update; a device reporting something its definition does not declare
    /// is not an error.
    #[must_use]
    pub fn decode(&self, report: &AttributeReport, options: &UserOptions) -> StateUpdate {
        match report {
            AttributeReport::WindowCovering(report) => match self.window_covering() {
                Some(covering) => report.decode(&covering.device_config(), options),
                None => {
                    tracing::debug!(
                        model = %self.model,
                        "window covering report for a model without the feature"
                    );
                    StateUpdate::new()
                }
            },
            AttributeReport::PowerConfig(report) => match self.battery() {
                Some(battery) => report.decode(&battery.config()),
                None => {
                    tracing::debug!(
                        model = %self.model,
                        "power report for a model without a battery feature"
                    );
                    StateUpdate::new()
                }
            },
        }
    }

    /// Encodes a cover command for this model.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::UnsupportedControl`] if the definition
    /// has no window-covering feature, or if a positional command targets
    /// an axis the model does not declare.
    pub fn command(&self, command: &CoverCommand, options: &UserOptions) -> Result<ZclCommand> {
        let Some(covering) = self.window_covering() else {
            return Err(DefinitionError::UnsupportedControl {
                model: self.model.clone(),
                control: "cover",
            }
            .into());
        };

        match command {
            CoverCommand::GoToPosition(_) if !covering.supports_lift() => {
                Err(DefinitionError::UnsupportedControl {
                    model: self.model.clone(),
                    control: "lift",
                }
                .into())
            }
            CoverCommand::GoToTilt(_) if !covering.supports_tilt() => {
                Err(DefinitionError::UnsupportedControl {
                    model: self.model.clone(),
                    control: "tilt",
                }
                .into())
            }
            _ => {
                tracing::debug!(model = %self.model, command = %command, "encoding cover command");
                Ok(command.encode(&covering.device_config(), options))
            }
        }
    }

    /// Returns the attribute reporting all attached features ask for.
    #[must_use]
    pub fn reporting(&self) -> Vec<ReportingConfig> {
        self.extends
            .iter()
            .flat_map(|extend| match extend {
                Extend::WindowCovering(covering) => covering.reporting(),
                Extend::Battery(battery) => battery.reporting(),
            })
            .collect()
    }
}

/// A collection of definitions resolving announced models to converters.
///
/// # Examples
///
/// ```
/// use zbcover_lib::Registry;
///
/// let registry = Registry::with_builtin();
/// assert!(registry.find("zbShade").is_some());
/// assert!(registry.find("unknown-model").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    definitions: Vec<Definition>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    /// Creates a registry pre-loaded with the built-in definitions.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.definitions.push(Definition::zb_shade());
        registry
    }

    /// Registers a definition.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::MissingZigbeeModels`] if the definition
    /// declares no model identifiers, or
    /// [`DefinitionError::DuplicateZigbeeModel`] if one of them is already
    /// claimed.
    pub fn register(&mut self, definition: Definition) -> Result<()> {
        if definition.zigbee_models().is_empty() {
            return Err(DefinitionError::MissingZigbeeModels {
                model: definition.model().to_string(),
            }
            .into());
        }

        for zigbee_model in definition.zigbee_models() {
            if let Some(existing) = self
                .definitions
                .iter()
                .find(|registered| registered.matches(zigbee_model))
            {
                return Err(DefinitionError::DuplicateZigbeeModel {
                    zigbee_model: zigbee_model.clone(),
                    existing: existing.model().to_string(),
                }
                .into());
            }
        }

        tracing::info!(
            model = %definition.model(),
            vendor = %definition.vendor(),
            "registered device definition"
        );
        self.definitions.push(definition);
        Ok(())
    }

    /// Finds the definition matching an announced model identifier.
    #[must_use]
    pub fn find(&self, model_id: &str) -> Option<&Definition> {
        let found = self
            .definitions
            .iter()
            .find(|definition| definition.matches(model_id));
        if found.is_none() {
            tracing::debug!(model_id, "no definition matches announced model");
        }
        found
    }

    /// Returns the registered definitions.
    #[must_use]
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Returns the number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if no definition is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

// Announce strings arrive NUL-padded from devices that fill the whole
// fixed-size field.
fn normalize_model_id(model_id: &str) -> &str {
    model_id.trim_matches('\0').trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::CoverState;

    #[test]
    fn zb_shade_is_a_tilt_only_inverted_covering() {
        let definition = Definition::zb_shade();
        assert_eq!(definition.model(), "zbShade");
        assert_eq!(definition.vendor(), "DIY");
        assert_eq!(definition.zigbee_models(), ["zbShade"]);

        let covering = definition.window_covering().unwrap();
        assert!(covering.supports_tilt());
        assert!(!covering.supports_lift());
        assert!(covering.cover_inverted());
        assert_eq!(covering.state_source(), StateSource::Tilt);
        assert!(definition.has_battery());
    }

    #[test]
    fn matches_trims_nul_padding() {
        let definition = Definition::zb_shade();
        assert!(definition.matches("zbShade"));
        assert!(definition.matches("zbShade\0\0\0"));
        assert!(definition.matches("zbShade "));
        assert!(!definition.matches("zbShadeX"));
    }

    #[test]
    fn decode_dispatches_to_owning_feature() {
        let definition = Definition::zb_shade();
        let options = UserOptions::default();

        let report = AttributeReport::from_cluster_name(
            "closuresWindowCovering",
            r#"{"currentPositionTiltPercentage":0}"#,
        )
        .unwrap();
        let update = definition.decode(&report, &options);
        assert_eq!(update.tilt.map(|t| t.value()), Some(0));
        assert_eq!(update.state, Some(CoverState::Close));

        let report = AttributeReport::from_cluster_name(
            "genPowerCfg",
            r#"{"batteryPercentageRemaining":150}"#,
        )
        .unwrap();
        let update = definition.decode(&report, &options);
        assert_eq!(update.battery, Some(75.0));
    }

    #[test]
    fn decode_without_matching_feature_is_empty() {
        let definition = Definition::new("Winder", "Acme", "Shade")
            .with_zigbee_model("ACME.WINDER")
            .with_extend(Extend::WindowCovering(WindowCovering::lift()));

        let report =
            AttributeReport::from_cluster_name("genPowerCfg", r#"{"batteryVoltage":30}"#).unwrap();
        let update = definition.decode(&report, &UserOptions::default());
        assert!(update.is_empty());
    }

    #[test]
    fn command_requires_declared_control() {
        let definition = Definition::zb_shade();
        let options = UserOptions::default();

        let tilt = CoverCommand::GoToTilt(crate::types::Percentage::clamped(50));
        assert!(definition.command(&tilt, &options).is_ok());

        let lift = CoverCommand::GoToPosition(crate::types::Percentage::clamped(50));
        let error = definition.command(&lift, &options).unwrap_err();
        assert!(matches!(
            error,
            Error::Definition(DefinitionError::UnsupportedControl { control: "lift", .. })
        ));
    }

    #[test]
    fn command_without_covering_feature_fails() {
        let definition = Definition::new("Cell", "Acme", "Battery sensor")
            .with_zigbee_model("ACME.CELL")
            .with_extend(Extend::Battery(Battery::new()));

        let error = definition
            .command(&CoverCommand::Open, &UserOptions::default())
            .unwrap_err();
        assert!(matches!(
            error,
            Error::Definition(DefinitionError::UnsupportedControl { control: "cover", .. })
        ));
    }

    #[test]
    fn movement_commands_need_no_positional_control() {
        let definition = Definition::zb_shade();
        let frame = definition
            .command(&CoverCommand::Open, &UserOptions::default())
            .unwrap();
        assert_eq!(frame.command, 0x00);
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn reporting_aggregates_all_features() {
        let configs = Definition::zb_shade().reporting();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].cluster, 0x0102);
        assert_eq!(configs[0].attribute, 0x0009);
        assert_eq!(configs[1].cluster, 0x0001);
        assert_eq!(configs[1].attribute, 0x0021);
    }

    #[test]
    fn registry_with_builtin_resolves_zb_shade() {
        let registry = Registry::with_builtin();
        assert_eq!(registry.len(), 1);
        let definition = registry.find("zbShade\0").unwrap();
        assert_eq!(definition.model(), "zbShade");
    }

    #[test]
    fn register_rejects_definitions_without_models() {
        let mut registry = Registry::new();
        let error = registry
            .register(Definition::new("Ghost", "Acme", "No models"))
            .unwrap_err();
        assert!(matches!(
            error,
            Error::Definition(DefinitionError::MissingZigbeeModels { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn register_rejects_duplicate_models() {
        let mut registry = Registry::with_builtin();
        let duplicate = Definition::new("ShadeClone", "Acme", "Copycat")
            .with_zigbee_model("zbShade");

        let error = registry.register(duplicate).unwrap_err();
        assert!(matches!(
            error,
            Error::Definition(DefinitionError::DuplicateZigbeeModel { ref existing, .. })
                if existing == "zbShade"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_accepts_new_models() {
        let mut registry = Registry::with_builtin();
        let definition = Definition::new("RollerOne", "Acme", "Roller shade")
            .with_zigbee_model("ACME.ROLLER.1")
            .with_extend(Extend::WindowCovering(WindowCovering::lift()));

        registry.register(definition).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.find("ACME.ROLLER.1").is_some());
    }
}
