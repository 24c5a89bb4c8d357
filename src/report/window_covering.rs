// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser and decoder for Window Covering cluster reports.

use serde::Deserialize;

use crate::config::{DeviceConfig, UserOptions};
use crate::state::StateUpdate;
use crate::types::{CoverMode, CoverState, Percentage};

/// A parsed attribute report from the Window Covering cluster
/// (`closuresWindowCovering`).
///
/// Reports rarely carry every attribute; most carry exactly the one that
/// changed. Raw percentages use the device convention where 0 is open and
/// 100 is closed, with 255 reserved as an "unknown" sentinel.
///
/// # Examples
///
/// ```
/// use zbcover_lib::{DeviceConfig, UserOptions, WindowCoveringReport};
///
/// let json = r#"{"currentPositionLiftPercentage":30}"#;
/// let report: WindowCoveringReport = serde_json::from_str(json).unwrap();
/// assert_eq!(report.lift_percentage(), Some(30));
///
/// // Raw 30 means 70% open in the published convention.
/// let update = report.decode(&DeviceConfig::new(), &UserOptions::default());
/// assert_eq!(update.position.map(|p| p.value()), Some(70));
/// assert_eq!(update.state.map(|s| s.as_str()), Some("OPEN"));
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WindowCoveringReport {
    /// Lift position in the device convention (0-100, 255 = unknown).
    #[serde(
        rename = "currentPositionLiftPercentage",
        default,
        deserialize_with = "super::lenient_u16"
    )]
    current_position_lift_percentage: Option<u16>,

    /// Tilt position in the device convention (0-100, 255 = unknown).
    #[serde(
        rename = "currentPositionTiltPercentage",
        default,
        deserialize_with = "super::lenient_u16"
    )]
    current_position_tilt_percentage: Option<u16>,

    /// Operating-mode flags (bitmap8).
    #[serde(
        rename = "windowCoveringMode",
        default,
        deserialize_with = "super::lenient_u8"
    )]
    window_covering_mode: Option<u8>,
}

impl WindowCoveringReport {
    /// Returns the raw lift percentage, if reported.
    #[must_use]
    pub const fn lift_percentage(&self) -> Option<u16> {
        self.current_position_lift_percentage
    }

    /// Returns the raw tilt percentage, if reported.
    #[must_use]
    pub const fn tilt_percentage(&self) -> Option<u16> {
        self.current_position_tilt_percentage
    }

    /// Returns the raw operating-mode byte, if reported.
    #[must_use]
    pub const fn mode(&self) -> Option<u8> {
        self.window_covering_mode
    }

    /// Decodes this report into a normalized state update.
    ///
    /// Raw percentages are flipped to the published convention (100 = open)
    /// unless [`DeviceConfig::effective_invert`] says the numbers already
    /// match it. Values above 100, including the 255 sentinel, carry no
    /// information and leave their field unset.
    ///
    /// The open/close state comes from the lift value, or from tilt when
    /// the model is configured for it. Its threshold depends on
    /// `cover_inverted` alone: the user-level inversion moves the numbers
    /// but never changes which raw value means "closed".
    #[must_use]
    pub fn decode(&self, config: &DeviceConfig, options: &UserOptions) -> StateUpdate {
        let effective_invert = config.effective_invert(options);
        let mut update = StateUpdate::new();

        if let Some(value) = usable_percentage(self.current_position_lift_percentage) {
            update.position = Some(published_position(value, effective_invert));
            if !config.cover_state_from_tilt {
                update.state = Some(state_from_raw(value, config.cover_inverted));
            }
        } else if let Some(raw) = self.current_position_lift_percentage {
            tracing::trace!(raw, "ignoring out-of-range lift percentage");
        }

        if let Some(value) = usable_percentage(self.current_position_tilt_percentage) {
            update.tilt = Some(published_position(value, effective_invert));
            if config.cover_state_from_tilt {
                update.state = Some(state_from_raw(value, config.cover_inverted));
            }
        } else if let Some(raw) = self.current_position_tilt_percentage {
            tracing::trace!(raw, "ignoring out-of-range tilt percentage");
        }

        if let Some(bits) = self.window_covering_mode {
            update.cover_mode = Some(CoverMode::from_raw(bits));
        }

        update
    }
}

// Raw percentages above 100 (the 255 sentinel among them) carry no data.
fn usable_percentage(raw: Option<u16>) -> Option<u8> {
    raw.filter(|value| *value <= 100)
        .and_then(|value| u8::try_from(value).ok())
}

fn published_position(value: u8, effective_invert: bool) -> Percentage {
    let raw = Percentage::clamped(value);
    if effective_invert { raw } else { raw.inverted() }
}

// The threshold keys on the model flag alone so the published OPEN/CLOSE
// convention stays fixed under user-level inversion.
const fn state_from_raw(value: u8, cover_inverted: bool) -> CoverState {
    let closed_at = if cover_inverted { 0 } else { 100 };
    if value == closed_at {
        CoverState::Close
    } else {
        CoverState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(payload: &str) -> WindowCoveringReport {
        serde_json::from_str(payload).unwrap()
    }

    #[test]
    fn parses_full_report() {
        let report = parse(
            r#"{"currentPositionLiftPercentage":40,"currentPositionTiltPercentage":60,"windowCoveringMode":3}"#,
        );
        assert_eq!(report.lift_percentage(), Some(40));
        assert_eq!(report.tilt_percentage(), Some(60));
        assert_eq!(report.mode(), Some(3));
    }

    #[test]
    fn parses_partial_report() {
        let report = parse(r#"{"currentPositionTiltPercentage":15}"#);
        assert_eq!(report.lift_percentage(), None);
        assert_eq!(report.tilt_percentage(), Some(15));
        assert_eq!(report.mode(), None);
    }

    #[test]
    fn parses_empty_report() {
        let report = parse("{}");
        assert_eq!(report.lift_percentage(), None);
        assert_eq!(report.tilt_percentage(), None);
        assert_eq!(report.mode(), None);
    }

    #[test]
    fn tolerates_junk_fields() {
        let report = parse(
            r#"{"currentPositionLiftPercentage":"stuck","currentPositionTiltPercentage":20}"#,
        );
        assert_eq!(report.lift_percentage(), None);
        assert_eq!(report.tilt_percentage(), Some(20));
    }

    #[test]
    fn ignores_unknown_attributes() {
        let report = parse(r#"{"installedOpenLimitLift":0,"currentPositionLiftPercentage":5}"#);
        assert_eq!(report.lift_percentage(), Some(5));
    }

    #[test]
    fn regular_model_flips_position() {
        let config = DeviceConfig::new();
        let options = UserOptions::default();
        for raw in 0..=100u16 {
            let report = parse(&format!(r#"{{"currentPositionLiftPercentage":{raw}}}"#));
            let update = report.decode(&config, &options);
            assert_eq!(update.position.map(|p| u16::from(p.value())), Some(100 - raw));
        }
    }

    #[test]
    fn inverted_model_passes_position_through() {
        let config = DeviceConfig::new().with_cover_inverted(true);
        let options = UserOptions::default();
        for raw in 0..=100u16 {
            let report = parse(&format!(r#"{{"currentPositionLiftPercentage":{raw}}}"#));
            let update = report.decode(&config, &options);
            assert_eq!(update.position.map(|p| u16::from(p.value())), Some(raw));
        }
    }

    #[test]
    fn user_inversion_flips_regular_model() {
        let config = DeviceConfig::new();
        let options = UserOptions::inverted();
        let report = parse(r#"{"currentPositionLiftPercentage":30}"#);
        let update = report.decode(&config, &options);
        assert_eq!(update.position.map(|p| p.value()), Some(30));
    }

    #[test]
    fn user_inversion_cancels_inverted_model() {
        let config = DeviceConfig::new().with_cover_inverted(true);
        let options = UserOptions::inverted();
        let report = parse(r#"{"currentPositionLiftPercentage":30}"#);
        let update = report.decode(&config, &options);
        assert_eq!(update.position.map(|p| p.value()), Some(70));
    }

    #[test]
    fn tilt_follows_same_inversion_as_lift() {
        let config = DeviceConfig::new();
        let report = parse(r#"{"currentPositionTiltPercentage":25}"#);

        let update = report.decode(&config, &UserOptions::default());
        assert_eq!(update.tilt.map(|t| t.value()), Some(75));

        let update = report.decode(&config, &UserOptions::inverted());
        assert_eq!(update.tilt.map(|t| t.value()), Some(25));
    }

    #[test]
    fn sentinel_255_leaves_position_unset() {
        let report = parse(r#"{"currentPositionLiftPercentage":255}"#);
        let update = report.decode(&DeviceConfig::new(), &UserOptions::default());
        assert!(update.position.is_none());
        assert!(update.state.is_none());
    }

    #[test]
    fn values_above_100_leave_fields_unset() {
        for raw in [101, 200, 1000] {
            let report = parse(&format!(r#"{{"currentPositionTiltPercentage":{raw}}}"#));
            let update = report.decode(&DeviceConfig::new(), &UserOptions::default());
            assert!(update.tilt.is_none(), "raw value {raw}");
        }
    }

    #[test]
    fn regular_model_closes_at_raw_100() {
        let config = DeviceConfig::new();
        let options = UserOptions::default();

        let cases = [(100, CoverState::Close), (99, CoverState::Open), (0, CoverState::Open)];
        for (raw, expected) in cases {
            let report = parse(&format!(r#"{{"currentPositionLiftPercentage":{raw}}}"#));
            let update = report.decode(&config, &options);
            assert_eq!(update.state, Some(expected), "raw value {raw}");
        }
    }

    #[test]
    fn inverted_model_closes_at_raw_0() {
        let config = DeviceConfig::new().with_cover_inverted(true);
        let options = UserOptions::default();

        let cases = [(0, CoverState::Close), (1, CoverState::Open), (100, CoverState::Open)];
        for (raw, expected) in cases {
            let report = parse(&format!(r#"{{"currentPositionLiftPercentage":{raw}}}"#));
            let update = report.decode(&config, &options);
            assert_eq!(update.state, Some(expected), "raw value {raw}");
        }
    }

    #[test]
    fn state_comes_from_lift_by_default() {
        let config = DeviceConfig::new();
        let options = UserOptions::default();

        let report = parse(r#"{"currentPositionTiltPercentage":100}"#);
        let update = report.decode(&config, &options);
        assert!(update.state.is_none());

        let report = parse(r#"{"currentPositionLiftPercentage":100}"#);
        let update = report.decode(&config, &options);
        assert_eq!(update.state, Some(CoverState::Close));
    }

    #[test]
    fn state_comes_from_tilt_when_configured() {
        let config = DeviceConfig::new().with_state_from_tilt(true);
        let options = UserOptions::default();

        let report = parse(r#"{"currentPositionLiftPercentage":100}"#);
        let update = report.decode(&config, &options);
        assert!(update.state.is_none());

        let report = parse(r#"{"currentPositionTiltPercentage":100}"#);
        let update = report.decode(&config, &options);
        assert_eq!(update.state, Some(CoverState::Close));
    }

    // Hosts rely on the OPEN/CLOSE convention staying fixed per model, so
    // user-level inversion flips the numbers while the state keeps keying
    // on the raw value. The published pair can look contradictory:
    // position 100 together with state CLOSE.
    #[test]
    fn user_inversion_moves_numbers_but_not_state() {
        let config = DeviceConfig::new();
        let options = UserOptions::inverted();

        let report = parse(r#"{"currentPositionLiftPercentage":100}"#);
        let update = report.decode(&config, &options);
        assert_eq!(update.position.map(|p| p.value()), Some(100));
        assert_eq!(update.state, Some(CoverState::Close));
    }

    #[test]
    fn mode_decodes_into_flags() {
        let report = parse(r#"{"windowCoveringMode":10}"#);
        let update = report.decode(&DeviceConfig::new(), &UserOptions::default());
        let mode = update.cover_mode.unwrap();
        assert!(!mode.reversed());
        assert!(mode.calibration());
        assert!(!mode.maintenance());
        assert!(mode.led());
    }

    #[test]
    fn decode_is_deterministic() {
        let report = parse(
            r#"{"currentPositionLiftPercentage":45,"currentPositionTiltPercentage":55,"windowCoveringMode":1}"#,
        );
        let config = DeviceConfig::new().with_cover_inverted(true);
        let options = UserOptions::inverted();

        let first = report.decode(&config, &options);
        let second = report.decode(&config, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_report_decodes_to_empty_update() {
        let report = parse("{}");
        let update = report.decode(&DeviceConfig::new(), &UserOptions::default());
        assert!(update.is_empty());
    }
}
