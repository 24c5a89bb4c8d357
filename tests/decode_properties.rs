// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Systematic coverage of the conversion rules across the whole value range
//! and every flag combination.

use zbcover_lib::{
    BatteryConfig, CoverCommand, CoverState, DeviceConfig, Percentage, PowerConfigReport,
    UserOptions, WindowCoveringReport,
};

fn lift_report(raw: u16) -> WindowCoveringReport {
    serde_json::from_str(&format!(r#"{{"currentPositionLiftPercentage":{raw}}}"#))
        .expect("valid report")
}

fn tilt_report(raw: u16) -> WindowCoveringReport {
    serde_json::from_str(&format!(r#"{{"currentPositionTiltPercentage":{raw}}}"#))
        .expect("valid report")
}

fn flag_combinations() -> [(DeviceConfig, UserOptions); 4] {
    [
        (DeviceConfig::new(), UserOptions::new()),
        (DeviceConfig::new(), UserOptions::inverted()),
        (DeviceConfig::new().with_cover_inverted(true), UserOptions::new()),
        (
            DeviceConfig::new().with_cover_inverted(true),
            UserOptions::inverted(),
        ),
    ]
}

#[test]
fn position_decode_covers_full_range_for_all_inversions() {
    for (config, options) in flag_combinations() {
        let effective_invert = config.effective_invert(&options);
        for raw in 0..=100u16 {
            let expected = if effective_invert { raw } else { 100 - raw };

            let update = lift_report(raw).decode(&config, &options);
            assert_eq!(
                update.position.map(|p| u16::from(p.value())),
                Some(expected),
                "lift raw {raw} with config {config:?} options {options:?}"
            );

            let update = tilt_report(raw).decode(&config, &options);
            assert_eq!(
                update.tilt.map(|t| u16::from(t.value())),
                Some(expected),
                "tilt raw {raw} with config {config:?} options {options:?}"
            );
        }
    }
}

#[test]
fn state_threshold_ignores_user_inversion() {
    for (config, options) in flag_combinations() {
        let closed_at = if config.cover_inverted { 0 } else { 100 };
        for raw in 0..=100u16 {
            let expected = if raw == closed_at {
                CoverState::Close
            } else {
                CoverState::Open
            };
            let update = lift_report(raw).decode(&config, &options);
            assert_eq!(
                update.state,
                Some(expected),
                "raw {raw} with config {config:?} options {options:?}"
            );
        }
    }
}

#[test]
fn state_follows_configured_source_only() {
    let from_lift = DeviceConfig::new();
    let from_tilt = DeviceConfig::new().with_state_from_tilt(true);
    let options = UserOptions::new();

    for raw in [0u16, 50, 100] {
        assert!(lift_report(raw).decode(&from_lift, &options).state.is_some());
        assert!(tilt_report(raw).decode(&from_lift, &options).state.is_none());

        assert!(lift_report(raw).decode(&from_tilt, &options).state.is_none());
        assert!(tilt_report(raw).decode(&from_tilt, &options).state.is_some());
    }
}

#[test]
fn out_of_range_positions_decode_to_nothing() {
    for (config, options) in flag_combinations() {
        for raw in [101u16, 199, 255, 256, 1000, 65535] {
            let update = lift_report(raw).decode(&config, &options);
            assert!(update.is_empty(), "lift raw {raw}");

            let update = tilt_report(raw).decode(&config, &options);
            assert!(update.is_empty(), "tilt raw {raw}");
        }
    }
}

#[test]
fn encode_decode_mirror_holds_for_all_positions() {
    for (config, options) in flag_combinations() {
        for target in 0..=100u8 {
            let position = Percentage::new(target).unwrap();
            let frame = CoverCommand::GoToPosition(position).encode(&config, &options);
            assert_eq!(frame.payload.len(), 1);

            // The device settles at the commanded raw value and reports it.
            let update = lift_report(u16::from(frame.payload[0])).decode(&config, &options);
            assert_eq!(
                update.position,
                Some(position),
                "target {target} with config {config:?} options {options:?}"
            );
        }
    }
}

#[test]
fn tilt_commands_mirror_too() {
    for (config, options) in flag_combinations() {
        for target in [0u8, 33, 67, 100] {
            let position = Percentage::new(target).unwrap();
            let frame = CoverCommand::GoToTilt(position).encode(&config, &options);

            let update = tilt_report(u16::from(frame.payload[0])).decode(&config, &options);
            assert_eq!(update.tilt, Some(position));
        }
    }
}

#[test]
fn mode_bits_map_to_flags() {
    for bits in 0..16u8 {
        let report: WindowCoveringReport =
            serde_json::from_str(&format!(r#"{{"windowCoveringMode":{bits}}}"#)).unwrap();
        let update = report.decode(&DeviceConfig::new(), &UserOptions::new());
        let mode = update.cover_mode.expect("mode present");

        assert_eq!(mode.reversed(), bits & 0b0001 != 0);
        assert_eq!(mode.calibration(), bits & 0b0010 != 0);
        assert_eq!(mode.maintenance(), bits & 0b0100 != 0);
        assert_eq!(mode.led(), bits & 0b1000 != 0);
    }
}

#[test]
fn battery_percentage_halves_across_range() {
    let config = BatteryConfig::new();
    let cases = [
        (0u16, 0.0f32),
        (1, 0.5),
        (100, 50.0),
        (101, 50.5),
        (200, 100.0),
        (254, 127.0),
    ];
    for (raw, expected) in cases {
        let report: PowerConfigReport =
            serde_json::from_str(&format!(r#"{{"batteryPercentageRemaining":{raw}}}"#)).unwrap();
        let update = report.decode(&config);
        assert_eq!(update.battery, Some(expected), "raw {raw}");
    }
}

#[test]
fn battery_raw_percentage_skips_division() {
    let config = BatteryConfig::new().with_percentage_raw(true);
    let report: PowerConfigReport =
        serde_json::from_str(r#"{"batteryPercentageRemaining":95}"#).unwrap();
    assert_eq!(report.decode(&config).battery, Some(95.0));
}

#[test]
fn battery_voltage_scales_across_range() {
    let config = BatteryConfig::new();
    for raw in [0u16, 24, 30, 33, 254] {
        let report: PowerConfigReport =
            serde_json::from_str(&format!(r#"{{"batteryVoltage":{raw}}}"#)).unwrap();
        assert_eq!(report.decode(&config).voltage, Some(raw * 100), "raw {raw}");
    }
}

#[test]
fn battery_invalid_sentinels_decode_to_nothing() {
    let config = BatteryConfig::new();
    for raw in [255u16, 256, 1000] {
        let report: PowerConfigReport = serde_json::from_str(&format!(
            r#"{{"batteryPercentageRemaining":{raw},"batteryVoltage":{raw}}}"#
        ))
        .unwrap();
        assert!(report.decode(&config).is_empty(), "raw {raw}");
    }
}

#[test]
fn junk_report_fields_never_fail_the_report() {
    let payloads = [
        r#"{"currentPositionLiftPercentage":"jammed"}"#,
        r#"{"currentPositionLiftPercentage":null}"#,
        r#"{"currentPositionLiftPercentage":-20}"#,
        r#"{"currentPositionLiftPercentage":49.5}"#,
        r#"{"currentPositionLiftPercentage":{"value":3}}"#,
        r#"{"currentPositionLiftPercentage":[50]}"#,
    ];
    for payload in payloads {
        let report: WindowCoveringReport =
            serde_json::from_str(payload).expect("junk tolerated");
        let update = report.decode(&DeviceConfig::new(), &UserOptions::new());
        assert!(update.is_empty(), "payload: {payload}");
    }
}

#[test]
fn mixed_junk_and_valid_fields_keep_the_valid_ones() {
    let report: WindowCoveringReport = serde_json::from_str(
        r#"{"currentPositionLiftPercentage":"jammed","currentPositionTiltPercentage":30,"windowCoveringMode":"odd"}"#,
    )
    .unwrap();
    let update = report.decode(&DeviceConfig::new(), &UserOptions::new());

    assert!(update.position.is_none());
    assert!(update.cover_mode.is_none());
    assert_eq!(update.tilt.map(|t| t.value()), Some(70));
}
