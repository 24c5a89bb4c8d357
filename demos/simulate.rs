// SPDX-License-Identifier: MPL-2.0

//! Test program: Run simulated traffic through the built-in shade definition.
//!
//! Walks through what a bridge does with the `zbShade` model: resolve the
//! announced model, configure attribute reporting, decode incoming reports
//! into publishable state, and encode outgoing cover commands. Pass a
//! cluster name and a JSON payload to decode a captured report instead.
//!
//! # Usage
//!
//! ```bash
//! # Scripted walkthrough
//! cargo run --example simulate
//!
//! # Decode a captured payload
//! cargo run --example simulate -- closuresWindowCovering '{"currentPositionTiltPercentage":25}'
//!
//! # Same payload with the invert_cover user option enabled
//! cargo run --example simulate -- --invert closuresWindowCovering '{"currentPositionTiltPercentage":25}'
//! ```

use std::env;

use zbcover_lib::{
    AttributeReport, CoverCommand, Definition, Percentage, Registry, UserOptions,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let options = if args.first().is_some_and(|arg| arg == "--invert") {
        args.remove(0);
        UserOptions::inverted()
    } else {
        UserOptions::default()
    };

    let registry = Registry::with_builtin();
    let Some(definition) = registry.find("zbShade") else {
        return Err("built-in zbShade definition missing".into());
    };

    match args.as_slice() {
        [] => walkthrough(definition, &options),
        [cluster, payload] => decode_one(definition, &options, cluster, payload),
        _ => {
            eprintln!("Usage: simulate [--invert] [<cluster> <json_payload>]");
            std::process::exit(1);
        }
    }
}

/// Decodes a single payload given on the command line.
fn decode_one(
    definition: &Definition,
    options: &UserOptions,
    cluster: &str,
    payload: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = AttributeReport::from_cluster_name(cluster, payload)?;
    let update = definition.decode(&report, options);

    if update.is_empty() {
        println!("(nothing to publish)");
    } else {
        println!("{}", serde_json::to_string_pretty(&update)?);
    }

    Ok(())
}

/// Scripted walkthrough over the built-in definition.
fn walkthrough(
    definition: &Definition,
    options: &UserOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Definition ===");
    println!(
        "{} by {}: {}",
        definition.model(),
        definition.vendor(),
        definition.description()
    );
    println!();

    println!("=== Reporting configured on join ===");
    for entry in definition.reporting() {
        println!(
            "cluster 0x{:04x} attribute 0x{:04x}: min {}s, max {}s, change {}",
            entry.cluster, entry.attribute, entry.min_interval, entry.max_interval, entry.change
        );
    }
    println!();

    println!("=== Incoming reports ===");
    let samples = [
        (
            "closuresWindowCovering",
            r#"{"currentPositionTiltPercentage":0}"#,
        ),
        (
            "closuresWindowCovering",
            r#"{"currentPositionTiltPercentage":100}"#,
        ),
        ("closuresWindowCovering", r#"{"windowCoveringMode":3}"#),
        (
            "genPowerCfg",
            r#"{"batteryPercentageRemaining":167,"batteryVoltage":29}"#,
        ),
        // 255 is the "position unknown" sentinel; nothing gets published.
        (
            "closuresWindowCovering",
            r#"{"currentPositionTiltPercentage":255}"#,
        ),
    ];
    for (cluster, payload) in samples {
        let report = AttributeReport::from_cluster_name(cluster, payload)?;
        let update = definition.decode(&report, options);
        println!("{cluster} {payload}");
        if update.is_empty() {
            println!("  -> (nothing to publish)");
        } else {
            println!("  -> {}", serde_json::to_string(&update)?);
        }
    }
    println!();

    println!("=== Outgoing commands ===");
    let commands = [
        CoverCommand::Open,
        CoverCommand::Close,
        CoverCommand::Stop,
        CoverCommand::GoToTilt(Percentage::new(80)?),
    ];
    for command in commands {
        let frame = definition.command(&command, options)?;
        println!(
            "{command}: cluster 0x{:04x} command 0x{:02x} payload {:?}",
            frame.cluster, frame.command, frame.payload
        );
    }

    // zbShade has no lift control, so positional lift commands are refused.
    let lift = CoverCommand::GoToPosition(Percentage::new(50)?);
    match definition.command(&lift, options) {
        Ok(frame) => println!("{lift}: cluster 0x{:04x}", frame.cluster),
        Err(error) => println!("{lift}: refused ({error})"),
    }

    Ok(())
}
