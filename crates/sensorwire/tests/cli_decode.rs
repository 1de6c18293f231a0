#![cfg(feature = "cli")]

use std::process::{Command, Output};

use bytes::BytesMut;
use sensorwire_frame::encode_frames;
use sensorwire_layout::{encode_reading, Layout, SensorReading, Value};

fn sensorwire(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sensorwire"))
        .args(args)
        .output()
        .expect("sensorwire binary should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn decode_hex_reports_values() {
    let hex = hex::encode(7i32.to_ne_bytes());
    let output = sensorwire(&["decode", "--hex", &hex, "--layout", "i", "--format", "json"]);

    let json = stdout_json(&output);
    assert_eq!(json["layout"], "i");
    assert_eq!(json["values"], serde_json::json!([7]));
}

#[test]
fn decode_framed_capture_roundtrips() {
    let layout = Layout::parse("ffffii").expect("layout should parse");
    let reading = SensorReading::new(vec![
        Value::F32(1.5),
        Value::F32(-0.25),
        Value::F32(0.0),
        Value::F32(4.0),
        Value::I32(800),
        Value::I32(-12),
    ]);
    let payload = encode_reading(&reading, &layout).expect("reading should encode");
    let mut wire = BytesMut::new();
    encode_frames(&payload, &mut wire).expect("payload should frame");

    let output = sensorwire(&[
        "decode",
        "--hex",
        &hex::encode(&wire),
        "--layout",
        "ffffii",
        "--framed",
        "--format",
        "json",
    ]);

    let json = stdout_json(&output);
    assert_eq!(
        json["values"],
        serde_json::json!([1.5, -0.25, 0.0, 4.0, 800, -12])
    );
}

#[test]
fn length_mismatch_exits_data_invalid() {
    let output = sensorwire(&["decode", "--hex", "00", "--layout", "i"]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("decode failed"), "stderr: {stderr}");
    // Diagnostics carry the offending bytes.
    assert!(stderr.contains("00"), "stderr: {stderr}");
}

#[test]
fn bad_layout_spec_is_a_usage_error() {
    let output = sensorwire(&["decode", "--hex", "00", "--layout", "fq"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn layout_command_describes_fields() {
    let output = sensorwire(&["layout", "xfi", "--format", "json"]);

    let json = stdout_json(&output);
    assert_eq!(json["size"], 9);
    assert_eq!(json["values"], 2);
    assert_eq!(json["fields"][0]["type"], "pad");
    assert_eq!(json["fields"][1]["offset"], 1);
    assert_eq!(json["fields"][2]["offset"], 5);
}

#[test]
fn version_prints_package_version() {
    let output = sensorwire(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
