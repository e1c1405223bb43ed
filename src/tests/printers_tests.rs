// src/tests/printers_tests.rs

#![allow(non_snake_case)]

use crate::printer::printers::{
    json_to_string_pretty,
    print_colored_stdout,
    write_json,
    Color,
    ColorChoice,
    JsonSink,
    JSON_SINK_STDOUT,
};
use crate::reducers::categorizer::categorize_events;
use crate::tests::common::{parse_line_ok, NTF_Path, LINE_TCOM};

use std::fs::read_to_string;

use ::tempfile::NamedTempFile;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_JsonSink_from_path() {
    assert_eq!(JsonSink::from_path(JSON_SINK_STDOUT), JsonSink::Stdout);
    assert_eq!(
        JsonSink::from_path("merged_transfers.json"),
        JsonSink::File("merged_transfers.json".to_string()),
    );
}

#[test]
fn test_write_json_events_array() {
    let events = [parse_line_ok(LINE_TCOM)];
    let mut buffer: Vec<u8> = Vec::new();
    write_json(&mut buffer, &events[..]).unwrap();
    assert!(buffer.ends_with(b"\n"));
    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["type"], "TCOM");
}

#[test]
fn test_JsonSink_write_file() {
    let ntf = NamedTempFile::new().unwrap();
    let path = NTF_Path(&ntf);
    let events = [parse_line_ok(LINE_TCOM)];
    let categorized = categorize_events(&events);
    JsonSink::from_path(path.as_str())
        .write(&categorized)
        .unwrap();
    let written = read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["transfer_event_count"], 1);
    assert_eq!(value["agents"], serde_json::json!(["AGT1", "AGT2"]));
}

#[test]
fn test_JsonSink_write_file_bad_path() {
    let events = [parse_line_ok(LINE_TCOM)];
    assert!(JsonSink::from_path("/nonexistent/dir/out.json")
        .write(&events[..])
        .is_err());
}

#[test]
fn test_json_to_string_pretty() {
    let events = [parse_line_ok(LINE_TCOM)];
    let json = json_to_string_pretty(&events[..]);
    assert!(json.starts_with('['));
    assert!(json.contains("\"type\": \"TCOM\""));
}

#[test]
fn test_print_colored_stdout() {
    // no panic, no error; color disabled so test output stays clean
    print_colored_stdout(Color::Green, Some(ColorChoice::Never), b"test_print_colored_stdout\n")
        .unwrap();
}
