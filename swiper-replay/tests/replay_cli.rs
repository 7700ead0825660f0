//! Replay Integration Tests
//!
//! Loads scripts from disk and checks the frames produced.

use std::io::Write;

use swiper_replay::{replay, Script};
use tempfile::NamedTempFile;

/// Write `json` to a temporary script file.
fn script_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write script");
    file
}

#[test]
fn test_script_from_file_replays_every_step() {
    let file = script_file(
        r#"{
            "container_width": 300,
            "steps": [
                {"action": "down", "x": 500},
                {"action": "move", "x": 300},
                {"action": "up"},
                {"action": "next"},
                {"action": "prev"},
                {"action": "go_to", "index": 99}
            ]
        }"#,
    );

    let script = Script::from_path(file.path()).expect("load script");
    let frames = replay(script, None).expect("replay");

    assert_eq!(frames.len(), 6);
    assert!(frames[0].view.is_swiping);
    assert_eq!(frames[1].view.offset_x, -200.0);
    assert_eq!(frames[2].view.offset_x, -300.0);
    assert_eq!(frames[2].view.active_index, 1);
    assert_eq!(frames[3].view.active_index, 2);
    assert_eq!(frames[4].view.active_index, 1);
    assert_eq!(frames[5].view.active_index, 9);
    assert!(frames[5].view.next_disabled);
}

#[test]
fn test_missing_file_is_reported() {
    let err = Script::from_path(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read script"));
}

#[test]
fn test_malformed_script_is_reported() {
    let file = script_file(r#"{"container_width": 300}"#);
    let err = Script::from_path(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid replay script"));
}

#[test]
fn test_frames_serialize_flat() {
    let script = Script::from_json(
        r#"{"container_width":300,"slides":[{"content":"a"},{"content":"b"}],"steps":[{"action":"next"}]}"#,
    )
    .expect("valid");
    let frames = replay(script, None).expect("replay");

    let json: serde_json::Value = serde_json::to_value(&frames[0]).expect("serialize");
    assert_eq!(json["step"], 0);
    assert_eq!(json["action"]["action"], "next");
    assert_eq!(json["offset_x"], -300.0);
    assert_eq!(json["next_disabled"], true);
}

#[test]
fn test_reader_input_matches_file_input() {
    let json = r#"{"container_width":250,"steps":[{"action":"go_to","index":3}]}"#;
    let from_reader = Script::from_reader(json.as_bytes()).expect("reader");
    let from_str = Script::from_json(json).expect("str");
    assert_eq!(from_reader, from_str);
}
