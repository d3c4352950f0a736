//! Content domain: tests for motion file parsing and checks.

use std::path::Path;

use super::{
    MOTION_SCHEMA_VERSION, MotionFile, load_motion_file, parse_motion_json, parse_motion_ron,
};
use crate::movement::{JumpBufferPolicy, MotionConfig};

#[test]
fn test_shipped_motion_file_parses() {
    let contents = include_str!("../../assets/data/motion.ron");
    let file = parse_motion_ron("motion.ron", contents).expect("shipped tuning is valid");

    assert_eq!(file.schema_version, MOTION_SCHEMA_VERSION);
    assert_eq!(file.fixed_hz, 50.0);
    assert_eq!(file.player.jump_force, 880.0);
    assert_eq!(file.player.max_fall_speed, -800.0);
    assert_eq!(file.player.jump_buffer, JumpBufferPolicy::Windowed);
}

#[test]
fn test_partial_player_takes_defaults() {
    let contents = r#"(
        schema_version: 1,
        player: (
            move_speed: 6.0,
            jump_buffer: NextStep,
        ),
    )"#;
    let file = parse_motion_ron("partial.ron", contents).expect("partial tuning parses");

    let defaults = MotionConfig::default();
    assert_eq!(file.fixed_hz, 50.0);
    assert_eq!(file.player.move_speed, 6.0);
    assert_eq!(file.player.jump_buffer, JumpBufferPolicy::NextStep);
    assert_eq!(file.player.jump_force, defaults.jump_force);
    assert_eq!(file.player.max_jump_count, defaults.max_jump_count);
}

#[test]
fn test_missing_player_uses_default_tuning() {
    let file = parse_motion_ron("bare.ron", "(schema_version: 1)").expect("bare file parses");
    assert_eq!(file.player, MotionConfig::default());
}

#[test]
fn test_json_motion_file_parses() {
    let contents = r#"{
        "schema_version": 1,
        "fixed_hz": 60.0,
        "player": { "max_jump_count": 3, "double_jump_unlocked": false }
    }"#;
    let file = parse_motion_json("motion.json", contents).expect("json tuning parses");

    assert_eq!(file.fixed_hz, 60.0);
    assert_eq!(file.player.max_jump_count, 3);
    assert!(!file.player.double_jump_unlocked);
}

#[test]
fn test_rejects_unknown_schema_version() {
    let err = parse_motion_ron("future.ron", "(schema_version: 2)").unwrap_err();
    assert_eq!(err.file, "future.ron");
    assert!(err.message.contains("schema_version 2"));
}

#[test]
fn test_rejects_bad_fixed_hz() {
    let err = parse_motion_ron("rate.ron", "(schema_version: 1, fixed_hz: 0.0)").unwrap_err();
    assert!(err.message.contains("fixed_hz"));

    let err = parse_motion_json("rate.json", r#"{"schema_version": 1, "fixed_hz": -5.0}"#)
        .unwrap_err();
    assert!(err.message.contains("fixed_hz"));
}

#[test]
fn test_rejects_invalid_player_tuning() {
    let contents = "(schema_version: 1, player: (max_fall_speed: 20.0))";
    let err = parse_motion_ron("upward.ron", contents).unwrap_err();
    assert!(err.message.starts_with("Invalid player tuning"));
    assert!(err.message.contains("max_fall_speed"));

    let contents = r#"{"schema_version": 1, "player": {"max_jump_count": 0}}"#;
    let err = parse_motion_json("zero.json", contents).unwrap_err();
    assert!(err.message.contains("max_jump_count"));
}

#[test]
fn test_reports_parse_errors() {
    let err = parse_motion_ron("broken.ron", "(schema_version: ").unwrap_err();
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_motion_file(Path::new("assets/data/does_not_exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_default_motion_file_is_current_schema() {
    let file = MotionFile::default();
    assert_eq!(file.schema_version, MOTION_SCHEMA_VERSION);
    assert_eq!(file.fixed_hz, 50.0);
    assert!(file.player.validate().is_ok());
}
