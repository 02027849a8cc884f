//! CLI tests for the patrol binary.
//!
//! Spawns the built binary against tempfile-backed maps and verifies
//! printed answers and exit codes for valid, malformed, and missing input.

use std::process::Command;

use patrol::exit_codes;
use patrol::test_support::{REFERENCE_MAP, write_map};

#[test]
fn visited_prints_the_part_one_answer() {
    let (_dir, path) = write_map(REFERENCE_MAP).expect("write map");

    let output = Command::new(env!("CARGO_BIN_EXE_patrol"))
        .arg("visited")
        .arg(&path)
        .output()
        .expect("patrol visited");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8(output.stdout).expect("utf8"), "41\n");
}

#[test]
fn obstructions_prints_the_part_two_answer() {
    let (_dir, path) = write_map(REFERENCE_MAP).expect("write map");

    let output = Command::new(env!("CARGO_BIN_EXE_patrol"))
        .arg("obstructions")
        .arg(&path)
        .output()
        .expect("patrol obstructions");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8(output.stdout).expect("utf8"), "6\n");
}

#[test]
fn solve_prints_both_answers() {
    let (_dir, path) = write_map(REFERENCE_MAP).expect("write map");

    let output = Command::new(env!("CARGO_BIN_EXE_patrol"))
        .arg("solve")
        .arg(&path)
        .output()
        .expect("patrol solve");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        "visited: 41\nobstructions: 6\n"
    );
}

#[test]
fn solve_json_emits_a_report_object() {
    let (_dir, path) = write_map(REFERENCE_MAP).expect("write map");

    let output = Command::new(env!("CARGO_BIN_EXE_patrol"))
        .arg("solve")
        .arg(&path)
        .arg("--json")
        .output()
        .expect("patrol solve --json");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        "{\"visited\":41,\"obstructions\":6}\n"
    );
}

#[test]
fn ragged_map_exits_with_the_malformed_code() {
    let (_dir, path) = write_map(&["..^.", "..."]).expect("write map");

    let status = Command::new(env!("CARGO_BIN_EXE_patrol"))
        .arg("solve")
        .arg(&path)
        .status()
        .expect("patrol solve");

    assert_eq!(status.code(), Some(exit_codes::MALFORMED));
}

#[test]
fn guardless_map_exits_with_the_malformed_code() {
    let (_dir, path) = write_map(&["....", "...."]).expect("write map");

    let status = Command::new(env!("CARGO_BIN_EXE_patrol"))
        .arg("visited")
        .arg(&path)
        .status()
        .expect("patrol visited");

    assert_eq!(status.code(), Some(exit_codes::MALFORMED));
}

#[test]
fn missing_input_exits_with_the_invalid_code() {
    let status = Command::new(env!("CARGO_BIN_EXE_patrol"))
        .arg("visited")
        .arg("no/such/map.txt")
        .status()
        .expect("patrol visited");

    assert_eq!(status.code(), Some(exit_codes::INVALID));
}
