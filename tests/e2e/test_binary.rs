//! Integration tests for the heapsort-viz binary.
//!
//! These tests run the compiled binary and check its stdout, stderr and exit code.

use std::path::PathBuf;
use std::process::{Command, Output};

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_heapsort-viz"))
}

/// Run the binary with the given args and return the raw output.
fn run(args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run binary")
}

fn stdout_of(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

#[test]
fn test_plays_every_step_then_prints_tree() {
    let out = stdout_of(&["--ascii", "5", "1", "4", "2", "8"]);
    assert!(out.starts_with("Step 1 of "));
    assert!(out.contains("Initial array (heap size 5)"));
    assert!(out.contains("Max heap built (heap size 5)"));
    assert!(out.contains("Sorting complete! (heap size 0)"));
    // Final tree: root 1 with children 2 and 4.
    let tail: Vec<&str> = out.lines().rev().take(5).collect();
    assert_eq!(tail.last().unwrap().trim(), "1");
}

#[test]
fn test_step_badges_count_up() {
    let out = stdout_of(&["--ascii", "1", "2"]);
    let badges: Vec<&str> = out.lines().filter(|l| l.starts_with("Step ")).collect();
    assert_eq!(badges.len(), 8);
    assert_eq!(badges[0], "Step 1 of 8");
    assert_eq!(badges[7], "Step 8 of 8");
}

#[test]
fn test_quiet_prints_only_tree() {
    let out = stdout_of(&["--quiet", "--ascii", "3", "1", "2"]);
    assert_eq!(out, "  1\n+-+-+\n2   3\n");
}

#[test]
fn test_input_list_and_negative_numbers() {
    let out = stdout_of(&["-q", "-a", "--input=-1, 2.5; 0"]);
    assert_eq!(out, "   -1\n +--+--+\n 0    2.5\n");
}

#[test]
fn test_json_trace() {
    let out = stdout_of(&["--json", "1", "2"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    let steps = parsed.as_array().expect("array of steps");
    assert_eq!(steps.len(), 8);
    assert_eq!(steps[0]["description"], "Initial array");
    assert_eq!(steps[1]["comparing"], serde_json::json!([0, 1]));
    assert_eq!(steps[7]["sorted"], serde_json::json!([0, 1]));
}

#[test]
fn test_writes_svg() {
    let path = std::env::temp_dir().join(format!("heapsort-viz-{}.svg", std::process::id()));
    let path_str = path.to_string_lossy().to_string();
    stdout_of(&["-q", "--svg", &path_str, "4", "3", "2", "1"]);
    let svg = std::fs::read_to_string(&path).expect("svg written");
    std::fs::remove_file(&path).ok();
    assert_eq!(svg.matches("<circle").count(), 4);
    assert_eq!(svg.matches("<line").count(), 3);
}

#[test]
fn test_rejects_invalid_number() {
    let output = run(&["5", "abc"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: Please enter valid numbers in all fields"));
}

#[test]
fn test_rejects_missing_numbers() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: Please enter a valid count of numbers (greater than 0)"));
}

#[test]
fn test_rejects_too_many_numbers() {
    let args: Vec<String> = (0..21).map(|i| i.to_string()).collect();
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = run(&refs);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("20 or less"));
}
