use std::path::PathBuf;
use std::process::Command;

fn get_cli_binary() -> PathBuf {
    // Try to find the built binary
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("rhumb-cli");

    if !path.exists() {
        // Try release build
        path.pop();
        path.pop();
        path.push("release");
        path.push("rhumb-cli");
    }

    path
}

#[test]
fn test_cli_distance_basic() {
    let output = Command::new(get_cli_binary())
        .args([
            "distance",
            "--lat-a", "25.7976636",
            "--lon-a", "-80.1163316",
            "--lat-b", "38.7134232",
            "--lon-b", "-9.1498182",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("distance"), "Should label the quantity");
    assert!(stdout.contains("km"), "Should report kilometers");
}

#[test]
fn test_cli_midpoint_json() {
    let output = Command::new(get_cli_binary())
        .args([
            "midpoint",
            "--lat-a", "25.7976636",
            "--lon-a", "-80.1163316",
            "--lat-b", "38.7134232",
            "--lon-b", "-9.1498182",
            "--output", "json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"lat\""), "JSON output should have lat field");
    assert!(stdout.contains("\"lon\""), "JSON output should have lon field");
}

#[test]
fn test_cli_interpolate_csv_row_count() {
    let output = Command::new(get_cli_binary())
        .args([
            "interpolate",
            "--lat-a", "25.7976636",
            "--lon-a", "-80.1163316",
            "--lat-b", "38.7134232",
            "--lon-b", "-9.1498182",
            "--points", "7",
            "--output", "csv",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Header plus 7 waypoints
    assert_eq!(stdout.lines().count(), 8, "stdout was: {}", stdout);
}

#[test]
fn test_cli_interpolate_rejects_bad_count() {
    let output = Command::new(get_cli_binary())
        .args([
            "interpolate",
            "--lat-a", "0.0",
            "--lon-a", "0.0",
            "--lat-b", "10.0",
            "--lon-b", "10.0",
            "--points", "4",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "4 waypoints must be rejected");
    // The error Result bubbles out of main and is printed via Debug
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InvalidArgument"), "stderr was: {}", stderr);
}

#[test]
fn test_cli_info() {
    let output = Command::new(get_cli_binary())
        .args(["info"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RHUMBLINE ENGINE"), "Should print the banner");
}
