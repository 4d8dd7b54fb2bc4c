use std::path::PathBuf;
use std::process::Command;

fn get_cli_binary() -> PathBuf {
    // Try to find the built binary
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("projectile-cli");

    if !path.exists() {
        // Try release build
        path.pop();
        path.pop();
        path.push("release");
        path.push("projectile-cli");
    }

    path
}

#[test]
fn test_cli_path_basic() {
    let output = Command::new(get_cli_binary())
        .args(["path", "--num-pts", "5", "--angle", "45", "--velocity", "100"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("TRAJECTORY") || stdout.contains("Time"),
        "Should contain trajectory output"
    );
}

#[test]
fn test_cli_path_json_round_trips() {
    let output = Command::new(get_cli_binary())
        .args([
            "path",
            "--num-pts",
            "7",
            "--angle",
            "105",
            "--velocity",
            "100",
            "--output",
            "json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(parsed["x"].as_array().map(|a| a.len()), Some(7));
    assert_eq!(parsed["y"].as_array().map(|a| a.len()), Some(7));
    assert_eq!(parsed["times"][0].as_f64(), Some(0.0));
}

#[test]
fn test_cli_compare_passes_and_writes_dumps() {
    let dir = std::env::temp_dir();
    let fixed_dump = dir.join("projectile_cli_test_fixed.json");
    let reference_dump = dir.join("projectile_cli_test_reference.json");

    let output = Command::new(get_cli_binary())
        .args([
            "compare",
            "--num-pts",
            "10",
            "--angle",
            "105",
            "--velocity",
            "100",
            "--fixed-dump",
        ])
        .arg(&fixed_dump)
        .arg("--reference-dump")
        .arg(&reference_dump)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PASS"), "comparison should pass");

    let fixed: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(&fixed_dump).expect("fixed dump should exist"),
    )
    .expect("fixed dump should be valid JSON");
    assert_eq!(fixed["x"].as_array().map(|a| a.len()), Some(10));
    // raw residues are decimal strings
    assert!(fixed["x"][1].is_string());

    let reference: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(&reference_dump).expect("reference dump should exist"),
    )
    .expect("reference dump should be valid JSON");
    assert_eq!(reference["y"].as_array().map(|a| a.len()), Some(10));

    let _ = std::fs::remove_file(&fixed_dump);
    let _ = std::fs::remove_file(&reference_dump);
}

#[test]
fn test_cli_rejects_out_of_domain_angle() {
    let output = Command::new(get_cli_binary())
        .args(["path", "--angle", "181"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid input"),
        "stderr should name the invalid input, got: {}",
        stderr
    );
}

#[test]
fn test_cli_info() {
    let output = Command::new(get_cli_binary())
        .arg("info")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PROJECTILE ENGINE"));
}
