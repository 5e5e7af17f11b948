use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vitality"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_compile_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let config_path = temp_path.join("deck.yml");
    let config_content = "title: Demo\nslides:\n  - Hello\n  - title: Welcome\n    subtitle: [One, Two]\n";
    fs::write(&config_path, config_content).expect("Failed to write config file");

    let output_path = temp_path.join("deck.json");

    let output = run_command(&[
        config_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists(), "Output file was not created");
    assert!(
        String::from_utf8_lossy(&output.stdout).contains("Presentation generated at"),
        "Missing success message"
    );

    let json_content = fs::read_to_string(&output_path).expect("Failed to read output file");
    let model: serde_json::Value = serde_json::from_str(&json_content).expect("Invalid JSON output");
    assert_eq!(model["title"], "Demo");
    assert_eq!(model["slides"][0]["layout"], "section");
    assert_eq!(model["slides"][1]["subtitle"]["content"][1], "Two");
}

#[test]
fn test_compile_command_reports_errors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let config_path = temp_path.join("deck.yml");
    fs::write(&config_path, "slides:\n  - type: title\n    title: Lonely\n")
        .expect("Failed to write config file");
    let output_path = temp_path.join("deck.json");

    let output = run_command(&[
        config_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);

    assert!(!output.status.success(), "Command should fail");
    assert!(!output_path.exists(), "No output should be written");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("missing required field `subtitle`"),
        "Unexpected error output: {}",
        stderr
    );
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("deck.json");

    let output = run_command(&[
        temp_dir.path().join("absent.yml").to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);

    assert!(!output.status.success(), "Command should fail");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Path not found"));
}
