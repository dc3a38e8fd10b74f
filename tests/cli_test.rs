// tests/cli_test.rs
use std::process::Command;

#[test]
fn test_affected_base_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "affected-base", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("affected-base"));
    assert!(stdout.contains("Resolve the base and head commits"));
}

#[test]
fn test_affected_base_version() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "affected-base", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("affected-base"));
}

#[test]
fn test_malformed_ref_fails_without_writing_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("github_output");
    std::fs::write(&output_file, "").unwrap();

    let output = Command::new("cargo")
        .args(["run", "--bin", "affected-base"])
        .env("GITHUB_RUN_ID", "1")
        .env("GITHUB_REPOSITORY", "acme/widgets")
        .env("GITHUB_REF", "not-a-ref")
        .env("GITHUB_OUTPUT", &output_file)
        .env("GITHUB_ACTIONS", "true")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains("Invalid current branch ref format: not-a-ref"),
        "expected failure annotation, got: {}",
        stdout
    );

    let outputs = std::fs::read_to_string(&output_file).unwrap();
    assert!(outputs.is_empty(), "no outputs may be written on failure");
}

#[test]
fn test_missing_ref_names_expected_source() {
    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("github_output");

    let output = Command::new("cargo")
        .args(["run", "--bin", "affected-base"])
        .env("GITHUB_RUN_ID", "1")
        .env("GITHUB_REPOSITORY", "acme/widgets")
        .env_remove("GITHUB_REF")
        .env("GITHUB_OUTPUT", &output_file)
        .env("GITHUB_ACTIONS", "true")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("env.GITHUB_REF"), "got: {}", stdout);
}
