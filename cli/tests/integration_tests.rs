use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_argspec")
}

/// Schema with a `-v/--verbose` flag and a value-taking `-f/--file`.
fn write_sample_schema(dir: &Path) -> PathBuf {
    let json = serde_json::json!({
        "schema_version": "1.0.0",
        "command": "demo",
        "options": [
            {"short": "-v", "long": "--verbose", "takes_value": false},
            {"short": "-f", "long": "--file", "takes_value": true}
        ],
        "groups": []
    });
    let path = dir.join("schema.json");
    fs::write(&path, serde_json::to_string_pretty(&json).unwrap())
        .expect("failed to write schema file");
    path
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_reports_matches_as_json() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let schema = write_sample_schema(dir.path());

    let out = Command::new(bin())
        .args([
            "parse",
            "--schema",
            schema.to_str().unwrap(),
            "--",
            "-v",
            "--file",
            "out.txt",
            "rest",
        ])
        .output()
        .expect("failed to run argspec");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "parse should succeed. stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("\"long\": \"--file\""),
        "matched option should appear in JSON. stdout: {stdout}"
    );
    assert!(stdout.contains("\"out.txt\""));
    assert!(stdout.contains("\"rest\""));
}

#[test]
fn parse_unrecognized_option_exits_nonzero() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let schema = write_sample_schema(dir.path());

    let out = Command::new(bin())
        .args(["parse", "--schema", schema.to_str().unwrap(), "--", "-x"])
        .output()
        .expect("failed to run argspec");

    assert!(!out.status.success(), "unknown option should fail");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Unrecognized option: -x"),
        "error text should name the token verbatim. stderr: {stderr}"
    );
}

#[test]
fn parse_missing_required_option_exits_nonzero() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let json = serde_json::json!({
        "options": [
            {"long": "--output", "takes_value": true, "required": true}
        ]
    });
    let schema = dir.path().join("required.json");
    fs::write(&schema, serde_json::to_string_pretty(&json).unwrap())
        .expect("failed to write schema file");

    let out = Command::new(bin())
        .args(["parse", "--schema", schema.to_str().unwrap()])
        .output()
        .expect("failed to run argspec");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Missing required option: --output"),
        "stderr: {stderr}"
    );
}

#[test]
fn parse_applies_defaults_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let schema = write_sample_schema(dir.path());
    let defaults = dir.path().join("defaults.json");
    fs::write(&defaults, r#"{"--file": "default.txt"}"#).expect("failed to write defaults file");

    let out = Command::new(bin())
        .args([
            "parse",
            "--schema",
            schema.to_str().unwrap(),
            "--defaults",
            defaults.to_str().unwrap(),
            "--",
            "-v",
        ])
        .output()
        .expect("failed to run argspec");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "parse should succeed. stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("default.txt"),
        "default value should fill the absent option. stdout: {stdout}"
    );
}

#[test]
fn parse_table_format_lists_leftovers() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let schema = write_sample_schema(dir.path());

    let out = Command::new(bin())
        .args([
            "parse",
            "--schema",
            schema.to_str().unwrap(),
            "--format",
            "table",
            "--",
            "-v",
            "positional",
        ])
        .output()
        .expect("failed to run argspec");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Matched options:"), "stdout: {stdout}");
    assert!(stdout.contains("--verbose"));
    assert!(stdout.contains("Leftovers:"));
    assert!(stdout.contains("positional"));
}

#[test]
fn parse_stop_at_first_positional_turns_unknowns_into_leftovers() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let schema = write_sample_schema(dir.path());

    let out = Command::new(bin())
        .args([
            "parse",
            "--schema",
            schema.to_str().unwrap(),
            "--stop-at-first-positional",
            "--format",
            "table",
            "--",
            "build",
            "-x",
        ])
        .output()
        .expect("failed to run argspec");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "halted scan should succeed. stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("build"));
    assert!(stdout.contains("-x"), "later tokens stay verbatim. stdout: {stdout}");
}

#[test]
fn parse_reads_yaml_schema() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let yaml = r#"command: demo
options:
  - short: "-v"
    long: "--verbose"
  - long: "--file"
    takes_value: true
"#;
    let schema = dir.path().join("schema.yaml");
    fs::write(&schema, yaml).expect("failed to write schema file");

    let out = Command::new(bin())
        .args(["parse", "--schema", schema.to_str().unwrap(), "--", "-v"])
        .output()
        .expect("failed to run argspec");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "yaml schema should load. stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--verbose"), "stdout: {stdout}");
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_reports_ok_for_valid_schema() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let schema = write_sample_schema(dir.path());

    let out = Command::new(bin())
        .args(["validate", schema.to_str().unwrap()])
        .output()
        .expect("failed to run argspec");

    assert!(out.status.success(), "valid schema should validate");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(": ok"), "stdout: {stdout}");
}

#[test]
fn validate_rejects_invalid_schema() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let json = serde_json::json!({
        "options": [
            {"short": "v"}
        ]
    });
    let schema = dir.path().join("bad.json");
    fs::write(&schema, serde_json::to_string_pretty(&json).unwrap())
        .expect("failed to write schema file");

    let out = Command::new(bin())
        .args(["validate", schema.to_str().unwrap()])
        .output()
        .expect("failed to run argspec");

    assert!(!out.status.success(), "invalid schema should fail validation");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("invalid short option format: v"),
        "violation should be listed. stdout: {stdout}"
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed validation"), "stderr: {stderr}");
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_prints_schema_summary() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let schema = write_sample_schema(dir.path());

    let out = Command::new(bin())
        .args([
            "show",
            "--schema",
            schema.to_str().unwrap(),
            "--format",
            "table",
        ])
        .output()
        .expect("failed to run argspec");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Command: demo"), "stdout: {stdout}");
    assert!(stdout.contains("-v, --verbose"));
    assert!(stdout.contains("takes value"));
}
