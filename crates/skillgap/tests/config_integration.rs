//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
    assert_eq!(json["config"]["max_input_bytes"], 5 * 1024 * 1024);
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".skillgap.toml"), "min_match_percent = 70\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["min_match_percent"], 70);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".skillgap.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("applications").join("2026");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(tmp.path().join("skillgap.toml"), r#"default_format = "markdown""#).unwrap();

    let json = info_json(&sub_dir);
    assert_eq!(json["config"]["default_format"], "markdown");
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".skillgap.toml"), "min_match_percent = 50\n").unwrap();
    fs::write(tmp.path().join("skillgap.toml"), "min_match_percent = 80\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(
        json["config"]["min_match_percent"], 80,
        "regular file should override dotfile"
    );
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".skillgap.yaml"),
        "log_level: warn\nmax_input_bytes: 1024\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
    assert_eq!(json["config"]["max_input_bytes"], 1024);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".skillgap.json"),
        r#"{"log_level": "error", "disable_input_limit": true}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
    assert!(json["config"]["max_input_bytes"].is_null());
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(tmp.path().join(".skillgap.toml"), "min_match_percent = 90\n").unwrap();
    fs::write(sub_dir.join(".skillgap.toml"), "min_match_percent = 40\n").unwrap();

    let json = info_json(&sub_dir);
    assert_eq!(
        json["config"]["min_match_percent"], 40,
        "closer config should win"
    );
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".skillgap.toml"), "min_match_percent = 40\n").unwrap();

    let explicit = tmp.path().join("strict.toml");
    fs::write(&explicit, "min_match_percent = 95\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["min_match_percent"], 95);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("strict.toml"),
        "--config path should be reported: {reported}"
    );
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".skillgap.toml"), "min_match_percent = 40\n").unwrap();

    let output = cmd()
        .env("SKILLGAP_MIN_MATCH_PERCENT", "65")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["min_match_percent"], 65);
}

#[test]
fn configured_min_match_gates_analyze() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".skillgap.toml"), "min_match_percent = 75\n").unwrap();
    fs::write(
        tmp.path().join("resume.txt"),
        "Experienced in Python, SQL and Docker.",
    )
    .unwrap();
    fs::write(
        tmp.path().join("job.txt"),
        "Looking for Python, Java, SQL, AWS, and Docker expert.",
    )
    .unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "analyze",
            "resume.txt",
            "job.txt",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min: 75%"));

    // The flag overrides the configured gate
    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "analyze",
            "resume.txt",
            "job.txt",
            "--min-match",
            "50",
        ])
        .assert()
        .success();
}

#[test]
fn configured_default_format_applies_to_unknown_extensions() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".skillgap.toml"), r#"default_format = "markdown""#).unwrap();
    fs::write(
        tmp.path().join("resume.posting"),
        "## Skills\n\n- [React](https://react.dev)\n",
    )
    .unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "skills",
            "resume.posting",
            "--json",
        ])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["skills"], serde_json::json!(["react"]));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".skillgap.toml"), "this is not valid toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn out_of_range_percent_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".skillgap.toml"), "min_match_percent = 300\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();

    // Fits in the integer type but is not a percentage
    fs::write(tmp.path().join(".skillgap.toml"), "min_match_percent = 150\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_match_percent = 150"));
}

#[test]
fn out_of_range_env_percent_fails_analyze() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("resume.txt"), "python java").unwrap();

    cmd()
        .env("SKILLGAP_MIN_MATCH_PERCENT", "150")
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "analyze",
            "resume.txt",
            "--jd-text",
            "python java",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Skill match").not())
        .stderr(predicate::str::contains("must be between 0 and 100"));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".skillgap.toml"),
        "log_level = \"info\"\nunknown_field = \"should be ignored\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "info");
}

// =============================================================================
// Boundary Marker Tests
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();

    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    fs::write(parent.join(".skillgap.toml"), "min_match_percent = 90\n").unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&src);

    assert!(
        json["config"]["min_match_percent"].is_null(),
        "boundary should stop search"
    );
    assert!(json["config"]["config_file"].is_null());
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".skillgap.toml"), "min_match_percent = 55\n").unwrap();

    let json = info_json(&src);
    assert_eq!(json["config"]["min_match_percent"], 55);
}
