//! CLI behavior tests for `ftl parse` and `ftl config`

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, ftl_cmd, run_ftl};

#[test]
fn parse_prints_record_json() {
    let config_dir = TempDir::new().unwrap();
    let (stdout, stderr, code) = run_ftl(
        &[
            "parse",
            fixtures_dir().join("sample_game.log").to_str().unwrap(),
        ],
        config_dir.path(),
    );

    assert_eq!(code, 0, "stderr: {}", stderr);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["winner"], "Ai(1)-Burn");
    assert_eq!(value["turns"]["1"]["CLEANUP"]["activephase"], "CLEANUP");
    assert_eq!(stderr.matches("warning:").count(), 2);
}

#[test]
fn parse_compact_is_one_line() {
    let config_dir = TempDir::new().unwrap();
    ftl_cmd(config_dir.path())
        .arg("parse")
        .arg(fixtures_dir().join("sample_game.log"))
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"players\":[\"Ai(1)-Burn\",\"Ai(2)-Elves\"]"))
        .stdout(predicate::function(|s: &str| s.trim_end().lines().count() == 1));
}

#[test]
fn parse_reports_skipped_blocks_on_stderr() {
    let config_dir = TempDir::new().unwrap();
    ftl_cmd(config_dir.path())
        .arg("parse")
        .arg(fixtures_dir().join("malformed_block.log"))
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped: block 1"))
        .stderr(predicate::str::contains("invalid active player \"p2\""))
        .stderr(predicate::str::contains("expected exactly one winner"));
}

#[test]
fn parse_without_header_fails() {
    let config_dir = TempDir::new().unwrap();
    ftl_cmd(config_dir.path())
        .arg("parse")
        .arg(fixtures_dir().join("no_header.log"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn parse_missing_file_fails() {
    let config_dir = TempDir::new().unwrap();
    ftl_cmd(config_dir.path())
        .args(["parse", "/nonexistent/game.log"])
        .assert()
        .failure();
}

#[test]
fn parse_honors_configured_grammar() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[grammar]\nsnapshot_phases = [\"Cleanup step phase\"]\n",
    )
    .unwrap();

    let (stdout, _, code) = run_ftl(
        &[
            "parse",
            fixtures_dir().join("sample_game.log").to_str().unwrap(),
        ],
        config_dir.path(),
    );
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let turns = value["turns"].as_object().unwrap();
    assert_eq!(turns.len(), 1);
    assert!(value["turns"]["1"]["MAIN1"].is_null());
}

#[test]
fn invalid_config_is_reported() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[batch]\nworkers = 0\n",
    )
    .unwrap();

    ftl_cmd(config_dir.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("batch.workers must be > 0"));
}

#[test]
fn config_path_uses_override_dir() {
    let config_dir = TempDir::new().unwrap();
    let expected = config_dir.path().join("config.toml");
    ftl_cmd(config_dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_str().unwrap()));
}

#[test]
fn completions_generate_for_bash() {
    let config_dir = TempDir::new().unwrap();
    ftl_cmd(config_dir.path())
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_ftl"));
}

#[test]
fn verbose_flag_emits_debug_logs() {
    let config_dir = TempDir::new().unwrap();
    ftl_cmd(config_dir.path())
        .arg("-v")
        .arg("parse")
        .arg(fixtures_dir().join("sample_game.log"))
        .assert()
        .success()
        .stderr(predicate::str::contains("dispatching block"));
}
