//! CLI tests for `ftl batch`

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{copy_fixture, ftl_cmd, run_ftl, setup_experiment};

#[test]
fn batch_writes_dataset_and_summary() {
    let config_dir = TempDir::new().unwrap();
    let experiment = setup_experiment();

    let (stdout, stderr, code) = run_ftl(
        &["batch", experiment.path().to_str().unwrap(), "-w", "2"],
        config_dir.path(),
    );
    assert_eq!(code, 0, "stderr: {}", stderr);

    assert!(stdout.contains("run1/game_a.log ... ok, 2 warnings"));
    assert!(stdout.contains("run1/game_b.log ... failed: Missing player header"));
    assert!(stdout.contains("3 logs: 0 ok, 2 partial (4 warnings), 1 failed (2 workers"));
    assert!(stdout.contains("1 simulator warning:"));
    assert!(stdout.contains("Unsupported card Shahrazad"));
    assert!(stdout.contains("Wrote 2 records to"));

    let data = fs::read_to_string(experiment.path().join("data.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&data).unwrap();
    let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["game_000", "game_002"]);
}

#[test]
fn batch_refuses_to_overwrite_without_force() {
    let config_dir = TempDir::new().unwrap();
    let experiment = setup_experiment();
    let data = experiment.path().join("data.json");
    fs::write(&data, "keep me").unwrap();

    ftl_cmd(config_dir.path())
        .arg("batch")
        .arg(experiment.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists (use --force to overwrite)"));
    assert_eq!(fs::read_to_string(&data).unwrap(), "keep me");

    ftl_cmd(config_dir.path())
        .arg("batch")
        .arg(experiment.path())
        .arg("--force")
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&data).unwrap(), "keep me");
}

#[test]
fn batch_custom_output_name() {
    let config_dir = TempDir::new().unwrap();
    let experiment = setup_experiment();

    ftl_cmd(config_dir.path())
        .arg("batch")
        .arg(experiment.path())
        .args(["--output", "games.json"])
        .assert()
        .success();

    assert!(experiment.path().join("games.json").exists());
    assert!(!experiment.path().join("data.json").exists());
}

#[test]
fn batch_uses_configured_prefix_and_extension() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[batch]\nlog_extension = \"txt\"\nrecord_prefix = \"match\"\n",
    )
    .unwrap();

    let experiment = TempDir::new().unwrap();
    copy_fixture("sample_game.log", &experiment.path().join("a.txt"));
    copy_fixture("sample_game.log", &experiment.path().join("b.log"));

    ftl_cmd(config_dir.path())
        .arg("batch")
        .arg(experiment.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 logs:"));

    let json: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(experiment.path().join("data.json")).unwrap(),
    )
    .unwrap();
    assert!(json.get("match_000").is_some());
}

#[test]
fn batch_on_empty_directory_writes_empty_dataset() {
    let config_dir = TempDir::new().unwrap();
    let experiment = TempDir::new().unwrap();

    ftl_cmd(config_dir.path())
        .arg("batch")
        .arg(experiment.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 0 records"));

    let data = fs::read_to_string(experiment.path().join("data.json")).unwrap();
    assert_eq!(data.trim(), "{}");
}

#[test]
fn batch_missing_directory_fails() {
    let config_dir = TempDir::new().unwrap();
    let experiment = TempDir::new().unwrap();

    ftl_cmd(config_dir.path())
        .arg("batch")
        .arg(experiment.path().join("absent"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}
