//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Create a temporary directory with a copy of a fixture
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let fixture_content = load_fixture(name);
    let temp_path = temp_dir.path().join(name);
    fs::write(&temp_path, fixture_content).expect("Failed to write temp fixture");
    (temp_dir, temp_path)
}

/// Create an experiment directory laid out like a simulator run:
///
/// ```text
/// <tmp>/logs/run1/game_a.log   sample_game.log
/// <tmp>/logs/run1/game_b.log   no_header.log
/// <tmp>/logs/run2/game_c.log   malformed_block.log
/// <tmp>/logs/run1/raw_log.txt  raw_log.txt
/// ```
pub fn setup_experiment() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logs = temp_dir.path().join("logs");
    copy_fixture("sample_game.log", &logs.join("run1").join("game_a.log"));
    copy_fixture("no_header.log", &logs.join("run1").join("game_b.log"));
    copy_fixture("malformed_block.log", &logs.join("run2").join("game_c.log"));
    copy_fixture("raw_log.txt", &logs.join("run1").join("raw_log.txt"));
    temp_dir
}

/// Copy a fixture to `dest`, creating parent directories.
pub fn copy_fixture(name: &str, dest: &Path) {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture parent");
    }
    fs::write(dest, load_fixture(name)).expect("Failed to copy fixture");
}
