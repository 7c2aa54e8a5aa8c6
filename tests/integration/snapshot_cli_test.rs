//! CLI output snapshot tests
//!
//! Tests the actual CLI binary output for reproducibility.

use tempfile::TempDir;

use crate::helpers::{fixtures_dir, run_ftl};

#[test]
fn snapshot_parse_compact_minimal_record() {
    let config_dir = TempDir::new().unwrap();
    let log = config_dir.path().join("mini.log");
    std::fs::write(
        &log,
        "=== Players ===\nAlice - a.dck\nBob - b.dck\n\
         == GameEvent: forge.game.event.GameEventTurnPhase ===\n\
         Turn 1, Main phase, precombat phase\nBoard state\n\
         turn=1\nactiveplayer=p1\nactivephase=MAIN1\n\
         p0life=20\np1life=19\np1battlefield=Forest|Type:Land\n\
         == GameEvent: forge.game.event.GameEventGameOutcome ===\n\
         result=Bob has won\n",
    )
    .unwrap();

    let (stdout, stderr, code) = run_ftl(
        &["parse", "--compact", log.to_str().unwrap()],
        config_dir.path(),
    );
    let output = format!(
        "Exit code: {}\n--- stdout ---\n{}--- stderr ---\n{}",
        code, stdout, stderr
    );
    insta::assert_snapshot!(output, @r#"
    Exit code: 0
    --- stdout ---
    {"players":["Alice","Bob"],"turns":{"1":{"MAIN1":{"turn":1,"activeplayer":"Bob","activephase":"MAIN1","Alice":{"life":20},"Bob":{"life":19,"battlefield":[{"name":"Forest","type":"Land","power":"undefined","toughness":"undefined","manacost":"NONE","counters":{}}]}}}},"winner":"Bob"}
    --- stderr ---
    "#);
}

#[test]
fn snapshot_parse_missing_header() {
    let config_dir = TempDir::new().unwrap();
    let path = fixtures_dir().join("no_header.log");
    let (stdout, stderr, code) = run_ftl(&["parse", path.to_str().unwrap()], config_dir.path());

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    let first = stderr.lines().next().unwrap_or_default().to_string();
    let filtered = first.replace(path.to_str().unwrap(), "[FIXTURE]");
    insta::assert_snapshot!(filtered, @"Error: Failed to parse [FIXTURE]");
}
