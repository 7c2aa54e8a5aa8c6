//! Unit tests for batch processing

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ftl::batch::{self, discover_logs, LogStatus};
use ftl::Config;

use crate::helpers::setup_experiment;

#[test]
fn discovery_walks_the_logs_subdir() {
    let experiment = setup_experiment();
    let config = Config::default();
    let logs = discover_logs(&config.logs_directory(experiment.path()), "log").unwrap();
    let names: Vec<_> = logs.iter().map(|l| l.relative.as_str()).collect();
    assert_eq!(
        names,
        vec!["run1/game_a.log", "run1/game_b.log", "run2/game_c.log"]
    );
}

#[test]
fn run_reports_each_log_in_discovery_order() {
    let experiment = setup_experiment();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let run = batch::run(&Config::default(), experiment.path(), Some(2), move |_, total, _| {
        assert_eq!(total, 3);
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(run.workers, 2);
    assert_eq!(run.logs_dir, experiment.path().join("logs"));

    let statuses: Vec<_> = run.report.results.iter().map(|r| &r.status).collect();
    assert_eq!(statuses[0], &LogStatus::Partial { warnings: 2 });
    assert!(statuses[1].is_failed());
    assert_eq!(statuses[2], &LogStatus::Partial { warnings: 2 });
    assert_eq!(run.report.failed(), 1);
}

#[test]
fn dataset_skips_failed_logs_but_keeps_numbering() {
    let experiment = setup_experiment();
    let run = batch::run(&Config::default(), experiment.path(), None, |_, _, _| {}).unwrap();

    let dataset = run.report.dataset();
    let ids: Vec<_> = dataset.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["game_000", "game_002"]);
    assert_eq!(dataset["game_000"].winner.as_deref(), Some("Ai(1)-Burn"));
    assert!(dataset["game_002"].winner.is_none());
}

#[test]
fn simulator_warnings_are_collected() {
    let experiment = setup_experiment();
    let run = batch::run(&Config::default(), experiment.path(), Some(1), |_, _, _| {}).unwrap();
    assert_eq!(run.simulator_warnings.len(), 1);
    assert_eq!(
        run.simulator_warnings[0].line,
        "Warning: Unsupported card Shahrazad, skipping"
    );
}

#[test]
fn write_dataset_then_refuse_second_write() {
    let experiment = setup_experiment();
    let config = Config::default();
    let run = batch::run(&config, experiment.path(), None, |_, _, _| {}).unwrap();
    let out = config.output_path(experiment.path(), None);

    assert_eq!(run.report.write_dataset(&out, false).unwrap(), 2);
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["game_000"]["players"][1], "Ai(2)-Elves");

    assert!(run.report.write_dataset(&out, false).is_err());
    assert!(run.report.write_dataset(&out, true).is_ok());
}

#[test]
fn custom_prefix_and_flat_directory() {
    let temp = tempfile::TempDir::new().unwrap();
    crate::helpers::copy_fixture("sample_game.log", &temp.path().join("only.log"));
    let mut config = Config::default();
    config.batch.record_prefix = "match".to_string();

    let run = batch::run(&config, temp.path(), None, |_, _, _| {}).unwrap();
    assert_eq!(run.logs_dir, temp.path());
    assert_eq!(run.workers, 1);
    assert!(run.report.dataset().contains_key("match_000"));
}

#[test]
fn missing_experiment_directory_fails() {
    let temp = tempfile::TempDir::new().unwrap();
    let result = batch::run(&Config::default(), &temp.path().join("absent"), None, |_, _, _| {});
    assert!(result.is_err());
}

#[cfg(unix)]
#[test]
fn unreadable_raw_log_does_not_abort_run() {
    let experiment = setup_experiment();
    std::os::unix::fs::symlink(
        experiment.path().join("gone.txt"),
        experiment.path().join("logs/run2/raw_log.txt"),
    )
    .unwrap();

    let run = batch::run(&Config::default(), experiment.path(), None, |_, _, _| {}).unwrap();
    assert_eq!(run.report.dataset().len(), 2);
    assert_eq!(run.simulator_warnings.len(), 1);
}
