//! Batch processing of experiment directories.
//!
//! An experiment directory holds many game logs (by default under `logs/`).
//! A batch run discovers them, parses them on a worker pool and collects
//! every record into one dataset keyed `game_000`, `game_001`, ...

pub mod discover;
pub mod report;
pub mod warnings;
pub mod worker;

pub use discover::{discover_logs, LogFileInfo};
pub use report::{BatchReport, LogResult, LogStatus};
pub use warnings::{scan_simulator_warnings, SimulatorWarning};
pub use worker::{BatchExecutor, ProgressReporter, WorkerConfig, WorkerScaler};

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;

/// Everything a batch run produced, before it is written out.
#[derive(Debug)]
pub struct BatchRun {
    pub logs_dir: PathBuf,
    pub workers: usize,
    pub report: BatchReport,
    pub simulator_warnings: Vec<SimulatorWarning>,
}

/// Discover, parse and summarize every log of an experiment.
///
/// `on_progress` is called once per finished log, from worker threads.
pub fn run<F>(
    config: &Config,
    experiment_dir: &Path,
    workers_override: Option<usize>,
    on_progress: F,
) -> Result<BatchRun>
where
    F: Fn(usize, usize, &LogResult) + Send + Sync + 'static,
{
    let logs_dir = config.logs_directory(experiment_dir);
    let logs = discover_logs(&logs_dir, config.batch.extension())?;

    let scaler = WorkerScaler::new(WorkerConfig {
        min_workers: 1,
        max_workers: config.batch.max_workers,
        user_override: workers_override.or(config.batch.workers),
    });
    let workers = scaler.calculate_workers(logs.len());

    info!(
        dir = %logs_dir.display(),
        logs = logs.len(),
        workers,
        "starting batch"
    );

    let parser = config.parser();
    let progress = ProgressReporter::with_callback(logs.len(), on_progress);
    let results = BatchExecutor::new(&parser, workers).execute(&logs, &progress);
    let report = BatchReport::new(results, config.batch.record_prefix.clone());
    let simulator_warnings = scan_simulator_warnings(experiment_dir);

    info!(
        ok = report.succeeded(),
        partial = report.partial(),
        failed = report.failed(),
        simulator_warnings = simulator_warnings.len(),
        "batch finished"
    );

    Ok(BatchRun {
        logs_dir,
        workers,
        report,
        simulator_warnings,
    })
}
