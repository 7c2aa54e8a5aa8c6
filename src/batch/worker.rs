//! Parallel log parsing using Rayon.
//!
//! - `WorkerScaler` picks the worker count for a batch
//! - `BatchExecutor` runs the parser over the discovered logs
//! - Progress is reported via `ProgressReporter` callback

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::warn;

use super::discover::LogFileInfo;
use super::report::LogResult;
use crate::gamelog::GameLogParser;

/// Configuration for worker scaling.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Minimum number of workers
    pub min_workers: usize,
    /// Maximum number of workers
    pub max_workers: usize,
    /// User override for worker count (takes precedence)
    pub user_override: Option<usize>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            min_workers: 1,
            max_workers: 8,
            user_override: None,
        }
    }
}

/// Calculates the worker count for a batch.
#[derive(Debug)]
pub struct WorkerScaler {
    config: WorkerConfig,
}

impl WorkerScaler {
    pub fn new(config: WorkerConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(WorkerConfig::default())
    }

    /// One worker per log, capped by min(max_workers, CPU count).
    ///
    /// A user override is only clamped to `1..=max_workers`.
    pub fn calculate_workers(&self, log_count: usize) -> usize {
        if let Some(override_count) = self.config.user_override {
            return override_count.clamp(1, self.config.max_workers.max(1));
        }

        let cpu_count = std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(4);

        let effective_max = self.config.max_workers.min(cpu_count).max(1);
        let effective_min = self.config.min_workers.min(effective_max);

        log_count.clamp(effective_min, effective_max)
    }
}

/// Thread-safe progress tracking.
pub struct ProgressReporter {
    completed: Arc<AtomicUsize>,
    total: usize,
    callback: Option<Box<dyn Fn(usize, usize, &LogResult) + Send + Sync>>,
}

impl ProgressReporter {
    pub fn new(total: usize) -> Self {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total,
            callback: None,
        }
    }

    /// Create a progress reporter invoking `callback(completed, total, result)`.
    pub fn with_callback<F>(total: usize, callback: F) -> Self
    where
        F: Fn(usize, usize, &LogResult) + Send + Sync + 'static,
    {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total,
            callback: Some(Box::new(callback)),
        }
    }

    /// Report that one more log has been parsed.
    ///
    /// Returns the new count of completed logs.
    pub fn report_progress(&self, result: &LogResult) -> usize {
        let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(ref callback) = self.callback {
            callback(completed, self.total, result);
        }

        completed
    }

    /// Get current progress (completed, total).
    pub fn get_progress(&self) -> (usize, usize) {
        (self.completed.load(Ordering::SeqCst), self.total)
    }
}

/// Runs one parser over many logs.
pub struct BatchExecutor<'a> {
    parser: &'a GameLogParser,
    worker_count: usize,
}

impl<'a> BatchExecutor<'a> {
    pub fn new(parser: &'a GameLogParser, worker_count: usize) -> Self {
        Self {
            parser,
            worker_count: worker_count.max(1),
        }
    }

    /// Parse every log, returning results in input order.
    ///
    /// A single log is parsed on the calling thread.
    pub fn execute(&self, logs: &[LogFileInfo], progress: &ProgressReporter) -> Vec<LogResult> {
        match logs.len() {
            0 => Vec::new(),
            1 => vec![self.run_one(&logs[0], progress)],
            _ => self.execute_parallel(logs, progress),
        }
    }

    fn execute_parallel(
        &self,
        logs: &[LogFileInfo],
        progress: &ProgressReporter,
    ) -> Vec<LogResult> {
        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.worker_count)
            .thread_name(|i| format!("ftl-parse-{}", i))
            .build()
        {
            Ok(pool) => pool,
            Err(e) => {
                warn!(error = %e, "failed to create thread pool, parsing sequentially");
                return logs.iter().map(|log| self.run_one(log, progress)).collect();
            }
        };

        pool.install(|| {
            logs.par_iter()
                .map(|log| self.run_one(log, progress))
                .collect()
        })
    }

    fn run_one(&self, log: &LogFileInfo, progress: &ProgressReporter) -> LogResult {
        let result = LogResult::from_parse(log, self.parser.parse_file(&log.path));
        progress.report_progress(&result);
        result
    }
}
