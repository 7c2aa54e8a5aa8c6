//! Batch results and dataset output

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::discover::LogFileInfo;
use crate::gamelog::{GameRecord, LogError, ParsedGame};

/// Outcome of parsing one log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogStatus {
    Success,
    /// Parsed, but some blocks were skipped or fields degraded
    Partial { warnings: usize },
    /// The log was rejected as a whole
    Failed { error: String },
}

impl LogStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, LogStatus::Failed { .. })
    }

    /// Short label for status lines.
    pub fn label(&self) -> String {
        match self {
            LogStatus::Success => "ok".to_string(),
            LogStatus::Partial { warnings } => format!(
                "ok, {} warning{}",
                warnings,
                if *warnings == 1 { "" } else { "s" }
            ),
            LogStatus::Failed { error } => format!("failed: {}", error),
        }
    }
}

/// Result of parsing one discovered log
#[derive(Debug, Clone)]
pub struct LogResult {
    pub relative: String,
    pub path: PathBuf,
    pub status: LogStatus,
    pub parsed: Option<ParsedGame>,
}

impl LogResult {
    pub fn from_parse(log: &LogFileInfo, outcome: Result<ParsedGame, LogError>) -> Self {
        let (status, parsed) = match outcome {
            Ok(parsed) if parsed.is_clean() => (LogStatus::Success, Some(parsed)),
            Ok(parsed) => (
                LogStatus::Partial {
                    warnings: parsed.warning_count(),
                },
                Some(parsed),
            ),
            Err(e) => (
                LogStatus::Failed {
                    error: e.to_string(),
                },
                None,
            ),
        };

        Self {
            relative: log.relative.clone(),
            path: log.path.clone(),
            status,
            parsed,
        }
    }
}

/// Aggregate of a whole batch run, in discovery order
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub results: Vec<LogResult>,
    pub record_prefix: String,
}

impl BatchReport {
    pub fn new(results: Vec<LogResult>, record_prefix: impl Into<String>) -> Self {
        Self {
            results,
            record_prefix: record_prefix.into(),
        }
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.count(|s| matches!(s, LogStatus::Success))
    }

    pub fn partial(&self) -> usize {
        self.count(|s| matches!(s, LogStatus::Partial { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(LogStatus::is_failed)
    }

    pub fn warnings(&self) -> usize {
        self.results
            .iter()
            .map(|r| match r.status {
                LogStatus::Partial { warnings } => warnings,
                _ => 0,
            })
            .sum()
    }

    fn count(&self, pred: impl Fn(&LogStatus) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.status)).count()
    }

    /// Dataset identifier of the log at `index` in discovery order.
    pub fn record_id(&self, index: usize) -> String {
        format!("{}_{:03}", self.record_prefix, index)
    }

    /// Map from identifier to record. Failed logs keep their index but
    /// contribute no entry.
    pub fn dataset(&self) -> BTreeMap<String, &GameRecord> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.parsed.as_ref().map(|p| (self.record_id(i), &p.record)))
            .collect()
    }

    /// One-line summary for the end of a run.
    pub fn summary(&self) -> String {
        format!(
            "{} logs: {} ok, {} partial ({} warnings), {} failed",
            self.total(),
            self.succeeded(),
            self.partial(),
            self.warnings(),
            self.failed()
        )
    }

    /// Write the dataset as pretty JSON.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    pub fn write_dataset(&self, path: &Path, force: bool) -> Result<usize> {
        if path.exists() && !force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }
        let dataset = self.dataset();
        write_json(path, &dataset)?;
        Ok(dataset.len())
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize dataset")?;
    fs::write(path, json + "\n").with_context(|| format!("Failed to write {:?}", path))
}
