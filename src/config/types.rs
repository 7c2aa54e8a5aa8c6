//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::gamelog::grammar as gd;
use crate::gamelog::Grammar;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grammar: GrammarConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Event names and markers of the simulator log format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarConfig {
    /// Event kind carrying turn/phase board dumps
    #[serde(default = "default_board_state_event")]
    pub board_state_event: String,
    /// Event kind carrying the game result
    #[serde(default = "default_outcome_event")]
    pub outcome_event: String,
    /// Phase indicators that mark a board dump worth keeping
    #[serde(default = "default_snapshot_phases")]
    pub snapshot_phases: Vec<String>,
    /// Text every board dump contains
    #[serde(default = "default_board_marker")]
    pub board_marker: String,
}

pub fn default_board_state_event() -> String {
    gd::DEFAULT_BOARD_STATE_EVENT.to_string()
}

pub fn default_outcome_event() -> String {
    gd::DEFAULT_OUTCOME_EVENT.to_string()
}

pub fn default_snapshot_phases() -> Vec<String> {
    gd::default_snapshot_phases()
}

pub fn default_board_marker() -> String {
    gd::DEFAULT_BOARD_MARKER.to_string()
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            board_state_event: default_board_state_event(),
            outcome_event: default_outcome_event(),
            snapshot_phases: default_snapshot_phases(),
            board_marker: default_board_marker(),
        }
    }
}

impl GrammarConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.board_state_event.trim().is_empty() {
            return Err("grammar.board_state_event must not be empty".to_string());
        }
        if self.outcome_event.trim().is_empty() {
            return Err("grammar.outcome_event must not be empty".to_string());
        }
        if self.board_state_event == self.outcome_event {
            return Err(format!(
                "grammar.board_state_event and grammar.outcome_event are both '{}'",
                self.outcome_event
            ));
        }
        if self.snapshot_phases.iter().all(|p| p.trim().is_empty()) {
            return Err("grammar.snapshot_phases needs at least one phase".to_string());
        }
        if self.board_marker.trim().is_empty() {
            return Err("grammar.board_marker must not be empty".to_string());
        }
        Ok(())
    }

    /// Build the parser grammar from this section.
    pub fn to_grammar(&self) -> Grammar {
        Grammar {
            board_state_event: self.board_state_event.clone(),
            outcome_event: self.outcome_event.clone(),
            snapshot_phases: self
                .snapshot_phases
                .iter()
                .filter(|p| !p.trim().is_empty())
                .cloned()
                .collect(),
            board_marker: self.board_marker.clone(),
        }
    }
}

/// Batch processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of parallel workers (None = auto-scale)
    #[serde(default)]
    pub workers: Option<usize>,
    /// Upper bound for auto-scaled workers
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
    /// Extension of game log files
    #[serde(default = "default_log_extension")]
    pub log_extension: String,
    /// Subdirectory of an experiment holding the logs
    #[serde(default = "default_logs_subdir")]
    pub logs_subdir: String,
    /// Dataset filename written into the experiment directory
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// Prefix of per-game keys in the dataset
    #[serde(default = "default_record_prefix")]
    pub record_prefix: String,
}

pub fn default_max_workers() -> usize {
    8
}

pub fn default_log_extension() -> String {
    "log".to_string()
}

pub fn default_logs_subdir() -> String {
    "logs".to_string()
}

pub fn default_output_file() -> String {
    "data.json".to_string()
}

pub fn default_record_prefix() -> String {
    "game".to_string()
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: None,
            max_workers: default_max_workers(),
            log_extension: default_log_extension(),
            logs_subdir: default_logs_subdir(),
            output_file: default_output_file(),
            record_prefix: default_record_prefix(),
        }
    }
}

impl BatchConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(0) = self.workers {
            return Err("batch.workers must be > 0".to_string());
        }
        if let Some(w) = self.workers {
            if w > 64 {
                return Err(format!("batch.workers {} exceeds maximum (64)", w));
            }
        }
        if self.max_workers == 0 {
            return Err("batch.max_workers must be > 0".to_string());
        }
        if self.log_extension.trim().is_empty() {
            return Err("batch.log_extension must not be empty".to_string());
        }
        if self.output_file.trim().is_empty() {
            return Err("batch.output_file must not be empty".to_string());
        }
        Ok(())
    }

    /// Extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.log_extension.trim().trim_start_matches('.')
    }
}
