//! Configuration management for FTL

pub mod docs;
mod io;
mod types;

pub use io::CONFIG_DIR_ENV;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::gamelog::GameLogParser;

impl Config {
    /// Get the config file path (~/.config/ftl/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/ftl)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Validate all sections, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        self.grammar.validate()?;
        self.batch.validate()
    }

    /// Build a log parser for the configured grammar.
    pub fn parser(&self) -> GameLogParser {
        GameLogParser::new(self.grammar.to_grammar())
    }

    /// Directory holding the logs of an experiment.
    ///
    /// Uses `<experiment>/<logs_subdir>` when that exists, otherwise the
    /// experiment directory itself.
    pub fn logs_directory(&self, experiment_dir: &Path) -> PathBuf {
        let candidate = experiment_dir.join(&self.batch.logs_subdir);
        if !self.batch.logs_subdir.is_empty() && candidate.is_dir() {
            candidate
        } else {
            experiment_dir.to_path_buf()
        }
    }

    /// Path of the dataset file for an experiment.
    pub fn output_path(&self, experiment_dir: &Path, override_name: Option<&str>) -> PathBuf {
        experiment_dir.join(override_name.unwrap_or(&self.batch.output_file))
    }
}
