//! Log file discovery for an experiment directory

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use humansize::{format_size, BINARY};
use std::fs;
use std::path::{Path, PathBuf};

/// A game log found on disk
#[derive(Debug, Clone)]
pub struct LogFileInfo {
    pub path: PathBuf,
    /// Path relative to the logs directory, `/`-separated
    pub relative: String,
    pub size: u64,
    pub modified: DateTime<Local>,
}

impl LogFileInfo {
    /// Get human-readable size
    pub fn size_human(&self) -> String {
        format_size(self.size, BINARY)
    }
}

/// Recursively list files with the given extension under `root`.
///
/// Results are sorted by relative path so dataset identifiers are stable
/// across runs and platforms.
pub fn discover_logs(root: &Path, extension: &str) -> Result<Vec<LogFileInfo>> {
    if !root.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }

    let mut logs = Vec::new();
    walk(root, root, extension, &mut logs)?;
    logs.sort_by(|a, b| a.relative.cmp(&b.relative));
    Ok(logs)
}

fn walk(root: &Path, dir: &Path, extension: &str, out: &mut Vec<LogFileInfo>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {:?}", dir))?;

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            walk(root, &path, extension, out)?;
            continue;
        }

        if !file_type.is_file() || path.extension().map(|e| e != extension).unwrap_or(true) {
            continue;
        }

        let metadata = entry
            .metadata()
            .with_context(|| format!("Failed to stat {:?}", path))?;
        let modified = metadata
            .modified()
            .map(DateTime::<Local>::from)
            .unwrap_or_else(|_| Local::now());
        let relative = relative_name(root, &path);

        out.push(LogFileInfo {
            path,
            relative,
            size: metadata.len(),
            modified,
        });
    }

    Ok(())
}

fn relative_name(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
