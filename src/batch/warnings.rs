//! Simulator warnings left in `raw_log.txt` captures

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::warn;

/// Name of the captured simulator console output
pub const RAW_LOG_NAME: &str = "raw_log.txt";

static WARNING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![Regex::new(r"(?i)unsupported card").expect("valid warning pattern")]
});

/// A flagged line from a raw simulator log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorWarning {
    pub source: PathBuf,
    pub line: String,
}

/// True if the line matches a known simulator warning.
pub fn is_warning_line(line: &str) -> bool {
    WARNING_PATTERNS.iter().any(|p| p.is_match(line))
}

/// Scan every `raw_log.txt` below `root` for simulator warnings.
///
/// Best effort: unreadable directories and files are logged and skipped, so
/// a broken capture never costs the parsed records. Files are read lossily.
pub fn scan_simulator_warnings(root: &Path) -> Vec<SimulatorWarning> {
    let mut sources = Vec::new();
    collect_raw_logs(root, &mut sources);
    sources.sort();

    let mut warnings = Vec::new();
    for source in sources {
        let bytes = match fs::read(&source) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(path = %source.display(), error = %e, "skipping unreadable raw log");
                continue;
            }
        };
        let text = String::from_utf8_lossy(&bytes);
        warnings.extend(
            text.lines()
                .filter(|line| is_warning_line(line))
                .map(|line| SimulatorWarning {
                    source: source.clone(),
                    line: line.trim_end().to_string(),
                }),
        );
    }
    warnings
}

fn collect_raw_logs(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_raw_logs(&path, out);
        } else if path.file_name().is_some_and(|n| n == RAW_LOG_NAME) {
            out.push(path);
        }
    }
}
