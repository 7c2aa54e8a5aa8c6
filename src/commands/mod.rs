//! Command handlers for the FTL CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod batch;
pub mod completions;
pub mod config;
pub mod parse;

use ftl::gamelog::Diagnostic;
use ftl::theme::Theme;

/// Truncate a string to a maximum length, adding ellipsis if needed.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Render one diagnostic as a themed stderr line.
pub fn format_diagnostic(theme: &Theme, diagnostic: &Diagnostic) -> String {
    let line = truncate_string(&diagnostic.to_string(), 160);
    if diagnostic.is_block_skip() {
        theme.error_text(&format!("  skipped: {}", line))
    } else {
        theme.warning_text(&format!("  warning: {}", line))
    }
}
