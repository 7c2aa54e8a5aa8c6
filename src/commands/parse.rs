//! Parse command handler

use anyhow::{Context, Result};
use std::io::{self, Write};

use ftl::cli::ParseArgs;
use ftl::gamelog::ParsedGame;
use ftl::theme::current_theme;
use ftl::Config;

use super::format_diagnostic;

/// Parse one log and print its record as JSON on stdout.
///
/// Diagnostics go to stderr so stdout stays valid JSON.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ParseArgs) -> Result<()> {
    let config = Config::load()?;
    let parsed = config
        .parser()
        .parse_file(&args.file)
        .with_context(|| format!("Failed to parse {}", args.file.display()))?;

    let json = render(&parsed, args.compact)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;

    let theme = current_theme();
    for diagnostic in &parsed.diagnostics {
        eprintln!("{}", format_diagnostic(&theme, diagnostic));
    }
    Ok(())
}

/// Serialize the record, pretty unless `compact`.
pub fn render(parsed: &ParsedGame, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(&parsed.record)
    } else {
        serde_json::to_string_pretty(&parsed.record)
    };
    json.context("Failed to serialize game record")
}
