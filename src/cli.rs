//! CLI definitions for FTL
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "ftl")]
#[command(about = "[ Forge Timeline ] - turn Forge simulator game logs into structured game records")]
#[command(long_about = "Forge Timeline (FTL) - ingest Forge simulator game logs.

FTL reads the text log Forge writes for each simulated game and rebuilds a
per-turn, per-phase timeline of both players' boards plus the winner, as JSON.
Malformed blocks are skipped with a warning; only a missing player header
rejects a log.

QUICK START:
    ftl parse game.log                Print one game record as JSON
    ftl batch experiments/run1        Parse every log into run1/data.json
    ftl config show                   Show the effective configuration

LOGGING:
    FTL_LOG=debug ftl parse game.log  Trace every dispatched event block")]
#[command(version = crate::version())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Enable debug logging (overrides FTL_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a single game log
    #[command(long_about = "Parse a single Forge game log and print its record as JSON.

The record holds the two player identities, a turn -> phase -> snapshot map
and the winner (null if it could not be determined). Diagnostics for skipped
blocks and degraded fields are written to stderr.

EXAMPLES:
    ftl parse game.log                 Pretty-printed JSON on stdout
    ftl parse game.log --compact       Single-line JSON
    ftl parse game.log > record.json   Save the record")]
    Parse(ParseArgs),

    /// Parse every log of an experiment directory
    #[command(long_about = "Parse every game log of an experiment into one dataset.

Logs are discovered recursively under <DIR>/logs (or <DIR> itself when it has
no logs/ subdirectory) and parsed in parallel. The dataset is written to
<DIR>/data.json as an object keyed game_000, game_001, ... in path order.
Logs that fail to parse keep their number but add no entry.

Afterwards any raw_log.txt simulator capture is scanned for
'unsupported card' warnings.

EXAMPLES:
    ftl batch experiments/run1              Write experiments/run1/data.json
    ftl batch experiments/run1 --force      Overwrite an existing dataset
    ftl batch experiments/run1 -w 2         Limit to two workers
    ftl batch experiments/run1 -o out.json  Custom output filename")]
    Batch(BatchArgs),

    /// Configuration management
    #[command(subcommand)]
    #[command(long_about = "View the FTL configuration.

Configuration is stored in ~/.config/ftl/config.toml (override the directory
with FTL_CONFIG_DIR) and covers the log grammar and batch settings.

EXAMPLES:
    ftl config show         Display the effective configuration
    ftl config path         Print the config file location")]
    Config(ConfigCommands),

    /// Generate shell completions (internal use)
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Option<CompletionShell>,
    },
}

#[derive(Args)]
pub struct ParseArgs {
    /// Path to the game log
    #[arg(help = "Path to the Forge game log")]
    pub file: PathBuf,

    /// Emit single-line JSON
    #[arg(long, help = "Emit single-line JSON instead of pretty-printed")]
    pub compact: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Experiment directory
    #[arg(help = "Experiment directory containing the logs")]
    pub dir: PathBuf,

    /// Overwrite an existing dataset
    #[arg(long, short, help = "Overwrite an existing dataset file")]
    pub force: bool,

    /// Worker count override
    #[arg(long, short, help = "Number of parallel workers (default: auto)")]
    pub workers: Option<usize>,

    /// Dataset filename
    #[arg(long, short, help = "Dataset filename inside the experiment directory")]
    pub output: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

Unset optional fields are listed as comments with their defaults.

EXAMPLE:
    ftl config show")]
    Show,
    /// Print the configuration file path
    Path,
}
