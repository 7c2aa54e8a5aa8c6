//! Forge Timeline (FTL) Library
//!
//! Rebuilds structured game records from Forge simulator logs, one log at a
//! time ([`gamelog`]) or a whole experiment directory at once ([`batch`]).

use std::sync::LazyLock;

pub mod batch;
pub mod cli;
pub mod config;
pub mod gamelog;
pub mod theme;

pub use batch::{BatchReport, LogStatus};
pub use config::Config;
pub use gamelog::{GameLogParser, GameRecord, ParsedGame};

static VERSION: LazyLock<String> = LazyLock::new(|| {
    let pkg = env!("CARGO_PKG_VERSION");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if !cfg!(feature = "release") && !sha.is_empty() => {
            format!("{} ({})", pkg, &sha[..sha.len().min(7)])
        }
        _ => pkg.to_string(),
    }
});

/// Version string; dev builds carry the short git SHA.
pub fn version() -> &'static str {
    VERSION.as_str()
}
