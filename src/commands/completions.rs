//! Completions command handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io::{self, Write};

/// Handle completions command.
#[cfg(not(tarpaulin_include))]
pub fn handle<C: CommandFactory>(shell: Option<CompletionShell>) -> Result<()> {
    match shell {
        Some(shell) => generate_completions::<C>(shell, &mut io::stdout()),
        None => {
            eprintln!("Usage: ftl completions --shell <bash|zsh|fish|powershell|elvish>");
            std::process::exit(1);
        }
    }
}

/// Generate a shell completion script into `out`.
pub(crate) fn generate_completions<C: CommandFactory>(
    shell: CompletionShell,
    out: &mut dyn Write,
) -> Result<()> {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "ftl", out);
    Ok(())
}
