//! xtask - Build tasks for FTL
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md, CONFIGURATION.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use ftl::cli::Cli;
use ftl::config::docs::generate_config_markdown;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for FTL")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI and config definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,

        /// Generate CONFIGURATION.md
        #[arg(long)]
        config: bool,

        /// Generate all formats (default if no specific format is specified)
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
            config,
            all,
        } => {
            let gen_all = all || (!man && !markdown && !config);

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
            if gen_all || config {
                generate_config_reference(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man(&man_dir, &cmd, "ftl")?;

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Render `cmd` and its visible subcommands as `<stem>[-sub...].1`.
fn render_man(dir: &Path, cmd: &Command, stem: &str) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    let path = dir.join(format!("{}.1", stem));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Generated: {}", path.display());

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        render_man(dir, sub, &format!("{}-{}", stem, sub.get_name()))?;
    }
    Ok(())
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# FTL Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("## Table of Contents\n\n");
    for subcommand in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("- [{}](#ftl-{})\n", name, name));
    }
    markdown.push_str("\n---\n\n");

    markdown.push_str("## ftl\n\n");
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    push_options(&mut markdown, cmd.get_arguments());
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
    }

    for subcommand in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("## ftl {}\n\n", name));
        push_command_body(&mut markdown, subcommand, "###");

        for nested in subcommand.get_subcommands().filter(|s| !s.is_hide_set()) {
            markdown.push_str(&format!("#### ftl {} {}\n\n", name, nested.get_name()));
            push_command_body(&mut markdown, nested, "#####");
        }

        markdown.push_str("---\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}

fn push_command_body(markdown: &mut String, cmd: &Command, heading: &str) {
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }

    let positional: Vec<_> = cmd
        .get_arguments()
        .filter(|a| a.is_positional() && !is_builtin(a))
        .collect();
    if !positional.is_empty() {
        markdown.push_str(&format!("{} Arguments\n\n", heading));
        for arg in positional {
            markdown.push_str(&format!("- `<{}>`: ", arg.get_id().as_str().to_uppercase()));
            if let Some(help) = arg.get_help() {
                markdown.push_str(&help.to_string());
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }

    let before = markdown.len();
    push_options(markdown, cmd.get_arguments());
    if markdown.len() != before {
        markdown.insert_str(before, &format!("{} Options\n\n", heading));
    }

    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("{} Description\n\n", heading));
        markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
    }
}

fn push_options<'a>(markdown: &mut String, args: impl Iterator<Item = &'a Arg>) {
    let mut any = false;
    for arg in args.filter(|a| !a.is_positional() && !is_builtin(a)) {
        let long = arg.get_long().map(|l| format!("--{}", l));
        let short = arg.get_short().map(|s| format!("-{}", s));
        let flag = match (long, short) {
            (Some(l), Some(s)) => format!("{}, {}", s, l),
            (Some(l), None) => l,
            (None, Some(s)) => s,
            _ => continue,
        };
        markdown.push_str(&format!("- `{}`: ", flag));
        if let Some(help) = arg.get_help() {
            markdown.push_str(&help.to_string());
        }
        markdown.push('\n');
        any = true;
    }
    if any {
        markdown.push('\n');
    }
}

fn is_builtin(arg: &Arg) -> bool {
    matches!(arg.get_id().as_str(), "help" | "version")
}

/// Generate CONFIGURATION.md from the config field docs
fn generate_config_reference(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;
    let output_path = output.join("CONFIGURATION.md");
    fs::write(&output_path, generate_config_markdown())?;
    println!("Generated: {}", output_path.display());
    Ok(())
}
