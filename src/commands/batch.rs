//! Batch command handler

use anyhow::{Context, Result};

use ftl::batch::{self, BatchRun, LogResult, LogStatus};
use ftl::cli::BatchArgs;
use ftl::theme::{current_theme, Theme};
use ftl::Config;

/// Parse an experiment directory and write its dataset.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &BatchArgs) -> Result<()> {
    let config = Config::load()?;
    let output_path = config.output_path(&args.dir, args.output.as_deref());

    // Fail before parsing anything if the dataset would be refused anyway
    if output_path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            output_path.display()
        );
    }

    let run = batch::run(
        &config,
        &args.dir,
        args.workers,
        |done, total, result: &LogResult| {
            let theme = current_theme();
            println!("{}", status_line(&theme, done, total, result));
        },
    )
    .with_context(|| format!("Batch failed for {}", args.dir.display()))?;

    let theme = current_theme();
    print_summary(&theme, &run);

    let written = run.report.write_dataset(&output_path, args.force)?;
    println!(
        "{}",
        theme.success_text(&format!(
            "Wrote {} record{} to {}",
            written,
            if written == 1 { "" } else { "s" },
            output_path.display()
        ))
    );
    Ok(())
}

/// `[3/10] logs/game3.log ... ok`
pub fn status_line(theme: &Theme, done: usize, total: usize, result: &LogResult) -> String {
    let progress = theme.secondary_text(&format!("[{}/{}]", done, total));
    let label = match &result.status {
        LogStatus::Success => theme.success_text(&result.status.label()),
        LogStatus::Partial { .. } => theme.warning_text(&result.status.label()),
        LogStatus::Failed { .. } => theme.error_text(&result.status.label()),
    };
    format!("{} {} ... {}", progress, result.relative, label)
}

fn print_summary(theme: &Theme, run: &BatchRun) {
    println!();
    println!(
        "{}",
        theme.primary_text(&format!(
            "{} ({} worker{}, {})",
            run.report.summary(),
            run.workers,
            if run.workers == 1 { "" } else { "s" },
            run.logs_dir.display()
        ))
    );

    if !run.simulator_warnings.is_empty() {
        println!(
            "{}",
            theme.warning_text(&format!(
                "{} simulator warning{}:",
                run.simulator_warnings.len(),
                if run.simulator_warnings.len() == 1 { "" } else { "s" }
            ))
        );
        for warning in &run.simulator_warnings {
            println!(
                "  {} {}",
                theme.secondary_text(&warning.source.display().to_string()),
                warning.line
            );
        }
    }
}
