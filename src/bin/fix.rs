// Copyright (C) Brian G. Milnes 2025

//! Fix: sort and group using directives
//!
//! Rewrites every eligible file under the given paths so its using directives
//! are sorted, grouped and placed as configured.
//!
//! Usage:
//!   usingfmt-fix src                       # defaults
//!   usingfmt-fix -c usingfmt.json src      # settings from a config file
//!   usingfmt-fix --dry-run --inside-namespace --groups "System=System" .
//!
//! Binary: usingfmt-fix

use anyhow::Result;
use clap::Parser;
use rayon::prelude::*;
use usingfmt::{format_file, format_number, run_tool, FileOutcome, StandardArgs, ToolConfig};

#[derive(Parser)]
#[command(name = "usingfmt-fix")]
#[command(about = "Sort and group using directives in C# files", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: StandardArgs,

    /// Report what would change without writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Bad settings stop the run before any file is touched
    let config = cli.args.format_config()?;
    let files = cli.args.source_files()?;
    let base_dir = cli.args.base_dir();
    let dry_run = cli.dry_run;

    let tool = ToolConfig::new("usingfmt-fix", base_dir.clone()).with_logging(cli.args.log);

    let outcome = run_tool(tool, |logger| {
        if dry_run {
            logger.log("DRY RUN MODE: Will not modify files");
            logger.log("");
        }

        let results: Vec<_> = files
            .par_iter()
            .map(|file| (file, format_file(file, &config, !dry_run)))
            .collect();

        let mut already_correct = 0;
        for (file, result) in results {
            let rel_path = file.strip_prefix(&base_dir).unwrap_or(file.as_path());
            match result {
                Ok(report) => match report.outcome {
                    FileOutcome::Unchanged => already_correct += 1,
                    FileOutcome::Reformatted { first_line } => {
                        logger.report(rel_path, first_line, "Reordered using directives");
                    }
                },
                Err(e) => logger.fail(rel_path, &e),
            }
        }

        let verb = if dry_run { "would be reformatted" } else { "reformatted" };
        Ok(format!(
            "Summary: {} file(s) {verb}, {} already formatted, {} failed",
            format_number(logger.reported_files()),
            format_number(already_correct),
            format_number(logger.failed_files())
        ))
    })?;

    if outcome.failed_files > 0 {
        std::process::exit(1);
    }
    Ok(())
}
