// Copyright (C) Brian G. Milnes 2025

//! Review: report files whose using directives are out of order
//!
//! Nothing is written. Exit code 1 means at least one file would change.
//!
//! Usage:
//!   usingfmt-review src
//!   usingfmt-review -c usingfmt.json .
//!
//! Binary: usingfmt-review

use anyhow::Result;
use clap::Parser;
use rayon::prelude::*;
use usingfmt::{format_file, format_number, run_tool, FileOutcome, StandardArgs, ToolConfig};

#[derive(Parser)]
#[command(name = "usingfmt-review")]
#[command(about = "Check that using directives in C# files are sorted and grouped", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: StandardArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.args.format_config()?;
    let files = cli.args.source_files()?;
    let base_dir = cli.args.base_dir();

    let tool = ToolConfig::new("usingfmt-review", base_dir.clone()).with_logging(cli.args.log);

    let outcome = run_tool(tool, |logger| {
        let results: Vec<_> = files
            .par_iter()
            .map(|file| (file, format_file(file, &config, false)))
            .collect();

        for (file, result) in results {
            let rel_path = file.strip_prefix(&base_dir).unwrap_or(file.as_path());
            match result {
                Ok(report) => {
                    if let FileOutcome::Reformatted { first_line } = report.outcome {
                        logger.report(rel_path, first_line, "using directives are not in canonical order");
                    }
                }
                Err(e) => logger.fail(rel_path, &e),
            }
        }

        let violations = logger.reported_files();
        if violations == 0 {
            logger.log("✓ All using directives are in canonical order");
        } else {
            logger.log("");
            logger.log(&format!("✗ Found {} file(s) out of order", format_number(violations)));
        }

        Ok(format!(
            "Summary: {} files checked, {} files out of order, {} failed",
            format_number(files.len()),
            format_number(violations),
            format_number(logger.failed_files())
        ))
    })?;

    if outcome.reported_files > 0 || outcome.failed_files > 0 {
        std::process::exit(1);
    }
    Ok(())
}
