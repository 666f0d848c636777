// Copyright (C) Brian G. Milnes 2025

//! Common frame for the usingfmt binaries
//!
//! A run prints "Entering directory" so editor compile modes resolve the
//! `path:line:` lines that follow, then the tool's summary and the elapsed
//! time. The file counts collected by the logger come back to the caller,
//! which picks the exit code from them.

pub mod tool_runner {
    use std::path::PathBuf;
    use std::time::Instant;
    use anyhow::Result;
    use crate::logging::logging::ToolLogger;

    pub struct ToolConfig {
        /// Binary name; also the run log directory
        pub tool_name: String,
        /// Directory shown in "Entering directory"
        pub base_dir: PathBuf,
        pub enable_logging: bool,
    }

    impl ToolConfig {
        pub fn new(tool_name: &str, base_dir: PathBuf) -> Self {
            ToolConfig {
                tool_name: tool_name.to_string(),
                base_dir,
                enable_logging: false,
            }
        }

        pub fn with_logging(mut self, enable_logging: bool) -> Self {
            self.enable_logging = enable_logging;
            self
        }
    }

    /// File counts of a finished run
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RunOutcome {
        /// Files with a `path:line:` report (reformatted or out of order)
        pub reported_files: usize,
        pub failed_files: usize,
    }

    /// Run `tool_fn` inside the standard frame. It returns the summary line.
    ///
    /// ```no_run
    /// use usingfmt::{run_tool, ToolConfig};
    /// # fn main() -> anyhow::Result<()> {
    /// let config = ToolConfig::new("usingfmt-review", std::path::PathBuf::from("."));
    /// let outcome = run_tool(config, |logger| {
    ///     logger.report(std::path::Path::new("src/Program.cs"), 1, "using directives are not in canonical order");
    ///     Ok("Summary: 1 files checked, 1 files out of order, 0 failed".to_string())
    /// })?;
    /// assert_eq!(outcome.reported_files, 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run_tool<F>(config: ToolConfig, tool_fn: F) -> Result<RunOutcome>
    where
        F: FnOnce(&mut ToolLogger) -> Result<String>,
    {
        let start = Instant::now();

        let mut logger = if config.enable_logging {
            ToolLogger::new(&config.tool_name)
        } else {
            ToolLogger::new_disabled()
        };

        logger.log(&format!("Entering directory '{}'", config.base_dir.display()));
        logger.log("");

        let summary = tool_fn(&mut logger)?;

        logger.log("");
        logger.log(&summary);
        logger.log(&format!("Completed in {}ms", start.elapsed().as_millis()));

        if config.enable_logging {
            logger.finalize(&summary);
        }

        Ok(RunOutcome {
            reported_files: logger.reported_files(),
            failed_files: logger.failed_files(),
        })
    }
}
