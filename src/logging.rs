// Copyright (C) Brian G. Milnes 2025

//! Run log for usingfmt tools
//!
//! Every tool reports per-file results as `path:line: message` lines, the form
//! editor compile modes jump to. The same lines can be mirrored to
//! logs/<tool-name>/<YYYY-MM-DD>/run-<HH-MM-SS>.log, which ends with a run
//! summary listing how many files were reported and how many failed.

pub mod logging {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use chrono::{DateTime, Local};
    use anyhow::Result;

    const LOG_ROOT: &str = "logs";

    pub struct ToolLogger {
        log_file: Option<fs::File>,
        log_path: Option<PathBuf>,
        start_time: DateTime<Local>,
        /// `path:line:` lines written so far
        reported_files: usize,
        /// Files that could not be read, formatted or written
        failed_files: usize,
    }

    impl ToolLogger {
        /// Console only
        pub fn new_disabled() -> Self {
            ToolLogger {
                log_file: None,
                log_path: None,
                start_time: Local::now(),
                reported_files: 0,
                failed_files: 0,
            }
        }

        /// Console plus a run log under logs/
        pub fn new(tool_name: &str) -> Self {
            Self::in_dir(Path::new(LOG_ROOT), tool_name)
        }

        /// Console plus a run log under `root`. A log that cannot be created
        /// leaves a console-only logger.
        pub fn in_dir(root: &Path, tool_name: &str) -> Self {
            let mut logger = Self::new_disabled();
            match Self::create_log_file(root, tool_name, &logger.start_time) {
                Ok((file, path)) => {
                    logger.log_file = Some(file);
                    logger.log_path = Some(path);
                }
                Err(e) => {
                    eprintln!("Warning: Could not create run log under {}: {e}", root.display());
                    eprintln!("Continuing without a run log...");
                }
            }
            logger
        }

        fn create_log_file(root: &Path, tool_name: &str, start_time: &DateTime<Local>) -> Result<(fs::File, PathBuf)> {
            let log_dir = root.join(tool_name).join(start_time.format("%Y-%m-%d").to_string());
            fs::create_dir_all(&log_dir)?;

            let log_path = log_dir.join(format!("run-{}.log", start_time.format("%H-%M-%S")));
            let log_file = fs::File::create(&log_path)?;
            Ok((log_file, log_path))
        }

        pub fn log(&mut self, message: &str) {
            println!("{message}");
            self.log_silent(message);
        }

        /// One reported file: `path:line: message`
        pub fn report(&mut self, path: &Path, line: usize, message: &str) {
            self.reported_files += 1;
            self.log(&format!("{}:{line}: {message}", path.display()));
        }

        /// A file the tool gave up on; goes to stderr
        pub fn fail(&mut self, path: &Path, error: &anyhow::Error) {
            self.failed_files += 1;
            self.warn(&format!("{}: {error:#}", path.display()));
        }

        pub fn warn(&mut self, message: &str) {
            eprintln!("Warning: {message}");
            self.log_silent(&format!("Warning: {message}"));
        }

        /// Run log only
        pub fn log_silent(&mut self, message: &str) {
            if let Some(ref mut file) = self.log_file {
                let _ = writeln!(file, "{message}");
            }
        }

        pub fn log_path(&self) -> Option<&Path> {
            self.log_path.as_deref()
        }

        pub fn reported_files(&self) -> usize {
            self.reported_files
        }

        pub fn failed_files(&self) -> usize {
            self.failed_files
        }

        /// Close the run log with the summary, counts and timing
        pub fn finalize(&mut self, summary: &str) {
            let end_time = Local::now();
            let duration = end_time.signed_duration_since(self.start_time);

            self.log_silent("");
            self.log_silent("=== Run Summary ===");
            self.log_silent(summary);
            self.log_silent(&format!("Files reported: {}", self.reported_files));
            self.log_silent(&format!("Files failed: {}", self.failed_files));
            self.log_silent(&format!("Started: {}", self.start_time.format("%Y-%m-%d %H:%M:%S")));
            self.log_silent(&format!("Ended: {}", end_time.format("%Y-%m-%d %H:%M:%S")));
            self.log_silent(&format!("Duration: {}ms", duration.num_milliseconds()));

            if let Some(path) = self.log_path.clone() {
                self.log(&format!("Log saved to: {}", path.display()));
            }
        }
    }

    impl Drop for ToolLogger {
        fn drop(&mut self) {
            if let Some(ref mut file) = self.log_file {
                let _ = file.flush();
            }
        }
    }

}
