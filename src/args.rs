// Copyright (C) Brian G. Milnes 2025

//! Shared command-line arguments and file discovery for usingfmt tools

pub mod args {
    use std::path::{Path, PathBuf};
    use anyhow::{bail, Result};
    use clap::Args;
    use walkdir::{DirEntry, WalkDir};
    use crate::config::config::FormatConfig;
    use crate::sort_group::sort_group::decode_sort_groups;
    use crate::sort_standard::sort_standard::SortStandard;

    /// File extension of eligible source files
    pub const SOURCE_EXTENSION: &str = "cs";

    /// Build output directories never worth walking
    const SKIPPED_DIRS: &[&str] = &["bin", "obj", "target", "node_modules"];

    /// Arguments every usingfmt tool accepts
    #[derive(Args, Debug, Clone)]
    pub struct StandardArgs {
        /// Files or directories to process
        #[arg(default_value = ".")]
        pub paths: Vec<PathBuf>,

        /// JSON configuration file (see usingfmt-config init)
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Place directives inside the namespace body
        #[arg(long, overrides_with = "outside_namespace")]
        pub inside_namespace: bool,

        /// Place directives before the namespace declaration
        #[arg(long, overrides_with = "inside_namespace")]
        pub outside_namespace: bool,

        /// Primary sort standard
        #[arg(long, value_enum)]
        pub sort_by: Option<SortStandard>,

        /// Secondary (tie-break) sort standard
        #[arg(long, value_enum)]
        pub then_by: Option<SortStandard>,

        /// Sort groups in compact form, e.g. "System=System,Microsoft;Local=MyApp"
        #[arg(long)]
        pub groups: Option<String>,

        /// Separate sort groups with a blank line
        #[arg(long, overrides_with = "no_blank_line_between_groups")]
        pub blank_line_between_groups: bool,

        /// Do not separate sort groups
        #[arg(long, overrides_with = "blank_line_between_groups")]
        pub no_blank_line_between_groups: bool,

        /// Leave one empty line after the directive block
        #[arg(long, overrides_with = "no_trailing_blank_line")]
        pub trailing_blank_line: bool,

        /// Do not leave an empty line after the directive block
        #[arg(long, overrides_with = "trailing_blank_line")]
        pub no_trailing_blank_line: bool,

        /// Write a run log under logs/<tool>/<date>/
        #[arg(long)]
        pub log: bool,
    }

    impl StandardArgs {
        /// The configuration file (or the defaults) with command-line overrides applied
        pub fn format_config(&self) -> Result<FormatConfig> {
            let mut config = match &self.config {
                Some(path) => FormatConfig::from_file(path)?,
                None => FormatConfig::default(),
            };

            if let Some(inside) = switch(self.inside_namespace, self.outside_namespace) {
                config.place_inside_namespace = inside;
            }
            if let Some(sort_by) = self.sort_by {
                config.primary_sort = sort_by;
            }
            if let Some(then_by) = self.then_by {
                config.secondary_sort = then_by;
            }
            if let Some(groups) = &self.groups {
                config.sort_groups = decode_sort_groups(groups)?;
            }
            if let Some(blank) = switch(self.blank_line_between_groups, self.no_blank_line_between_groups) {
                config.blank_line_between_groups = blank;
            }
            if let Some(trailing) = switch(self.trailing_blank_line, self.no_trailing_blank_line) {
                config.trailing_blank_line = trailing;
            }

            config.validate()?;
            Ok(config)
        }

        /// Directory shown in "Entering directory" lines
        pub fn base_dir(&self) -> PathBuf {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        }

        /// Eligible files under the given paths, sorted and deduplicated
        pub fn source_files(&self) -> Result<Vec<PathBuf>> {
            find_source_files(&self.paths)
        }
    }

    /// A setting given as an on/off flag pair; `None` keeps the configured value
    fn switch(on: bool, off: bool) -> Option<bool> {
        match (on, off) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }

    /// Only C# sources are ever formatted
    pub fn is_eligible(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
    }

    fn is_skipped_dir(entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || SKIPPED_DIRS.contains(&&*name)
    }

    /// Walk `paths`, collecting eligible files
    pub fn find_source_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for path in paths {
            if path.is_file() {
                if is_eligible(path) {
                    files.push(path.clone());
                }
                continue;
            }
            if !path.is_dir() {
                bail!("No such file or directory: {}", path.display());
            }

            for entry in WalkDir::new(path).follow_links(true).into_iter().filter_entry(|e| !is_skipped_dir(e)) {
                let entry = entry?;
                if entry.file_type().is_file() && is_eligible(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Format a count with thousands separators: 1234 -> "1,234"
    pub fn format_number(n: usize) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use clap::Parser;

        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            args: StandardArgs,
        }

        fn parse(argv: &[&str]) -> StandardArgs {
            TestCli::try_parse_from(std::iter::once("usingfmt-test").chain(argv.iter().copied()))
                .unwrap()
                .args
        }

        #[test]
        fn test_flags_override_config_file_both_ways() {
            let dir = std::env::temp_dir().join(format!("usingfmt-args-{}", std::process::id()));
            std::fs::create_dir_all(&dir).unwrap();
            let path = dir.join("usingfmt.json");
            FormatConfig {
                place_inside_namespace: true,
                blank_line_between_groups: true,
                trailing_blank_line: false,
                ..FormatConfig::default()
            }
            .save(&path)
            .unwrap();
            let path = path.to_string_lossy().to_string();

            let config = parse(&["-c", &path]).format_config().unwrap();
            assert!(config.place_inside_namespace);
            assert!(config.blank_line_between_groups);
            assert!(!config.trailing_blank_line);

            let config = parse(&["-c", &path, "--outside-namespace", "--no-blank-line-between-groups", "--trailing-blank-line"])
                .format_config()
                .unwrap();
            assert!(!config.place_inside_namespace);
            assert!(!config.blank_line_between_groups);
            assert!(config.trailing_blank_line);

            std::fs::remove_dir_all(&dir).unwrap();
        }

        #[test]
        fn test_last_flag_of_a_pair_wins() {
            let config = parse(&["--inside-namespace", "--outside-namespace"]).format_config().unwrap();
            assert!(!config.place_inside_namespace);
            let config = parse(&["--outside-namespace", "--inside-namespace"]).format_config().unwrap();
            assert!(config.place_inside_namespace);
        }

        #[test]
        fn test_format_number() {
            assert_eq!(format_number(0), "0");
            assert_eq!(format_number(999), "999");
            assert_eq!(format_number(1234), "1,234");
            assert_eq!(format_number(1234567), "1,234,567");
        }

        #[test]
        fn test_is_eligible() {
            assert!(is_eligible(Path::new("src/Program.cs")));
            assert!(!is_eligible(Path::new("src/main.rs")));
            assert!(!is_eligible(Path::new("Makefile")));
        }
    }
}
