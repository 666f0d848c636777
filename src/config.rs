// Copyright (C) Brian G. Milnes 2025

//! Format configuration
//!
//! The six settings a formatting run reads. A configuration file is JSON with
//! kebab-case keys; every key is required and unknown keys are rejected, so a
//! loaded file never falls back to defaults. Files are checked against
//! `schemas/usingfmt-config.schema.json` before deserialization.

pub mod config {
    use std::fs;
    use std::path::Path;
    use anyhow::{bail, Context, Result};
    use serde::{Deserialize, Serialize};
    use serde_json::Value;
    use crate::sort_group::sort_group::{validate_groups, SortGroup};
    use crate::sort_standard::sort_standard::SortStandard;

    pub const CONFIG_SCHEMA: &str = include_str!("../schemas/usingfmt-config.schema.json");

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case", deny_unknown_fields)]
    pub struct FormatConfig {
        /// Place directives inside the namespace body instead of before it
        pub place_inside_namespace: bool,
        pub primary_sort: SortStandard,
        /// Tie-break for the primary sort
        pub secondary_sort: SortStandard,
        /// Ordered groups; sorting happens within each group
        pub sort_groups: Vec<SortGroup>,
        pub blank_line_between_groups: bool,
        /// Leave one empty line after the directive block
        pub trailing_blank_line: bool,
    }

    impl Default for FormatConfig {
        fn default() -> Self {
            FormatConfig {
                place_inside_namespace: false,
                primary_sort: SortStandard::Length,
                secondary_sort: SortStandard::None,
                sort_groups: Vec::new(),
                blank_line_between_groups: false,
                trailing_blank_line: true,
            }
        }
    }

    impl FormatConfig {
        /// Load a configuration file
        pub fn from_file(path: &Path) -> Result<Self> {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            Self::from_json_str(&content)
                .with_context(|| format!("Invalid config file: {}", path.display()))
        }

        /// Parse, check against the schema, deserialize and validate
        pub fn from_json_str(json: &str) -> Result<Self> {
            let value: Value = serde_json::from_str(json).context("Failed to parse config JSON")?;

            let schema: Value = serde_json::from_str(CONFIG_SCHEMA).context("Failed to parse config schema")?;
            let validator = jsonschema::validator_for(&schema).context("Failed to compile config schema")?;
            let errors: Vec<String> = validator.iter_errors(&value).map(|e| e.to_string()).collect();
            if !errors.is_empty() {
                bail!("Config does not match schema:\n  - {}", errors.join("\n  - "));
            }

            let config: FormatConfig = serde_json::from_value(value).context("Failed to deserialize config")?;
            config.validate()?;
            Ok(config)
        }

        pub fn to_json(&self) -> Result<String> {
            serde_json::to_string_pretty(self).context("Failed to serialize config")
        }

        /// Write as pretty JSON, creating parent directories
        pub fn save(&self, path: &Path) -> Result<()> {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
                }
            }
            let mut json = self.to_json()?;
            json.push('\n');
            fs::write(path, json).with_context(|| format!("Failed to write config file: {}", path.display()))
        }

        /// Preconditions a run checks before touching any document
        pub fn validate(&self) -> Result<()> {
            validate_groups(&self.sort_groups).context("Invalid sort groups")
        }
    }
}
