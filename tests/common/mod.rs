// Copyright (C) Brian G. Milnes 2025

//! Common test utilities for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use usingfmt::{format_text, FormatConfig, SortStandard};

/// Default settings with alphabetical order, handy for predictable output
pub fn alphabetical() -> FormatConfig {
    FormatConfig {
        primary_sort: SortStandard::Alphabet,
        ..FormatConfig::default()
    }
}

/// Format and return the new text, or the input when there is nothing to do
pub fn reformat(text: &str, config: &FormatConfig) -> Result<String> {
    Ok(format_text(text, config)?.unwrap_or_else(|| text.to_string()))
}

/// Trimmed directive lines of a file, sorted, for multiset comparison
pub fn directive_multiset(text: &str) -> Vec<String> {
    let mut directives: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("using "))
        .map(str::to_string)
        .collect();
    directives.sort();
    directives
}

/// A fresh scratch directory under the system temp dir
pub fn scratch_dir(name: &str) -> Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("usingfmt-{name}-{}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

/// Parse a count printed with thousands separators
pub fn parse_number(s: &str) -> Result<usize> {
    let cleaned = s.replace(",", "");
    cleaned.parse::<usize>()
        .context(format!("Failed to parse number: {s}"))
}

/// The number printed just before `label` on a summary line
pub fn count_before(summary: &str, label: &str) -> Result<usize> {
    let (prefix, _) = summary
        .split_once(label)
        .context(format!("No '{label}' in: {summary}"))?;
    let number = prefix
        .split_whitespace()
        .last()
        .context(format!("No number before '{label}' in: {summary}"))?;
    parse_number(number)
}

/// Files used by the property tests
pub fn sample_sources() -> Vec<&'static str> {
    vec![
        "using System.Linq;\nusing System;\nusing A.B;\n\nclass C {}\n",
        "// Copyright\n\nusing System.Text;\nusing System;\n\nnamespace App\n{\n    class C {}\n}\n",
        "using System;\n\nnamespace App\n{\n    using App.Models;\n    using Microsoft.Extensions.Logging;\n\n    public class C {}\n}\n",
        "namespace App;\n\nusing B;\nusing A;\n\npublic class C {}\n",
        "using Zed.Long.Name;\n// for A\nusing A;\nusing static System.Math;\nusing IO = System.IO;\n\n// Entry point\nclass Program {}\n",
        "using MyApp;\nusing System.IO;\nusing Microsoft.Win32;\nusing MyApp.Data;\nusing System;\n",
        "using B;\r\nusing A;\r\n\r\nnamespace App\r\n{\r\n\tclass C {}\r\n}\r\n",
    ]
}
