// Copyright (C) Brian G. Milnes 2025

//! The format entry point
//!
//! `format` scans a document, organizes its directives and returns the single
//! composite edit (one insertion, up to two deletions) that puts the block in
//! place, or `None` when there is nothing to do. The configuration is checked
//! before the document is looked at.

pub mod formatter {
    use std::fs;
    use std::path::{Path, PathBuf};
    use anyhow::{Context, Result};
    use crate::config::config::FormatConfig;
    use crate::document::document::Document;
    use crate::edit::edit::{Edit, Span};
    use crate::organizer::organizer::organize_with;
    use crate::scanner::scanner::scan;
    use crate::sort_group::sort_group::GroupMatcher;

    /// Compute the edit that reorganizes the using directives of `text`
    pub fn format(text: &str, config: &FormatConfig) -> Result<Option<Edit>> {
        let matcher = GroupMatcher::new(&config.sort_groups).context("Invalid sort groups")?;

        let document = Document::new(text);
        if document.is_empty() {
            return Ok(None);
        }

        let scan = scan(&document, config.place_inside_namespace);
        if scan.is_empty() {
            return Ok(None);
        }

        let eol = document.line_ending();
        let lines = organize_with(
            scan.directives.clone(),
            config.primary_sort,
            config.secondary_sort,
            &scan.indent,
            &matcher,
            config.blank_line_between_groups,
        );

        let mut block = lines.join(eol);
        block.push_str(eol);

        let spans: Vec<Span> = scan.spans().collect();
        if config.trailing_blank_line && !remainder_is_blank(text, scan.insertion_offset, &spans) {
            block.push_str(eol);
        }

        let edit = Edit::new(scan.insertion_offset, block, spans);
        edit.validate(text).context("Computed an inconsistent edit")?;
        Ok(Some(edit))
    }

    /// Format and apply; `None` when there is nothing to do
    pub fn format_text(text: &str, config: &FormatConfig) -> Result<Option<String>> {
        match format(text, config)? {
            Some(edit) => Ok(Some(edit.apply(text)?)),
            None => Ok(None),
        }
    }

    /// True when nothing but whitespace survives after `from` once `spans` are deleted
    fn remainder_is_blank(text: &str, from: usize, spans: &[Span]) -> bool {
        let mut spans = spans.to_vec();
        spans.sort();

        let mut pos = from;
        for span in spans.iter().filter(|s| s.end() > from) {
            if span.start > pos && !text[pos..span.start].trim().is_empty() {
                return false;
            }
            pos = pos.max(span.end());
        }
        text[pos..].trim().is_empty()
    }

    /// Result of formatting one file
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum FileOutcome {
        /// Directives already in canonical form, or none at all
        Unchanged,
        /// Directives were (or would be) rewritten; first directive line is 1-based
        Reformatted { first_line: usize },
    }

    #[derive(Debug, Clone)]
    pub struct FileReport {
        pub path: PathBuf,
        pub outcome: FileOutcome,
    }

    /// Format one file, writing it back when `write` is set and it changed
    pub fn format_file(path: &Path, config: &FormatConfig, write: bool) -> Result<FileReport> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let outcome = match format(&source, config)? {
            None => FileOutcome::Unchanged,
            Some(edit) => {
                let fixed = edit.apply(&source)?;
                if fixed == source {
                    FileOutcome::Unchanged
                } else {
                    if write {
                        fs::write(path, &fixed)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                    }
                    let first_line = source[..edit.insertion.offset].matches('\n').count() + 1;
                    FileOutcome::Reformatted { first_line }
                }
            }
        };

        Ok(FileReport {
            path: path.to_path_buf(),
            outcome,
        })
    }

}
