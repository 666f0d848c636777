// Copyright (C) Brian G. Milnes 2025

//! usingfmt - reorganize C# using directives
//!
//! Finds the using directives at the top of a source file (before the
//! namespace declaration or inside its body), sorts them by configurable
//! standards, groups them by user-defined sort groups, and puts the block
//! back either before or inside the namespace declaration.
//!
//! The core is line oriented, not a parser: one pass classifies lines and
//! tracks the regions to delete, then a single composite edit (one insertion,
//! up to two deletions in original coordinates) rewrites the file.

pub mod document;
pub mod directive;
pub mod sort_standard;
pub mod sort_group;
pub mod config;
pub mod edit;
pub mod scanner;
pub mod organizer;
pub mod formatter;
pub mod args;
pub mod logging;
pub mod tool_runner;

// Re-export commonly used items
pub use document::document::{Document, Line};
pub use directive::directive::Directive;
pub use sort_standard::sort_standard::SortStandard;
pub use sort_group::sort_group::{decode_sort_groups, encode_sort_groups, GroupMatcher, SortGroup};
pub use config::config::FormatConfig;
pub use edit::edit::{Edit, Insertion, Span};
pub use scanner::scanner::{scan, Scan};
pub use organizer::organizer::organize;
pub use formatter::formatter::{format, format_file, format_text, FileOutcome, FileReport};
pub use args::args::{find_source_files, format_number, is_eligible, StandardArgs};
pub use logging::logging::ToolLogger;
pub use tool_runner::tool_runner::{run_tool, RunOutcome, ToolConfig};
