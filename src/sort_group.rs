// Copyright (C) Brian G. Milnes 2025

//! Sort groups: user-ordered buckets of directives
//!
//! A group has a name and member patterns. A directive belongs to the first
//! group with a matching pattern; the rest fall into an implicit catch-all
//! group after the configured ones.
//!
//! Patterns:
//! - `System` matches `System` and `System.*` (segment-aware prefix)
//! - `re:^Microsoft\.(Extensions|AspNetCore)` matches by regular expression
//!
//! Groups also have a compact single-string form for flat settings stores:
//! `System=System,Microsoft;Local=MyApp`. `\` escapes `;`, `,`, `=` and `\`.

pub mod sort_group {
    use std::collections::HashSet;
    use anyhow::{anyhow, bail, Context, Result};
    use regex::Regex;
    use serde::{Deserialize, Serialize};
    use crate::directive::directive::Directive;

    pub const REGEX_PATTERN_PREFIX: &str = "re:";

    const GROUP_SEPARATOR: char = ';';
    const PATTERN_SEPARATOR: char = ',';
    const NAME_SEPARATOR: char = '=';
    const ESCAPE: char = '\\';

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct SortGroup {
        pub name: String,
        pub patterns: Vec<String>,
    }

    impl SortGroup {
        pub fn new(name: &str, patterns: &[&str]) -> Self {
            SortGroup {
                name: name.to_string(),
                patterns: patterns.iter().map(|p| p.to_string()).collect(),
            }
        }
    }

    #[derive(Debug)]
    enum GroupPattern {
        Prefix(String),
        Regex(Regex),
    }

    impl GroupPattern {
        fn compile(pattern: &str) -> Result<Self> {
            match pattern.strip_prefix(REGEX_PATTERN_PREFIX) {
                Some(expr) => {
                    let regex = Regex::new(expr)
                        .with_context(|| format!("Invalid regular expression in pattern '{pattern}'"))?;
                    Ok(GroupPattern::Regex(regex))
                }
                None => Ok(GroupPattern::Prefix(pattern.to_string())),
            }
        }

        fn matches(&self, name: &str) -> bool {
            match self {
                GroupPattern::Prefix(prefix) => match name.strip_prefix(prefix.as_str()) {
                    Some(rest) => rest.is_empty() || rest.starts_with('.'),
                    None => false,
                },
                GroupPattern::Regex(regex) => regex.is_match(name),
            }
        }
    }

    /// Sort groups compiled for matching
    #[derive(Debug)]
    pub struct GroupMatcher {
        groups: Vec<Vec<GroupPattern>>,
    }

    impl GroupMatcher {
        /// Validate and compile the groups
        pub fn new(groups: &[SortGroup]) -> Result<Self> {
            validate_groups(groups)?;
            let groups = groups
                .iter()
                .map(|group| group.patterns.iter().map(|p| GroupPattern::compile(p)).collect::<Result<Vec<_>>>())
                .collect::<Result<Vec<_>>>()?;
            Ok(GroupMatcher { groups })
        }

        /// Configured groups plus the catch-all
        pub fn bucket_count(&self) -> usize {
            self.groups.len() + 1
        }

        /// Index of the first matching group; the catch-all is last
        pub fn bucket_of(&self, directive: &Directive) -> usize {
            let name = directive.name();
            self.groups
                .iter()
                .position(|patterns| patterns.iter().any(|p| p.matches(name)))
                .unwrap_or(self.groups.len())
        }
    }

    /// Check group names and patterns, and that every regex compiles
    pub fn validate_groups(groups: &[SortGroup]) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, group) in groups.iter().enumerate() {
            let name = group.name.trim();
            if name.is_empty() {
                bail!("Sort group #{} has an empty name", index + 1);
            }
            if !seen.insert(name) {
                bail!("Sort group '{name}' is defined more than once");
            }
            if group.patterns.is_empty() {
                bail!("Sort group '{name}' has no patterns");
            }
            for pattern in &group.patterns {
                if pattern.trim().is_empty() {
                    bail!("Sort group '{name}' has an empty pattern");
                }
                GroupPattern::compile(pattern).with_context(|| format!("Sort group '{name}'"))?;
            }
        }
        Ok(())
    }

    /// Encode groups as one flat string
    pub fn encode_sort_groups(groups: &[SortGroup]) -> String {
        groups
            .iter()
            .map(|group| {
                let patterns: Vec<String> = group.patterns.iter().map(|p| escape(p)).collect();
                format!("{}{NAME_SEPARATOR}{}", escape(&group.name), patterns.join(&PATTERN_SEPARATOR.to_string()))
            })
            .collect::<Vec<_>>()
            .join(&GROUP_SEPARATOR.to_string())
    }

    /// Decode the flat string form; an empty string is no groups
    pub fn decode_sort_groups(encoded: &str) -> Result<Vec<SortGroup>> {
        let mut groups = Vec::new();
        if encoded.trim().is_empty() {
            return Ok(groups);
        }

        for entry in split_unescaped(encoded, GROUP_SEPARATOR) {
            if entry.trim().is_empty() {
                continue;
            }
            let mut parts = split_unescaped(&entry, NAME_SEPARATOR).into_iter();
            let name = parts.next().ok_or_else(|| anyhow!("Empty sort group entry"))?;
            let patterns = parts
                .next()
                .ok_or_else(|| anyhow!("Sort group '{}' has no '{NAME_SEPARATOR}' before its patterns", unescape(&name)))?;
            if parts.next().is_some() {
                bail!("Sort group '{}' has more than one unescaped '{NAME_SEPARATOR}'", unescape(&name));
            }

            groups.push(SortGroup {
                name: unescape(name.trim()),
                patterns: split_unescaped(&patterns, PATTERN_SEPARATOR)
                    .iter()
                    .map(|p| unescape(p.trim()))
                    .filter(|p| !p.is_empty())
                    .collect(),
            });
        }

        validate_groups(&groups)?;
        Ok(groups)
    }

    fn escape(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if matches!(c, GROUP_SEPARATOR | PATTERN_SEPARATOR | NAME_SEPARATOR | ESCAPE) {
                out.push(ESCAPE);
            }
            out.push(c);
        }
        out
    }

    fn unescape(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == ESCAPE {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Split on `separator`, leaving escape sequences intact for a later pass
    fn split_unescaped(text: &str, separator: char) -> Vec<String> {
        let mut parts = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == ESCAPE {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            } else if c == separator {
                parts.push(std::mem::take(&mut current));
            } else {
                current.push(c);
            }
        }
        parts.push(current);
        parts
    }

}
