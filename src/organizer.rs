// Copyright (C) Brian G. Milnes 2025

//! Directive organizer: sort, indent, group
//!
//! Sorting happens once over the whole list (primary standard, then the
//! secondary, then original order). Buckets are cut from the sorted list, so
//! each group keeps the global order of its members.

pub mod organizer {
    use anyhow::Result;
    use crate::directive::directive::Directive;
    use crate::sort_group::sort_group::{GroupMatcher, SortGroup};
    use crate::sort_standard::sort_standard::SortStandard;

    /// Produce the final block, one entry per line. Group separators are empty strings.
    pub fn organize(
        directives: Vec<Directive>,
        primary: SortStandard,
        secondary: SortStandard,
        indent: &str,
        groups: &[SortGroup],
        blank_line_between_groups: bool,
    ) -> Result<Vec<String>> {
        let matcher = GroupMatcher::new(groups)?;
        Ok(organize_with(directives, primary, secondary, indent, &matcher, blank_line_between_groups))
    }

    /// Same as `organize` with groups already compiled
    pub fn organize_with(
        mut directives: Vec<Directive>,
        primary: SortStandard,
        secondary: SortStandard,
        indent: &str,
        matcher: &GroupMatcher,
        blank_line_between_groups: bool,
    ) -> Vec<String> {
        for directive in &mut directives {
            directive.trim_end();
        }

        // Vec::sort_by is stable: equal keys keep their source order
        directives.sort_by(|a, b| SortStandard::chained(primary, secondary, a, b));

        let mut buckets: Vec<Vec<String>> = vec![Vec::new(); matcher.bucket_count()];
        for directive in &directives {
            let bucket = &mut buckets[matcher.bucket_of(directive)];
            for comment in directive.leading_comments() {
                bucket.push(format!("{indent}{comment}"));
            }
            bucket.push(format!("{indent}{}", directive.text()));
        }

        let mut lines = Vec::new();
        for bucket in buckets.into_iter().filter(|b| !b.is_empty()) {
            if blank_line_between_groups && !lines.is_empty() {
                lines.push(String::new());
            }
            lines.extend(bucket);
        }
        lines
    }
}
