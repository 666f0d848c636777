// Copyright (C) Brian G. Milnes 2025

//! Sort standards for ordering using directives

pub mod sort_standard {
    use std::cmp::Ordering;
    use std::fmt;
    use clap::ValueEnum;
    use serde::{Deserialize, Serialize};
    use crate::directive::directive::Directive;

    /// A named comparison strategy for directives
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
    #[serde(rename_all = "kebab-case")]
    pub enum SortStandard {
        /// No ordering; everything compares equal
        None,
        /// Shorter directive text first
        #[default]
        Length,
        /// Ordinal (code point) order of the directive text
        Alphabet,
        /// Fewer `.`-separated name segments first
        SegmentCount,
    }

    impl SortStandard {
        pub fn compare(self, a: &Directive, b: &Directive) -> Ordering {
            match self {
                SortStandard::None => Ordering::Equal,
                SortStandard::Length => a.text().chars().count().cmp(&b.text().chars().count()),
                SortStandard::Alphabet => a.text().cmp(b.text()),
                SortStandard::SegmentCount => a.segment_count().cmp(&b.segment_count()),
            }
        }

        /// Primary standard with the secondary as tie-break
        pub fn chained(primary: SortStandard, secondary: SortStandard, a: &Directive, b: &Directive) -> Ordering {
            primary.compare(a, b).then_with(|| secondary.compare(a, b))
        }
    }

    impl fmt::Display for SortStandard {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let name = match self {
                SortStandard::None => "none",
                SortStandard::Length => "length",
                SortStandard::Alphabet => "alphabet",
                SortStandard::SegmentCount => "segment-count",
            };
            f.write_str(name)
        }
    }

}
