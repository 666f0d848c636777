// Copyright (C) Brian G. Milnes 2025

//! Composite edits in original-document coordinates
//!
//! An edit is one insertion and up to two deletions. All offsets refer to the
//! text the edit was computed from, so applying the insertion never shifts a
//! pending deletion. `Edit::apply` checks the whole edit first and then builds
//! the new text in one pass: either everything applies or nothing does.

pub mod edit {
    use std::fmt;
    use anyhow::{bail, Result};

    /// Half-open byte range `[start, start + len)` marked for deletion
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Span {
        pub start: usize,
        pub len: usize,
    }

    impl Span {
        pub fn new(start: usize, len: usize) -> Self {
            Span { start, len }
        }

        /// Span covering `[start, end)`; empty when `end <= start`
        pub fn between(start: usize, end: usize) -> Self {
            Span {
                start,
                len: end.saturating_sub(start),
            }
        }

        pub fn end(&self) -> usize {
            self.start + self.len
        }

        pub fn is_empty(&self) -> bool {
            self.len == 0
        }

        pub fn overlaps(&self, other: &Span) -> bool {
            self.start < other.end() && other.start < self.end()
        }

        /// Offset lies inside the span, not on either boundary
        pub fn strictly_contains(&self, offset: usize) -> bool {
            self.start < offset && offset < self.end()
        }
    }

    impl fmt::Display for Span {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[{}, {})", self.start, self.end())
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Insertion {
        pub offset: usize,
        pub text: String,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Edit {
        pub insertion: Insertion,
        pub deletions: Vec<Span>,
    }

    impl Edit {
        /// Build an edit; empty deletions are dropped
        pub fn new(offset: usize, text: String, deletions: impl IntoIterator<Item = Span>) -> Self {
            Edit {
                insertion: Insertion { offset, text },
                deletions: deletions.into_iter().filter(|span| !span.is_empty()).collect(),
            }
        }

        /// Check the edit against the text it will be applied to
        pub fn validate(&self, text: &str) -> Result<()> {
            let offset = self.insertion.offset;
            if offset > text.len() || !text.is_char_boundary(offset) {
                bail!("Insertion offset {offset} is not a valid position in a {}-byte document", text.len());
            }

            for (index, span) in self.deletions.iter().enumerate() {
                if span.end() > text.len() {
                    bail!("Deletion {span} extends past the end of a {}-byte document", text.len());
                }
                if !text.is_char_boundary(span.start) || !text.is_char_boundary(span.end()) {
                    bail!("Deletion {span} does not fall on character boundaries");
                }
                if span.strictly_contains(offset) {
                    bail!("Insertion offset {offset} lies inside deletion {span}");
                }
                if let Some(other) = self.deletions[index + 1..].iter().find(|other| span.overlaps(other)) {
                    bail!("Deletions {span} and {other} overlap");
                }
            }
            Ok(())
        }

        /// Produce the edited text
        pub fn apply(&self, text: &str) -> Result<String> {
            self.validate(text)?;

            let mut spans = self.deletions.clone();
            spans.sort();

            let offset = self.insertion.offset;
            let mut out = String::with_capacity(text.len() + self.insertion.text.len());
            let mut pos = 0;
            let mut inserted = false;

            for span in &spans {
                if !inserted && offset <= span.start {
                    out.push_str(&text[pos..offset]);
                    out.push_str(&self.insertion.text);
                    pos = offset;
                    inserted = true;
                }
                out.push_str(&text[pos..span.start]);
                pos = span.end();
            }

            if !inserted {
                out.push_str(&text[pos..offset]);
                out.push_str(&self.insertion.text);
                pos = offset;
            }
            out.push_str(&text[pos..]);
            Ok(out)
        }
    }

}
