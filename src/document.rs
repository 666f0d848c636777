// Copyright (C) Brian G. Milnes 2025

//! Line model over an immutable text snapshot
//!
//! A document is addressed by line. Every line knows its start offset, its
//! length without the terminator, and its length including the terminator.
//! Offsets are byte offsets into the original text.

pub mod document {
    const BYTE_ORDER_MARK: &str = "\u{feff}";

    /// A read-only snapshot of a source file
    #[derive(Debug, Clone, Copy)]
    pub struct Document<'a> {
        text: &'a str,
        body_start: usize,
        line_ending: &'static str,
    }

    impl<'a> Document<'a> {
        pub fn new(text: &'a str) -> Self {
            let body_start = if text.starts_with(BYTE_ORDER_MARK) {
                BYTE_ORDER_MARK.len()
            } else {
                0
            };

            // The first terminator decides the line ending of emitted text
            let line_ending = match text.find('\n') {
                Some(pos) if pos > 0 && text.as_bytes()[pos - 1] == b'\r' => "\r\n",
                _ => "\n",
            };

            Document {
                text,
                body_start,
                line_ending,
            }
        }

        pub fn text(&self) -> &'a str {
            self.text
        }

        pub fn len(&self) -> usize {
            self.text.len()
        }

        pub fn is_empty(&self) -> bool {
            self.text.is_empty()
        }

        /// "\r\n" when the file uses CRLF, "\n" otherwise
        pub fn line_ending(&self) -> &'static str {
            self.line_ending
        }

        /// Iterate lines in order. A leading byte-order mark is skipped.
        pub fn lines(&self) -> Lines<'a> {
            Lines {
                text: self.text,
                pos: self.body_start,
            }
        }
    }

    /// One line of a document
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Line<'a> {
        /// Byte offset of the first character
        pub start: usize,
        /// Line text without the terminator
        pub text: &'a str,
        /// Length including "\n" or "\r\n"
        pub length_including_line_break: usize,
    }

    impl<'a> Line<'a> {
        pub fn len(&self) -> usize {
            self.text.len()
        }

        pub fn is_empty(&self) -> bool {
            self.text.is_empty()
        }

        /// Offset just past the terminator, where the next line starts
        pub fn next_start(&self) -> usize {
            self.start + self.length_including_line_break
        }

        /// Leading whitespace of the line
        pub fn indentation(&self) -> &'a str {
            let trimmed = self.text.trim_start();
            &self.text[..self.text.len() - trimmed.len()]
        }
    }

    pub struct Lines<'a> {
        text: &'a str,
        pos: usize,
    }

    impl<'a> Iterator for Lines<'a> {
        type Item = Line<'a>;

        fn next(&mut self) -> Option<Line<'a>> {
            if self.pos >= self.text.len() {
                return None;
            }

            let start = self.pos;
            let rest = &self.text[start..];
            let (raw, consumed) = match rest.find('\n') {
                Some(nl) => (&rest[..nl], nl + 1),
                None => (rest, rest.len()),
            };
            let text = raw.strip_suffix('\r').unwrap_or(raw);

            self.pos = start + consumed;
            Some(Line {
                start,
                text,
                length_including_line_break: consumed,
            })
        }
    }

}
