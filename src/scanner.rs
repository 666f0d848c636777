// Copyright (C) Brian G. Milnes 2025

//! Line classifier and span tracker
//!
//! One forward pass over the document lines. Each line is classified as
//! blank, comment, using directive, namespace declaration, opening brace,
//! or code. The pass records the directives it sees and the two regions
//! that hold them:
//!
//! - the pre-namespace region: directives before the namespace declaration
//! - the namespace region: directives in the namespace body, or every
//!   directive when the file has no namespace declaration
//!
//! The scan stops at the first line of real code (or at the end of the
//! document). Lone `;` lines and opening braces before the namespace
//! declaration are skipped. Comment runs in front of a region's first
//! directive are headers and stay where they are. A comment run right before
//! the line that closes a region is preserved; blank lines in front of it are
//! swallowed.
//!
//! A directive still missing its `;` when the scan ends makes the whole scan
//! empty: the file is left alone rather than split mid-statement.

pub mod scanner {
    use crate::directive::directive::{is_comment_line, is_continuation_line, is_directive_line, is_namespace_line, Directive};
    use crate::document::document::{Document, Line};
    use crate::edit::edit::Span;

    /// Everything the formatter needs from one pass
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct Scan {
        /// Directives in source order
        pub directives: Vec<Directive>,
        /// Where the reorganized block goes
        pub insertion_offset: usize,
        /// Directives before the namespace declaration
        pub pre_namespace_span: Option<Span>,
        /// Directives inside the namespace body, or all of them without a namespace
        pub namespace_span: Option<Span>,
        /// Indentation applied to every emitted line
        pub indent: String,
    }

    impl Scan {
        pub fn is_empty(&self) -> bool {
            self.directives.is_empty()
        }

        /// Deletions in the order the edit applies them
        pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
            self.namespace_span.iter().chain(self.pre_namespace_span.iter()).copied()
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LineKind {
        Blank,
        Comment,
        Directive,
        Namespace,
        OpenBrace,
        Terminator,
        Code,
    }

    pub fn classify(text: &str) -> LineKind {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            LineKind::Blank
        } else if is_comment_line(trimmed) {
            LineKind::Comment
        } else if is_directive_line(trimmed) {
            LineKind::Directive
        } else if is_namespace_line(trimmed) {
            LineKind::Namespace
        } else if trimmed == "{" {
            LineKind::OpenBrace
        } else if trimmed == ";" {
            LineKind::Terminator
        } else {
            LineKind::Code
        }
    }

    /// Current run of blank and comment lines
    #[derive(Debug, Default)]
    struct CommentRun {
        first_comment: Option<usize>,
        comments: Vec<String>,
    }

    impl CommentRun {
        fn push_comment(&mut self, line: &Line<'_>) {
            self.first_comment.get_or_insert(line.start);
            self.comments.push(line.text.trim().to_string());
        }

        /// Where the preserved part of the run starts, given the line that ends it
        fn preserved_from(&self, cursor: usize) -> usize {
            self.first_comment.unwrap_or(cursor)
        }

        /// Comments inside a multi-line directive move with the next directive
        fn absorb(&mut self) {
            self.first_comment = None;
        }

        fn take_comments(&mut self) -> Vec<String> {
            std::mem::take(&mut self.comments)
        }

        fn reset(&mut self) {
            self.first_comment = None;
            self.comments.clear();
        }
    }

    /// Running state of a scan
    struct ScanState {
        place_inside_namespace: bool,
        run: CommentRun,
        directives: Vec<Directive>,
        /// First directive of the region being collected
        region_start: Option<usize>,
        /// First directive before any namespace declaration
        pre_namespace_start: Option<usize>,
        namespace_line: Option<usize>,
        body_opened: bool,
        pre_namespace_span: Option<Span>,
        namespace_span: Option<Span>,
        /// Just past the namespace line, or past the body's `{` once seen
        body_anchor: usize,
        /// Where the body region ends when the body has no directives
        body_end: usize,
        indent: String,
    }

    impl ScanState {
        fn new(place_inside_namespace: bool) -> Self {
            ScanState {
                place_inside_namespace,
                run: CommentRun::default(),
                directives: Vec::new(),
                region_start: None,
                pre_namespace_start: None,
                namespace_line: None,
                body_opened: false,
                pre_namespace_span: None,
                namespace_span: None,
                body_anchor: 0,
                body_end: 0,
                indent: String::new(),
            }
        }

        fn namespace_reached(&self) -> bool {
            self.namespace_line.is_some()
        }

        /// The last directive of the current region, if it still lacks its `;`
        fn open_directive(&mut self) -> Option<&mut Directive> {
            self.region_start?;
            self.directives.last_mut().filter(|d| d.is_open())
        }

        fn capture_indent(&mut self, line: &Line<'_>) {
            if self.place_inside_namespace
                && self.namespace_reached()
                && self.indent.is_empty()
                && !line.text.trim().is_empty()
            {
                self.indent = line.indentation().to_string();
            }
        }

        /// Handle one line; false once the scan is over
        fn step(&mut self, line: &Line<'_>) -> bool {
            self.capture_indent(line);

            let kind = classify(line.text);
            match kind {
                LineKind::Blank => return true,
                LineKind::Comment => {
                    self.run.push_comment(line);
                    return true;
                }
                _ => {}
            }

            if matches!(kind, LineKind::Code | LineKind::Terminator) && is_continuation_line(line.text.trim()) {
                if let Some(directive) = self.open_directive() {
                    directive.continue_with(line.text);
                    self.run.absorb();
                    return true;
                }
            }

            let keep_going = match kind {
                LineKind::Directive => {
                    self.record_directive(line);
                    true
                }
                LineKind::Namespace if !self.namespace_reached() => {
                    self.enter_namespace(line);
                    true
                }
                // No-op statement
                LineKind::Terminator => return true,
                LineKind::OpenBrace if !self.namespace_reached() => return true,
                LineKind::OpenBrace if !self.body_opened && self.region_start.is_none() => {
                    self.body_opened = true;
                    self.body_anchor = line.next_start();
                    true
                }
                _ => {
                    self.finish(line.start);
                    false
                }
            };

            self.run.reset();
            keep_going
        }

        fn record_directive(&mut self, line: &Line<'_>) {
            let comments = if self.region_start.is_some() {
                self.run.take_comments()
            } else {
                // Header comments of the region stay in place
                self.region_start = Some(line.start);
                if !self.namespace_reached() {
                    self.pre_namespace_start = Some(line.start);
                }
                Vec::new()
            };
            self.directives.push(Directive::with_comments(line.text, comments));
        }

        fn enter_namespace(&mut self, line: &Line<'_>) {
            let end = self.run.preserved_from(line.start);
            self.pre_namespace_span = self.region_start.take().map(|start| Span::between(start, end));
            self.namespace_line = Some(line.start);
            self.body_anchor = line.next_start();
        }

        /// Close the region at `cursor`, the start of the line that ends the scan
        fn finish(&mut self, cursor: usize) {
            let end = self.run.preserved_from(cursor);
            self.namespace_span = self.region_start.take().map(|start| Span::between(start, end));
            self.body_end = end;
        }

        /// Blank lines between the body anchor and the rest of an empty body.
        /// They are replaced so the block lands right after the anchor.
        fn blank_body_span(&self, text: &str) -> Option<Span> {
            let (start, end) = (self.body_anchor, self.body_end);
            (self.place_inside_namespace
                && self.namespace_reached()
                && self.namespace_span.is_none()
                && end > start
                && text[start..end].trim().is_empty())
            .then(|| Span::between(start, end))
        }

        fn into_scan(mut self, text: &str) -> Scan {
            if self.directives.is_empty() || self.directives.iter().any(Directive::is_open) {
                return Scan::default();
            }

            if let Some(span) = self.blank_body_span(text) {
                self.namespace_span = Some(span);
            }

            let insertion_offset = match (self.namespace_line, self.place_inside_namespace) {
                (Some(_), true) => self.namespace_span.map_or(self.body_anchor, |span| span.start),
                (Some(namespace_line), false) => self.pre_namespace_start.unwrap_or(namespace_line),
                (None, _) => self.namespace_span.map_or(0, |span| span.start),
            };

            Scan {
                directives: self.directives,
                insertion_offset,
                pre_namespace_span: self.pre_namespace_span,
                namespace_span: self.namespace_span,
                indent: self.indent,
            }
        }
    }

    /// Scan a document for its leading using directives
    pub fn scan(document: &Document<'_>, place_inside_namespace: bool) -> Scan {
        let mut state = ScanState::new(place_inside_namespace);
        let mut finished = false;

        for line in document.lines() {
            if !state.step(&line) {
                finished = true;
                break;
            }
        }

        if !finished {
            state.finish(document.len());
        }

        state.into_scan(document.text())
    }

}
