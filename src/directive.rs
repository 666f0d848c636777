// Copyright (C) Brian G. Milnes 2025

//! Using directives as captured from a source file

pub mod directive {
    pub const USING_KEYWORD: &str = "using";
    pub const NAMESPACE_KEYWORD: &str = "namespace";
    const STATIC_MODIFIER: &str = "static";

    /// True if `text` starts with `keyword` as a whole word
    pub fn starts_with_keyword(text: &str, keyword: &str) -> bool {
        match text.strip_prefix(keyword) {
            Some(rest) => rest.chars().next().map_or(true, char::is_whitespace),
            None => false,
        }
    }

    pub fn is_directive_line(trimmed: &str) -> bool {
        starts_with_keyword(trimmed, USING_KEYWORD)
    }

    pub fn is_namespace_line(trimmed: &str) -> bool {
        starts_with_keyword(trimmed, NAMESPACE_KEYWORD)
    }

    pub fn is_comment_line(trimmed: &str) -> bool {
        trimmed.starts_with('/')
    }

    /// Split `text` at the start of a trailing comment.
    /// Directives hold no string literals, so the first `//` or `/*` starts one.
    pub fn split_trailing_comment(text: &str) -> (&str, Option<&str>) {
        let start = [text.find("//"), text.find("/*")].into_iter().flatten().min();
        match start {
            Some(pos) => (text[..pos].trim_end(), Some(&text[pos..])),
            None => (text, None),
        }
    }

    /// A line that can carry on an unfinished directive: it ends the statement,
    /// or it continues a qualified name or an alias across the line break
    pub fn is_continuation_line(trimmed: &str) -> bool {
        let statement = split_trailing_comment(trimmed).0;
        !statement.contains(['{', '}'])
            && (statement.ends_with([';', '.', '='])
                || statement.starts_with(['.', '=', ';']))
    }

    /// A single using directive.
    ///
    /// Directives have no identity beyond their text; duplicates stay separate.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Directive {
        text: String,
        leading_comments: Vec<String>,
    }

    impl Directive {
        pub fn new(text: &str) -> Self {
            Directive {
                text: text.trim().to_string(),
                leading_comments: Vec::new(),
            }
        }

        /// A directive together with the comment lines written above it
        pub fn with_comments(text: &str, comments: Vec<String>) -> Self {
            Directive {
                text: text.trim().to_string(),
                leading_comments: comments.into_iter().map(|c| c.trim().to_string()).collect(),
            }
        }

        pub fn text(&self) -> &str {
            &self.text
        }

        pub fn leading_comments(&self) -> &[String] {
            &self.leading_comments
        }

        /// Directive text without a trailing `//` or `/* */` comment
        pub fn statement(&self) -> &str {
            split_trailing_comment(&self.text).0
        }

        /// Still waiting for its terminating semicolon
        pub fn is_open(&self) -> bool {
            !self.statement().ends_with(';')
        }

        /// Join a continuation line of a directive written across lines.
        /// A trailing comment of the text so far moves to the end.
        pub fn continue_with(&mut self, line: &str) {
            let line = line.trim();
            if line.is_empty() {
                return;
            }
            let (statement, comment) = split_trailing_comment(&self.text);
            let mut text = statement.to_string();
            if !line.starts_with(';') {
                text.push(' ');
            }
            text.push_str(line);
            if let Some(comment) = comment {
                text.push(' ');
                text.push_str(comment);
            }
            self.text = text;
        }

        pub fn trim_end(&mut self) {
            let len = self.text.trim_end().len();
            self.text.truncate(len);
        }

        /// The imported path: `using static A.B;` and `using X = A.B;` both name `A.B`
        pub fn name(&self) -> &str {
            let mut rest = self.statement();
            if let Some(after) = rest.strip_prefix(USING_KEYWORD) {
                rest = after.trim_start();
            }
            if starts_with_keyword(rest, STATIC_MODIFIER) {
                rest = rest[STATIC_MODIFIER.len()..].trim_start();
            }
            if let Some((_, target)) = rest.split_once('=') {
                rest = target.trim_start();
            }
            rest.trim_end().trim_end_matches(';').trim_end()
        }

        pub fn segment_count(&self) -> usize {
            let name = self.name();
            if name.is_empty() {
                0
            } else {
                name.split('.').count()
            }
        }
    }

}
