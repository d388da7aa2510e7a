use crate::token::{is_ident_char, Attribute, Span, TagKind, TagLine};
use crate::LexerError;

/// HRML line scanner.
///
/// HRML carries exactly one opening or closing tag per line, so the scanner
/// works one line at a time:
/// - `Vec<char>` line buffer for index-based navigation
/// - tag name read greedily after `<` or `</`
/// - attributes located by their `=` and read outwards from it
/// - position tracking for every error
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    /// Columns stripped from the start of the raw line.
    indent: usize,
}

impl Scanner {
    /// Create a scanner over a single line. `line` is 1-based.
    pub fn new(text: &str, line: usize) -> Self {
        let trimmed = text.trim_start();
        Self {
            chars: trimmed.trim_end().chars().collect(),
            pos: 0,
            line,
            indent: text.chars().count() - trimmed.chars().count(),
        }
    }

    /// Scan every line of `source`, skipping blank lines.
    pub fn tokenize(source: &str) -> Result<Vec<TagLine>, LexerError> {
        let mut tags = Vec::new();
        let mut offset = 0;

        for (index, raw) in source.split('\n').enumerate() {
            if let Some(mut tag) = Self::scan_line(raw, index + 1)? {
                tag.span.start += offset;
                tag.span.end += offset;
                tags.push(tag);
            }
            offset += raw.len() + 1;
        }

        Ok(tags)
    }

    /// Scan one line. Blank lines yield `None`.
    ///
    /// The returned span covers the line itself; offsets are relative to the
    /// start of `text`.
    pub fn scan_line(text: &str, line: usize) -> Result<Option<TagLine>, LexerError> {
        let mut scanner = Scanner::new(text, line);
        if scanner.chars.is_empty() {
            return Ok(None);
        }

        let tag = scanner.scan_tag(Span::new(0, text.len(), line, scanner.indent + 1))?;
        Ok(Some(tag))
    }

    /// Scan the tag on the current line.
    fn scan_tag(&mut self, span: Span) -> Result<TagLine, LexerError> {
        if self.peek() != '<' {
            return Err(self.error("Expected '<' at start of tag line".into()));
        }
        self.advance();

        let kind = if self.peek() == '/' {
            self.advance();
            TagKind::Close
        } else {
            TagKind::Open
        };

        let name = self.scan_name();
        if name.is_empty() {
            return Err(self.error("Missing tag name".into()));
        }

        let attributes = match kind {
            TagKind::Open => self.scan_attributes()?,
            TagKind::Close => Vec::new(),
        };

        Ok(TagLine {
            kind,
            name,
            attributes,
            span,
        })
    }

    // --- Scanners ---

    /// Skip non-identifier characters, then read identifier characters greedily.
    fn scan_name(&mut self) -> String {
        while !self.is_at_end() && !is_ident_char(self.peek()) {
            self.advance();
        }

        let mut name = String::new();
        while !self.is_at_end() && is_ident_char(self.peek()) {
            name.push(self.peek());
            self.advance();
        }
        name
    }

    /// Scan `name = "value"` pairs from the rest of the line.
    ///
    /// Each `=` anchors one attribute: the name is the identifier run just
    /// before it, the value is the first quoted run after it (quotes kept).
    /// Scanning resumes after the closing quote.
    fn scan_attributes(&mut self) -> Result<Vec<Attribute>, LexerError> {
        let mut attributes = Vec::new();

        while let Some(equals) = self.find_from(self.pos, '=') {
            let name = self.name_before(equals);
            if name.is_empty() {
                return Err(self.error_at(equals, "Missing attribute name before '='".into()));
            }

            let quoting_error =
                |s: &Self| s.error_at(equals, format!("Malformed quoting for attribute '{name}'"));
            let open = self
                .find_from(equals + 1, '"')
                .ok_or_else(|| quoting_error(self))?;
            let close = self
                .find_from(open + 1, '"')
                .ok_or_else(|| quoting_error(self))?;

            let value: String = self.chars[open..=close].iter().collect();
            attributes.push(Attribute { name, value });
            self.pos = close + 1;
        }

        Ok(attributes)
    }

    /// Identifier run ending right before `end`, ignoring whitespace in between.
    /// Never reaches back past the current scan position.
    fn name_before(&self, end: usize) -> String {
        let mut end = end;
        while end > self.pos && self.chars[end - 1].is_whitespace() {
            end -= 1;
        }

        let mut start = end;
        while start > self.pos && is_ident_char(self.chars[start - 1]) {
            start -= 1;
        }

        self.chars[start..end].iter().collect()
    }

    // --- Helpers ---

    fn find_from(&self, from: usize, target: char) -> Option<usize> {
        self.chars
            .get(from..)?
            .iter()
            .position(|&c| c == target)
            .map(|offset| from + offset)
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn error(&self, message: String) -> LexerError {
        self.error_at(self.pos, message)
    }

    fn error_at(&self, index: usize, message: String) -> LexerError {
        LexerError {
            message,
            line: self.line,
            column: self.indent + index + 1,
        }
    }
}
