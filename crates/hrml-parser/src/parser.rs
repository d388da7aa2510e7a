//! Document builder for HRML.
//!
//! Consumes scanned tag lines (from `hrml-lexer`) in order and assembles the
//! `Document` tree. Nesting is tracked with a stack of open tags: an opening
//! line pushes, a closing line pops and attaches the finished tag to its
//! parent. No back-references are needed.

use crate::ast::{Document, Tag};
use crate::ParseError;
use hrml_lexer::{Scanner, TagKind, TagLine};

/// An open tag together with the line that opened it.
#[derive(Debug)]
struct OpenTag {
    tag: Tag,
    line: usize,
}

/// HRML document builder.
///
/// Lines are fed one at a time with [`Parser::push_line`]; the first
/// structural error aborts the build. [`Parser::finish`] checks that every
/// tag was closed and hands out the finished document.
#[derive(Debug)]
pub struct Parser {
    /// Open tags, innermost last. The anonymous root sits at the bottom.
    stack: Vec<OpenTag>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a builder holding only the document root.
    pub fn new() -> Self {
        Self {
            stack: vec![OpenTag {
                tag: Tag::default(),
                line: 0,
            }],
        }
    }

    /// Parse source text into a document.
    pub fn parse(source: &str) -> Result<Document, ParseError> {
        Self::from_lines(source.split('\n'))
    }

    /// Parse a sequence of lines into a document. Blank lines are skipped.
    pub fn from_lines<I, S>(lines: I) -> Result<Document, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = Parser::new();
        for (index, line) in lines.into_iter().enumerate() {
            if let Some(tag_line) = Scanner::scan_line(line.as_ref(), index + 1)? {
                parser.push_line(tag_line)?;
            }
        }
        parser.finish()
    }

    /// Apply one scanned line to the tree under construction.
    pub fn push_line(&mut self, line: TagLine) -> Result<(), ParseError> {
        match line.kind {
            TagKind::Open => self.open(line),
            TagKind::Close => self.close(line),
        }
    }

    /// Finish the build. Fails if any tag is still open.
    pub fn finish(mut self) -> Result<Document, ParseError> {
        if self.stack.len() > 1 {
            let innermost = self.current();
            return Err(ParseError::UnterminatedTag {
                name: innermost.tag.name.clone(),
                line: innermost.line,
            });
        }

        let root = self
            .stack
            .pop()
            .map(|open| open.tag)
            .unwrap_or_default();
        let document = Document { root };
        tracing::debug!(tags = document.len(), "built HRML document");
        Ok(document)
    }

    /// Nesting depth of the tag currently open; zero at the root.
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    // =========================================================================
    // Opening and closing
    // =========================================================================

    fn open(&mut self, line: TagLine) -> Result<(), ParseError> {
        // Earlier siblings are already closed and attached to the parent, so
        // a clash with them is visible here.
        if self.current().tag.children.contains_key(&line.name) {
            return Err(ParseError::DuplicateSibling {
                name: line.name,
                line: line.span.line,
            });
        }

        let mut tag = Tag::new(line.name);
        for attribute in line.attributes {
            tag.attributes.insert(attribute.name, attribute.value);
        }

        tracing::trace!(name = %tag.name, depth = self.stack.len(), "open tag");
        self.stack.push(OpenTag {
            tag,
            line: line.span.line,
        });
        Ok(())
    }

    fn close(&mut self, line: TagLine) -> Result<(), ParseError> {
        if self.stack.len() == 1 {
            return Err(ParseError::UnexpectedClosingTag {
                name: line.name,
                line: line.span.line,
            });
        }

        if self.current().tag.name != line.name {
            return Err(ParseError::MismatchedClosingTag {
                expected: self.current().tag.name.clone(),
                found: line.name,
                line: line.span.line,
            });
        }

        if let Some(finished) = self.stack.pop() {
            tracing::trace!(name = %finished.tag.name, depth = self.stack.len(), "close tag");
            let parent = self.current_mut();
            parent
                .tag
                .children
                .insert(finished.tag.name.clone(), finished.tag);
        }
        Ok(())
    }

    // --- Helpers ---

    fn current(&self) -> &OpenTag {
        // The root is never popped while lines are being pushed.
        &self.stack[self.stack.len() - 1]
    }

    fn current_mut(&mut self) -> &mut OpenTag {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }
}
