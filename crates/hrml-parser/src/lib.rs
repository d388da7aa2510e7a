//! HRML Parser
//!
//! Builds the document model from HRML source and tokenizes path queries.
//! The builder consumes tag lines from `hrml-lexer` and enforces the
//! structural rules of the markup: closing tags must match the open tag,
//! sibling tag names are unique, and every tag is closed by end of input.

pub mod ast;
pub mod parser;
pub mod query;

pub use ast::{Document, Tag};
pub use parser::Parser;
pub use query::Query;

use hrml_lexer::LexerError;

/// Structural error raised while building a document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The line itself could not be scanned.
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error("Parse error at line {line}: closing tag '{found}' does not match open tag '{expected}'")]
    MismatchedClosingTag {
        expected: String,
        found: String,
        line: usize,
    },

    #[error("Parse error at line {line}: closing tag '{name}' has no open tag")]
    UnexpectedClosingTag { name: String, line: usize },

    /// Two direct children of one parent share a name.
    #[error("Parse error at line {line}: duplicate tag '{name}' under the same parent")]
    DuplicateSibling { name: String, line: usize },

    /// End of input reached with a tag still open; `line` is where it opened.
    #[error("Parse error at line {line}: tag '{name}' is never closed")]
    UnterminatedTag { name: String, line: usize },
}

impl ParseError {
    /// 1-based source line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Lexer(e) => e.line,
            ParseError::MismatchedClosingTag { line, .. }
            | ParseError::UnexpectedClosingTag { line, .. }
            | ParseError::DuplicateSibling { line, .. }
            | ParseError::UnterminatedTag { line, .. } => *line,
        }
    }
}
