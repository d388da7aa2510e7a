//! HRML Lexer
//!
//! Scans HRML source one line at a time. Every non-blank line holds exactly
//! one opening tag (`<name attr = "value">`) or closing tag (`</name>`);
//! the scanner turns it into a [`TagLine`] carrying the tag kind, its name
//! and its attributes in source order.
//!
//! # Example
//!
//! ```
//! use hrml_lexer::{Scanner, TagKind};
//!
//! let tags = Scanner::tokenize("<tag1 value = \"Hello\">\n</tag1>").unwrap();
//! assert_eq!(tags.len(), 2);
//! assert_eq!(tags[0].kind, TagKind::Open);
//! assert_eq!(tags[0].attribute("value"), Some("\"Hello\""));
//! ```

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{is_ident_char, Attribute, Span, TagKind, TagLine};

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Lexer error at line {line}, column {column}: {message}")]
pub struct LexerError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
