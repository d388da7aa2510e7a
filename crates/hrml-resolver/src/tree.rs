//! Tree strategy: build the document once, walk it for every query.

use std::borrow::Cow;

use hrml_parser::{Document, ParseError, Parser, Query};

use crate::Resolver;

/// Resolves queries against a prebuilt [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeResolver {
    document: Document,
}

impl TreeResolver {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Build the document from `source`, failing on any structural error.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        Parser::parse(source).map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl From<Document> for TreeResolver {
    fn from(document: Document) -> Self {
        Self::new(document)
    }
}

impl Resolver for TreeResolver {
    fn lookup(&self, query: &Query<'_>) -> Option<Cow<'_, str>> {
        let tag = self.document.find(query.path().iter().copied())?;
        let attribute = query.attribute()?;
        tag.attribute(attribute).map(Cow::Borrowed)
    }
}
