//! Stream strategy: keep the markup as text and re-scan it for every query.
//!
//! Each tag segment is searched among the children of the previous match.
//! Siblings that do not match are skipped whole by counting open and close
//! lines, so one query is a single forward pass over the markup.

use std::borrow::Cow;

use hrml_lexer::{Scanner, TagKind, TagLine};
use hrml_parser::Query;

use crate::Resolver;

/// Resolves queries by scanning the raw markup, without building a tree.
///
/// Markup is not validated. A line that fails to scan ends the search, and
/// when several siblings share a name the first one is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamResolver {
    source: String,
}

impl StreamResolver {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fresh pass over the scannable tag lines.
    fn tags(&self) -> impl Iterator<Item = TagLine> + '_ {
        self.source
            .split('\n')
            .enumerate()
            .map(|(index, text)| Scanner::scan_line(text, index + 1))
            .map_while(Result::ok)
            .flatten()
    }
}

impl Resolver for StreamResolver {
    fn lookup(&self, query: &Query<'_>) -> Option<Cow<'_, str>> {
        let attribute = query.attribute()?;
        let mut tags = self.tags();

        let mut matched = None;
        for segment in query.path() {
            matched = Some(find_child(&mut tags, segment)?);
        }

        let value = matched?.attribute(attribute)?.to_string();
        Some(Cow::Owned(value))
    }
}

/// Advance to the child named `name` of the tag whose contents `tags` is
/// positioned in. Stops at the enclosing closing line.
fn find_child(tags: &mut impl Iterator<Item = TagLine>, name: &str) -> Option<TagLine> {
    loop {
        let tag = tags.next()?;
        match tag.kind {
            TagKind::Close => return None,
            TagKind::Open if tag.name == name => return Some(tag),
            TagKind::Open => skip_subtree(tags)?,
        }
    }
}

/// Consume lines up to and including the close of a just-opened tag.
fn skip_subtree(tags: &mut impl Iterator<Item = TagLine>) -> Option<()> {
    let mut depth = 1usize;
    while depth > 0 {
        match tags.next()?.kind {
            TagKind::Open => depth += 1,
            TagKind::Close => depth -= 1,
        }
    }
    Some(())
}
