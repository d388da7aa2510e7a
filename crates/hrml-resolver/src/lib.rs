//! HRML Path Query Resolver
//!
//! Answers `tag.tag~attribute` queries against HRML markup. Two strategies
//! implement the same [`Resolver`] contract:
//!
//! ```text
//! TagTree  : source → Document (built once) → lookup per query
//! InStream : source kept as text → re-scanned per query
//! ```
//!
//! Resolution never fails: a miss of any kind renders as
//! `"<query> not found"`, a hit as `<query>=<value>` with the value's own
//! double quotes.

pub mod stream;
pub mod tree;

pub use hrml_parser::{Document, ParseError, Query};
pub use stream::StreamResolver;
pub use tree::TreeResolver;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Evaluates path queries against one HRML document.
pub trait Resolver {
    /// Stored attribute value (quotes included) addressed by `query`, or
    /// `None` when a tag segment or the attribute is missing, or when the
    /// query has no attribute part.
    fn lookup(&self, query: &Query<'_>) -> Option<Cow<'_, str>>;

    /// Render the answer to `query` as an output line.
    fn resolve(&self, query: &str) -> String {
        let parsed = Query::parse(query);
        match self.lookup(&parsed) {
            Some(value) => format!("{query}={value}"),
            None => {
                tracing::debug!(query, "query not found");
                format!("{query} not found")
            }
        }
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn lookup(&self, query: &Query<'_>) -> Option<Cow<'_, str>> {
        (**self).lookup(query)
    }
}

/// Resolve every query in order, one output line per query.
pub fn resolve_all<R, I, S>(resolver: &R, queries: I) -> Vec<String>
where
    R: Resolver + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    queries
        .into_iter()
        .map(|query| resolver.resolve(query.as_ref()))
        .collect()
}

/// Selects a resolution strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Build the document tree once, then walk it per query.
    #[default]
    TagTree,
    /// Keep the markup as text and re-scan it per query.
    InStream,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::TagTree => "tag_tree",
            Strategy::InStream => "in_stream",
        }
    }

    /// Prepare a resolver over `source`.
    ///
    /// Only the tree strategy checks the markup up front; the stream strategy
    /// reports malformed markup as misses.
    pub fn build(self, source: &str) -> Result<Box<dyn Resolver>, ParseError> {
        Ok(match self {
            Strategy::TagTree => Box::new(TreeResolver::parse(source)?),
            Strategy::InStream => Box::new(StreamResolver::new(source)),
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown parser: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tag_tree" | "tag-tree" => Ok(Strategy::TagTree),
            "in_stream" | "in-stream" => Ok(Strategy::InStream),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}
