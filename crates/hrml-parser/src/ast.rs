//! Document model for HRML.
//!
//! A document is a tree of [`Tag`]s owned top-down from an anonymous root.
//! Children are keyed by name, so a path of tag names addresses at most one
//! tag. The tree is built once by [`crate::Parser`] and only read afterwards.

use std::collections::BTreeMap;

/// A single HRML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    pub(crate) name: String,
    /// Attribute values keep their surrounding double quotes.
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) children: BTreeMap<String, Tag>,
}

impl Tag {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Tag name. Empty for the document root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quoted attribute value, e.g. `"Hello"` including the quotes.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn child(&self, name: &str) -> Option<&Tag> {
        self.children.get(name)
    }

    pub fn children(&self) -> impl Iterator<Item = &Tag> {
        self.children.values()
    }
}

/// A complete HRML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub(crate) root: Tag,
}

impl Document {
    /// The anonymous root. Top-level tags are its children.
    pub fn root(&self) -> &Tag {
        &self.root
    }

    /// Follow `path` child by child from the root.
    ///
    /// An empty path addresses the root itself.
    pub fn find<'p>(&self, path: impl IntoIterator<Item = &'p str>) -> Option<&Tag> {
        path.into_iter()
            .try_fold(&self.root, |tag, segment| tag.child(segment))
    }

    /// Number of tags in the document, root excluded.
    pub fn len(&self) -> usize {
        fn count(tag: &Tag) -> usize {
            tag.children.values().map(|child| 1 + count(child)).sum()
        }
        count(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}
