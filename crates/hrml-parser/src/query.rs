//! Path query grammar.
//!
//! ```text
//! query    := tag-path ( '~' attr-name )?
//! tag-path := tag-name ( '.' tag-name )*
//! ```
//!
//! Parsing never fails. Everything after the first `~` is the attribute
//! name, taken verbatim. Empty segments are kept so that lookups miss on them.

use std::fmt;

/// A tokenized path query borrowing from the query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<'a> {
    raw: &'a str,
    path: Vec<&'a str>,
    attribute: Option<&'a str>,
}

impl<'a> Query<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let (path, attribute) = match raw.split_once('~') {
            Some((path, attribute)) => (path, Some(attribute)),
            None => (raw, None),
        };

        Self {
            raw,
            path: path.split('.').collect(),
            attribute,
        }
    }

    /// The query text exactly as given.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Tag names to descend through, outermost first. Never empty.
    pub fn path(&self) -> &[&'a str] {
        &self.path
    }

    /// Attribute to read on the addressed tag; `None` for a bare tag path.
    pub fn attribute(&self) -> Option<&'a str> {
        self.attribute
    }
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_path_and_attribute() {
        let q = Query::parse("tag1.tag2~name");
        assert_eq!(q.path(), &["tag1", "tag2"]);
        assert_eq!(q.attribute(), Some("name"));
        assert_eq!(q.as_str(), "tag1.tag2~name");
    }

    #[test]
    fn test_single_segment() {
        let q = Query::parse("tag1~value");
        assert_eq!(q.path(), &["tag1"]);
        assert_eq!(q.attribute(), Some("value"));
    }

    #[test]
    fn test_bare_path_has_no_attribute() {
        let q = Query::parse("tag1.tag2");
        assert_eq!(q.path(), &["tag1", "tag2"]);
        assert_eq!(q.attribute(), None);
    }

    #[test]
    fn test_empty_query() {
        let q = Query::parse("");
        assert_eq!(q.path(), &[""]);
        assert_eq!(q.attribute(), None);
    }

    #[test]
    fn test_attribute_is_taken_verbatim() {
        let q = Query::parse("a~b.c~d");
        assert_eq!(q.path(), &["a"]);
        assert_eq!(q.attribute(), Some("b.c~d"));
    }

    #[test]
    fn test_empty_segments_are_kept() {
        assert_eq!(Query::parse(".a~x").path(), &["", "a"]);
        assert_eq!(Query::parse("a..b~x").path(), &["a", "", "b"]);
        assert_eq!(Query::parse("a.~x").path(), &["a", ""]);
        assert_eq!(Query::parse("~x").path(), &[""]);
    }

    #[test]
    fn test_empty_attribute() {
        assert_eq!(Query::parse("a~").attribute(), Some(""));
    }

    #[test]
    fn test_display_is_raw_text() {
        assert_eq!(Query::parse("a.b~c").to_string(), "a.b~c");
    }
}
