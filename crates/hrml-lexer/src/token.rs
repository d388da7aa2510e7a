/// A position in source text, tracking line and column for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// Whether a line opens or closes a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<name attr = "value">`
    Open,
    /// `</name>`
    Close,
}

/// A single `name = "value"` pair from an opening tag line.
///
/// `value` keeps its surrounding double quotes exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One scanned HRML line.
///
/// Attributes are kept in source order, duplicates included. Closing lines
/// never carry attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct TagLine {
    pub kind: TagKind,
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

impl TagLine {
    pub fn is_open(&self) -> bool {
        self.kind == TagKind::Open
    }

    /// Last value written for `name` on this line.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }
}

/// Characters allowed in tag and attribute names.
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
