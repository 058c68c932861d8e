use crate::scan::Directive;

/// A piece of a paragraph line: literal text or an atomic directive.
///
/// Adjacent text segments are merged by the builder so that inline formatting
/// sees contiguous runs, including runs joined across soft line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Directive(Directive),
}

/// Where a standalone image block gets its bytes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A `![alt](url)` literal on its own paragraph.
    Url(String),
    /// An `[image:ID]` directive on its own paragraph, resolved against the
    /// media store at render time.
    Media { id: String },
}

/// A structural unit of the document, produced in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph {
        segments: Vec<Segment>,
        indented: bool,
    },
    /// Cells are raw text, formatted independently by the inline formatter.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A centered image figure.
    Image { source: ImageSource, alt: String },
}
