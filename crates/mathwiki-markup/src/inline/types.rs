/// A parsed inline node.
///
/// Bold and italic contents are literal text, never re-scanned for further
/// inline formatting; the grammar does not support nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text between special constructs.
    Text(String),
    /// `**bold**`
    Bold(String),
    /// `*italic*` or `_italic_`
    Italic(String),
    /// `$expr$` (inline) or `$$expr$$` (display), forwarded verbatim to the
    /// math delegate.
    Math { expr: String, display: bool },
    /// `![alt](url)` appearing inside running text.
    Image { alt: String, url: String },
}
