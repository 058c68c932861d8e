use crate::resolve::MediaKind;
use crate::sandbox::SandboxDocument;

/// Inline span styling carried by a `Styled` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanStyle {
    /// Any CSS color token, from `[color:V]`.
    Color(String),
    /// A resolved CSS font size, from `[size:V]`.
    FontSize(String),
}

/// A node of the safe render tree.
///
/// Everything a document can turn into is one of these variants; the HTML
/// serializer is the only place markup strings are assembled, so escaping
/// decisions live in exactly one module.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Text(String),
    /// `**bold**`, contents kept literal (no nesting).
    Strong(String),
    /// `*italic*` / `_italic_`, contents kept literal (no nesting).
    Emphasis(String),
    /// Colored or sized span; children are fully formatted.
    Styled {
        style: SpanStyle,
        children: Vec<RenderNode>,
    },
    /// Successful delegate output; `html` is trusted collaborator markup.
    Math { html: String, display: bool },
    /// Delegate failure fallback: the raw expression, shown unstyled.
    MathFallback { expr: String, display: bool },
    /// `[[Name]]`. Navigation is delegated to the host application.
    ArticleLink { target: String, exists: bool },
    /// `![alt](url)` inside running text.
    InlineImage { url: String, alt: String },
    /// Resolved media figure; `centered` for standalone image blocks.
    Figure {
        kind: MediaKind,
        src: String,
        mime_type: Option<String>,
        caption: Option<String>,
        centered: bool,
    },
    /// An inert, labeled code listing with a copy affordance (`[manim:code]`).
    CodeBlock {
        language: String,
        label: String,
        code: String,
        instance: String,
    },
    /// A sandboxed interactive animation (`[interactive:code]`).
    Sandbox { document: SandboxDocument },
    /// An external HTTPS iframe embed.
    Embed {
        url: String,
        width: String,
        height: String,
    },
    /// Literal error placeholder text; rendering always continues around it.
    Placeholder(String),
    Paragraph {
        children: Vec<RenderNode>,
        indented: bool,
    },
    /// Header and row cells are formatted independently; ragged rows are
    /// padded with empty cells at serialization.
    Table {
        headers: Vec<Vec<RenderNode>>,
        rows: Vec<Vec<Vec<RenderNode>>>,
    },
}
